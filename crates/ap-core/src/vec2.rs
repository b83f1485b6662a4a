//! Plain 2D vector math for steering.
//!
//! `Vec2` uses `f32` throughout — the host simulation integrates positions and
//! velocities in single precision, so higher precision here would be wasted.
//! Angles are in **degrees** in `[0, 360)`, matching the host's heading
//! convention.

use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D vector (position, velocity, or desired movement).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn len(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length — cheaper when only comparing magnitudes.
    #[inline]
    pub fn len2(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Distance to `other`.
    #[inline]
    pub fn dst(self, other: Vec2) -> f32 {
        (other - self).len()
    }

    /// Heading in degrees, normalized to `[0, 360)`.
    ///
    /// The zero vector has no meaningful heading; this returns `0.0` for it.
    pub fn angle(self) -> f32 {
        let deg = self.y.atan2(self.x).to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }

    /// Same length, new heading.
    pub fn with_angle(self, degrees: f32) -> Vec2 {
        let len = self.len();
        let rad = degrees.to_radians();
        Vec2::new(rad.cos() * len, rad.sin() * len)
    }

    /// Clamp the length to at most `max`, preserving direction.
    pub fn limit(self, max: f32) -> Vec2 {
        let l2 = self.len2();
        if l2 > max * max {
            self * (max / l2.sqrt())
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Angular helpers ───────────────────────────────────────────────────────────

/// Interpolate between two headings (degrees) along the shortest arc.
///
/// `t = 0` returns `from`, `t = 1` returns `to`.  The result is normalized to
/// `[0, 360)`.  Going from 350° to 10° with `t = 0.5` yields 0°, not 180°.
pub fn slerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    let shortest = if delta > 180.0 { delta - 360.0 } else { delta };
    (from + shortest * t).rem_euclid(360.0)
}

/// Scaled sine: `sin(phase / period) * amplitude`.
///
/// Used for the idle heading wobble of hovering fliers.
#[inline]
pub fn sin_wave(phase: f32, period: f32, amplitude: f32) -> f32 {
    (phase / period).sin() * amplitude
}
