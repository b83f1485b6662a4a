//! Simulation time model.
//!
//! The host owns the clock.  Each tick it hands the controller a [`SimTime`]
//! snapshot: the monotonically increasing simulation time and the tick's
//! delta, both in tick units (one tick at the nominal rate has `delta ≈ 1`).
//! The controller never reads wall-clock time.

/// Per-tick snapshot of the host's simulation clock.
///
/// Cheap to copy; built fresh by the host driver for every `update()` call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime {
    /// Monotonically increasing simulation time, in tick units.
    pub time: f32,
    /// Duration of the current tick, in tick units.
    pub delta: f32,
}

impl SimTime {
    #[inline]
    pub fn new(time: f32, delta: f32) -> Self {
        Self { time, delta }
    }
}

// ── Interval ──────────────────────────────────────────────────────────────────

/// A debounce timer over simulation time.
///
/// [`ready`][Interval::ready] fires at most once per `period`, resetting its
/// window whenever it fires — including when the caller then decides to do
/// nothing.  This matches interval-timer semantics rather than a cooldown
/// that only arms after an action.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    period: f32,
    last: Option<f32>,
}

impl Interval {
    /// A timer with the given period (tick units).  The first `ready` call
    /// always fires.
    pub fn new(period: f32) -> Self {
        Self { period, last: None }
    }

    /// True at most once per period.  Resets the window when it fires.
    pub fn ready(&mut self, now: f32) -> bool {
        match self.last {
            Some(last) if now - last < self.period => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
