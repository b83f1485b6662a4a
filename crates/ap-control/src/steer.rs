//! Steering: target resolution, velocity and heading updates, and
//! leader-task mirroring.
//!
//! Runs only while a movement goal is active.  The velocity model is
//! impulse-based: the controller writes a clamped desired-movement vector and
//! adds `desired * delta` to the agent's velocity; the host's physics
//! integrates velocity into position and applies drag.

use ap_core::{SimTime, UnitId, Vec2, sin_wave, slerp_angle};
use ap_host::{BuildPlan, Host};
use tracing::{debug, trace};

use crate::{Autopilot, Goal};

/// Per-tick blend of the desired heading toward the current velocity
/// heading.  Damps abrupt direction reversals.
const HEADING_SMOOTHING: f32 = 0.05;

/// Below this speed a flier is considered hovering and gets the idle wobble.
const HOVER_SPEED: f32 = 0.2;

/// Period and amplitude of the idle heading wobble.
const WOBBLE_PERIOD: f32 = 10.0;
const WOBBLE_AMPLITUDE: f32 = 1.0;

/// Heading turn rate is `|velocity| / TURN_RATE_DIVISOR` per tick — faster
/// movement turns the nose quicker.
const TURN_RATE_DIVISOR: f32 = 10.0;

impl Autopilot {
    pub(crate) fn update_steering<H: Host>(&mut self, host: &mut H, time: SimTime) {
        let Some(active) = self.active_goal() else {
            return;
        };

        // Resolve the target position; a stale handle drops the goal.
        let target = match active.goal {
            Goal::Cell(cell) => host.cell_position(cell),
            Goal::Unit { unit, .. } => host.unit_position(unit),
            Goal::Assist(leader) | Goal::Undo(leader) => host.unit_position(leader),
        };
        let Some(target) = target else {
            debug!(goal = ?active.goal, "steering target went stale, dropping goal");
            self.drop_goal();
            return;
        };

        let speed = if host.is_flying() {
            host.flight_speed()
        } else {
            host.boost_speed()
        };
        let pos = host.position();

        if pos.dst(target) < active.arrive_radius {
            host.set_movement(Vec2::ZERO);
            if !active.goal.persist() {
                trace!(goal = ?active.goal, "arrived, deactivating");
                host.set_boosting(false);
                self.drop_goal();
            }
        } else {
            host.set_boosting(true);
            let desired = ((target - pos) * (1.0 / time.delta)).limit(speed);
            let smoothed = desired.with_angle(slerp_angle(
                desired.angle(),
                host.velocity().angle(),
                HEADING_SMOOTHING,
            ));
            host.set_movement(smoothed);
            host.set_velocity(host.velocity() + smoothed * time.delta);
        }

        self.update_facing(host, time);

        match active.goal {
            Goal::Assist(leader) => mirror_leader(host, leader),
            Goal::Undo(leader) => invert_leader(host, leader),
            _ => {}
        }
    }

    /// Heading update, independent of arrival.
    ///
    /// A hovering flier gets a cosmetic sine wobble (phase-shifted by unit id
    /// so a group doesn't bob in lockstep).  Otherwise, unless something
    /// external is aiming, the nose turns toward the velocity vector at a
    /// rate proportional to speed.
    fn update_facing<H: Host>(&self, host: &mut H, time: SimTime) {
        let vel = host.velocity();
        if vel.len() <= HOVER_SPEED && host.is_flying() {
            let phase = time.time + host.unit_id().0 as f32 * 99.0;
            let wobble = sin_wave(phase, WOBBLE_PERIOD, WOBBLE_AMPLITUDE);
            host.set_heading(host.heading() + wobble);
        } else if !host.has_aim_target() {
            let t = (time.delta * vel.len() / TURN_RATE_DIVISOR).min(1.0);
            host.set_heading(slerp_angle(host.heading(), vel.angle(), t));
        }
    }
}

/// Re-adopt the leader's current task, discarding any queued work of our own.
fn mirror_leader<H: Host>(host: &mut H, leader: UnitId) {
    let Some(plan) = host.unit_build_plan(leader) else {
        return;
    };
    host.clear_build_queue();
    host.push_plan_front(plan);
    host.set_building(true);
}

/// Queue the inverse of the leader's current task at the tail of our queue.
// TODO: mirror reconfigure payloads once `BuildPlan` carries them.
fn invert_leader<H: Host>(host: &mut H, leader: UnitId) {
    let Some(plan) = host.unit_build_plan(leader) else {
        return;
    };
    let inverse = match plan {
        BuildPlan::Remove { x, y } => {
            // Reconstruct whatever stands there right now, at its current
            // rotation.  An already-empty tile has nothing to restore.
            match host.block_at(x, y) {
                Some((block, rotation)) => BuildPlan::Place { x, y, rotation, block },
                None => return,
            }
        }
        BuildPlan::Place { x, y, .. } => BuildPlan::Remove { x, y },
    };
    host.push_plan_back(inverse);
    host.set_building(true);
}
