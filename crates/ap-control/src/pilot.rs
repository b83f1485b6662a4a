//! The `Autopilot` struct: controller state, activation operations, and the
//! per-tick entry point.

use ap_core::{CellId, Interval, SimTime, UnitId};
use ap_host::{AgentBody, Host, WorldView};
use tracing::debug;

use crate::{ActiveGoal, ControlError, ControlResult, Goal};

/// Ticks between auto-deposit attempts.  Keeps the transfer command from
/// being spammed every tick while the agent stands next to the target.
const TRANSFER_PERIOD: f32 = 50.0;

/// Autonomous-behavior controller for one agent.
///
/// Bound to a single agent for its whole life; the host hands the agent's
/// body (plus world lookups and a command sink) to every call that needs
/// them.  All state lives here — the controller stores no host pointers, only
/// weak `CellId`/`UnitId` handles that are re-validated on every use.
///
/// The movement goal and the two tracking references are deliberately
/// decoupled: [`cancel`][Autopilot::cancel] drops the goal but leaves
/// `tracked_source` and `dump_target` running.
#[derive(Debug)]
pub struct Autopilot {
    /// Master switch.  While false, [`update`][Autopilot::update] is a no-op.
    pub enabled: bool,

    goal: Option<ActiveGoal>,
    tracked_source: Option<CellId>,
    dump_target: Option<CellId>,
    transfer_timer: Interval,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            enabled: true,
            goal: None,
            tracked_source: None,
            dump_target: None,
            transfer_timer: Interval::new(TRANSFER_PERIOD),
        }
    }

    // ── Activation operations ─────────────────────────────────────────────

    /// Steer to a static cell, stopping within `distance` of it.
    pub fn goto_cell(&mut self, cell: CellId, distance: f32) {
        debug!(%cell, distance, "goto cell");
        self.set_goal(Goal::Cell(cell), distance);
    }

    /// Steer to a unit; with `follow`, keep tracking it after arrival.
    pub fn goto_unit(&mut self, unit: UnitId, distance: f32, follow: bool) {
        debug!(%unit, distance, follow, "goto unit");
        self.set_goal(Goal::Unit { unit, follow }, distance);
    }

    /// Follow `leader` and re-adopt its current construction task each tick.
    pub fn assist(&mut self, leader: UnitId, distance: f32) {
        debug!(%leader, distance, "assist leader");
        self.set_goal(Goal::Assist(leader), distance);
    }

    /// Follow `leader` and queue the inverse of each task it works.
    pub fn undo(&mut self, leader: UnitId, distance: f32) {
        debug!(%leader, distance, "undo leader");
        self.set_goal(Goal::Undo(leader), distance);
    }

    fn set_goal(&mut self, goal: Goal, arrive_radius: f32) {
        self.goal = Some(ActiveGoal { goal, arrive_radius });
    }

    /// Track `cell` and keep its output pinned to the scarcest material.
    ///
    /// Rejected (state unchanged) unless the cell currently holds an output
    /// facility.
    pub fn set_tracked_source<H: WorldView>(
        &mut self,
        host: &H,
        cell: CellId,
    ) -> ControlResult<()> {
        if !host.is_output_facility(cell) {
            return Err(ControlError::NotAnOutputFacility(cell));
        }
        debug!(%cell, "tracking output facility");
        self.tracked_source = Some(cell);
        Ok(())
    }

    /// Set (or with `None`, clear) the auto-deposit target.
    ///
    /// A `Some` target is rejected (state unchanged) unless the cell accepts
    /// items and is interactable by the agent's team.
    pub fn set_dump_target<H: WorldView + AgentBody>(
        &mut self,
        host: &H,
        cell: Option<CellId>,
    ) -> ControlResult<()> {
        let Some(cell) = cell else {
            self.dump_target = None;
            return Ok(());
        };
        if !host.accepts_items(cell) || !host.is_interactable(cell, host.team()) {
            return Err(ControlError::TargetRejectsItems(cell, host.team()));
        }
        debug!(%cell, "auto-deposit target set");
        self.dump_target = Some(cell);
        Ok(())
    }

    /// Drop the movement goal.  Source tracking and the deposit target are
    /// independent subsystems and keep running.
    pub fn cancel(&mut self) {
        self.goal = None;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Is a movement goal currently pursued?
    pub fn is_active(&self) -> bool {
        self.goal.is_some()
    }

    pub fn goal(&self) -> Option<&ActiveGoal> {
        self.goal.as_ref()
    }

    pub fn tracked_source(&self) -> Option<CellId> {
        self.tracked_source
    }

    pub fn dump_target(&self) -> Option<CellId> {
        self.dump_target
    }

    // ── Tick entry point ──────────────────────────────────────────────────

    /// Run one controller tick.  Must be called exactly once per simulation
    /// tick by the host driver.  Infallible: stale references deactivate the
    /// affected sub-behavior instead of erroring.
    pub fn update<H: Host>(&mut self, host: &mut H, time: SimTime) {
        if !self.enabled {
            return;
        }
        self.update_source_tracking(host);
        self.update_auto_dump(host, time);
        self.update_steering(host, time);
    }

    // ── Shared with the sub-behavior modules ──────────────────────────────

    pub(crate) fn drop_goal(&mut self) {
        self.goal = None;
    }

    pub(crate) fn drop_tracked_source(&mut self) {
        self.tracked_source = None;
    }

    pub(crate) fn drop_dump_target(&mut self) {
        self.dump_target = None;
    }

    pub(crate) fn active_goal(&self) -> Option<ActiveGoal> {
        self.goal
    }

    pub(crate) fn transfer_ready(&mut self, now: f32) -> bool {
        self.transfer_timer.ready(now)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}
