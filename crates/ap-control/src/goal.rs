//! The movement goal, keyed by mode.

use ap_core::{CellId, UnitId};

/// What the agent is steering toward, as a tagged union: each mode carries
/// exactly the handle it needs, so a stale leftover from a previous
/// activation is unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Fly/drive to a static cell, then stop.
    Cell(CellId),

    /// Approach a unit; with `follow` the agent keeps tracking it after
    /// first reaching it.
    Unit { unit: UnitId, follow: bool },

    /// Follow a leader and continuously re-adopt its current construction
    /// task as the agent's own.
    Assist(UnitId),

    /// Follow a leader and queue the inverse of every construction task it
    /// works.
    Undo(UnitId),
}

impl Goal {
    /// Does reaching the target keep the goal alive?
    ///
    /// Cell goals are one-shot; unit goals persist when following; assist
    /// and undo always persist.
    pub fn persist(self) -> bool {
        match self {
            Goal::Cell(_) => false,
            Goal::Unit { follow, .. } => follow,
            Goal::Assist(_) | Goal::Undo(_) => true,
        }
    }

    /// The leader whose tasks are mirrored or inverted, if this is an
    /// assist/undo goal.
    pub fn leader(self) -> Option<UnitId> {
        match self {
            Goal::Assist(leader) | Goal::Undo(leader) => Some(leader),
            _ => None,
        }
    }
}

/// A goal plus its arrival threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveGoal {
    pub goal: Goal,

    /// Straight-line distance below which the target counts as reached.
    pub arrive_radius: f32,
}
