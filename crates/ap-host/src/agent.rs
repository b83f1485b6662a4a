//! The bound agent's body.

use ap_core::{CellId, Team, UnitId, Vec2};

use crate::{BuildPlan, ItemStack};

/// Mutable access to the one agent this controller drives.
///
/// The host implements this over whatever entity type backs the agent;
/// physics integration of `velocity` into `position` stays on the host side.
/// The controller only writes the desired-movement vector, adds velocity
/// impulses, and flips the boosting/building flags.
pub trait AgentBody {
    fn unit_id(&self) -> UnitId;

    fn team(&self) -> Team;

    /// Current world position.
    fn position(&self) -> Vec2;

    /// Current velocity.
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, v: Vec2);

    /// The desired-movement vector the host's physics consumes.
    fn movement(&self) -> Vec2;

    fn set_movement(&mut self, v: Vec2);

    /// Heading in degrees.
    fn heading(&self) -> f32;

    fn set_heading(&mut self, degrees: f32);

    /// Current locomotion capability: airborne or ground-bound.
    fn is_flying(&self) -> bool;

    /// Movement speed while ground-boosting.
    fn boost_speed(&self) -> f32;

    /// Movement speed while flying.
    fn flight_speed(&self) -> f32;

    fn set_boosting(&mut self, boosting: bool);

    /// Whether something external set an aim target this tick.  When set,
    /// the autopilot leaves the heading alone.
    fn has_aim_target(&self) -> bool;

    /// The stack the agent carries (possibly empty).
    fn carried_stack(&self) -> ItemStack;

    /// True while a previously issued inventory transfer is still in flight.
    fn is_transferring(&self) -> bool;

    /// The closest friendly home base, or `None` if the team has none left.
    fn closest_base(&self) -> Option<CellId>;

    fn set_building(&mut self, building: bool);

    // ── Build queue ───────────────────────────────────────────────────────

    fn clear_build_queue(&mut self);

    fn push_plan_front(&mut self, plan: BuildPlan);

    fn push_plan_back(&mut self, plan: BuildPlan);
}
