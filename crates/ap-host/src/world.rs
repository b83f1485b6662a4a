//! Read-only world lookups.

use ap_core::{BlockId, CellId, ItemId, Team, UnitId, Vec2};

use crate::{BuildPlan, ItemStack};

/// Read-only view of host-owned world state: cells, units, and aggregated
/// base inventories.
///
/// Every method that follows a weak handle returns `Option` (or a
/// conservative `false`/`0`) when the referent no longer exists or no longer
/// matches the queried kind.  Callers must treat `None` as "the reference
/// went stale" and degrade, never as an error.
pub trait WorldView {
    /// World position of the cell's center, or `None` if the cell is gone.
    fn cell_position(&self, cell: CellId) -> Option<Vec2>;

    /// Is this cell currently occupied by an output facility (a block that
    /// produces a configurable item)?
    fn is_output_facility(&self, cell: CellId) -> bool;

    /// Does the block on this cell store items (and can thus receive
    /// deposits)?
    fn accepts_items(&self, cell: CellId) -> bool;

    /// May `team` interact with this cell right now?
    fn is_interactable(&self, cell: CellId, team: Team) -> bool;

    /// The item an output facility is currently configured to produce.
    /// `None` when unconfigured, not a facility, or gone.
    fn output_item(&self, cell: CellId) -> Option<ItemId>;

    /// How many items of `stack` the cell would accept right now.  `0` for
    /// full, mismatched, or vanished cells.
    fn accept_stack(&self, cell: CellId, stack: ItemStack) -> u32;

    /// The block occupying tile `(x, y)` plus its rotation, or `None` for an
    /// empty or out-of-bounds tile.
    fn block_at(&self, x: i32, y: i32) -> Option<(BlockId, u8)>;

    /// World position of a unit, or `None` if it died or despawned.
    fn unit_position(&self, unit: UnitId) -> Option<Vec2>;

    /// The construction task `unit` is currently working, if it is a builder
    /// and currently building.  `None` when idle or gone.
    fn unit_build_plan(&self, unit: UnitId) -> Option<BuildPlan>;

    /// Count of `item` aggregated across a base's storage.
    fn base_item_count(&self, base: CellId, item: ItemId) -> u32;
}
