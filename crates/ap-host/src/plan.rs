//! Construction tasks.

use ap_core::BlockId;

/// A unit of construction work queued for an agent.
///
/// A tagged union: a placement carries the block and rotation, a removal
/// carries only the tile.  There is no way to build a "removal with a block"
/// or a "placement without one".
///
/// Coordinates are tile coordinates, not world positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildPlan {
    /// Place `block` at `(x, y)` with the given rotation.
    Place {
        x: i32,
        y: i32,
        rotation: u8,
        block: BlockId,
    },
    /// Remove whatever occupies `(x, y)`.
    Remove { x: i32, y: i32 },
}

impl BuildPlan {
    /// The tile this plan targets, regardless of variant.
    #[inline]
    pub fn tile(self) -> (i32, i32) {
        match self {
            BuildPlan::Place { x, y, .. } | BuildPlan::Remove { x, y } => (x, y),
        }
    }

    /// True for `Remove` plans.
    #[inline]
    pub fn is_removal(self) -> bool {
        matches!(self, BuildPlan::Remove { .. })
    }
}
