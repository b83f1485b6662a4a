//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are weak handles into host-owned objects: they carry identity only,
//! never ownership, and the host may destroy or repurpose the referent between
//! ticks.  Every dereference goes through a host lookup that returns `Option`,
//! so staleness degrades to `None` instead of dangling.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Handle to a world cell (a tile and whatever building occupies it).
    pub struct CellId(u32);
}

typed_id! {
    /// Handle to a mobile unit (the controlled agent, a leader, any entity).
    pub struct UnitId(u32);
}

typed_id! {
    /// Index of an item type in the host's content registry, in definition
    /// order.  `u16` keeps stacks and configure commands compact.
    pub struct ItemId(u16);
}

typed_id! {
    /// Index of a block type in the host's content registry.
    pub struct BlockId(u16);
}

typed_id! {
    /// Faction identifier.  Interactability checks are per-team.
    pub struct Team(u8);
}
