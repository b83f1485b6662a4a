//! The host's item registry.

use ap_core::ItemId;

/// Enumerable registry of all item types, in definition order.
///
/// Definition order matters: the resource balancer breaks ties by picking the
/// first minimum it encounters, so the order must be stable across ticks.
pub trait ItemCatalog {
    /// Total number of registered item types.
    fn item_count(&self) -> usize;

    /// The item at `index` (`0..item_count()`).
    fn item(&self, index: usize) -> ItemId;

    /// Is this item a raw material (as opposed to a crafted or special
    /// resource)?  Only materials participate in balancing.
    fn is_material(&self, item: ItemId) -> bool;
}
