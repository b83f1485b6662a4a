//! The agent's carried inventory stack.

use ap_core::ItemId;

/// One item type plus an amount — what the agent holds in its hands.
///
/// Agents carry at most one stack at a time; an `amount` of zero means the
/// hands are empty (the `item` is then a meaningless leftover).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: ItemId,
    pub amount: u32,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        item: ItemId::INVALID,
        amount: 0,
    };

    #[inline]
    pub fn new(item: ItemId, amount: u32) -> Self {
        Self { item, amount }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.amount == 0
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}
