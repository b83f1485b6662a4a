//! Unit tests for ap-host.

use ap_core::{BlockId, ItemId};

use crate::{BuildPlan, ItemStack};

// ── ItemStack ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stack_tests {
    use super::*;

    #[test]
    fn empty_stack() {
        assert!(ItemStack::EMPTY.is_empty());
        assert!(ItemStack::default().is_empty());
        assert_eq!(ItemStack::EMPTY.item, ItemId::INVALID);
    }

    #[test]
    fn non_empty_stack() {
        let s = ItemStack::new(ItemId(2), 30);
        assert!(!s.is_empty());
        assert_eq!(s.amount, 30);
    }
}

// ── BuildPlan ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn tile_agrees_across_variants() {
        let place = BuildPlan::Place {
            x: 3,
            y: 4,
            rotation: 1,
            block: BlockId(9),
        };
        let remove = BuildPlan::Remove { x: 3, y: 4 };
        assert_eq!(place.tile(), (3, 4));
        assert_eq!(remove.tile(), (3, 4));
    }

    #[test]
    fn is_removal() {
        assert!(BuildPlan::Remove { x: 0, y: 0 }.is_removal());
        assert!(
            !BuildPlan::Place {
                x: 0,
                y: 0,
                rotation: 0,
                block: BlockId(1)
            }
            .is_removal()
        );
    }
}
