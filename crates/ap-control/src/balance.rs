//! Output-facility resource balancer.
//!
//! A greedy, stateless load-balancer: every tick it re-derives the scarcest
//! material in the home base from scratch and pins the tracked facility's
//! output to it.  The only state carried between ticks is the tracked cell
//! handle itself.

use ap_core::ItemId;
use ap_host::Host;
use tracing::debug;

use crate::Autopilot;

impl Autopilot {
    pub(crate) fn update_source_tracking<H: Host>(&mut self, host: &mut H) {
        let Some(cell) = self.tracked_source() else {
            return;
        };
        if !host.is_output_facility(cell) {
            debug!(%cell, "tracked cell is no longer an output facility, dropping");
            self.drop_tracked_source();
            return;
        }
        // No base, no inventory to balance against — try again next tick.
        let Some(base) = host.closest_base() else {
            return;
        };

        // First minimum in definition order wins ties.
        let mut least: Option<ItemId> = None;
        let mut least_count = u32::MAX;
        for i in 0..host.item_count() {
            let item = host.item(i);
            if !host.is_material(item) {
                continue;
            }
            let count = host.base_item_count(base, item);
            if count < least_count {
                least = Some(item);
                least_count = count;
            }
        }

        if let Some(least) = least {
            if host.output_item(cell) != Some(least) {
                debug!(%cell, item = %least, count = least_count, "rebalancing output");
                host.configure_output(cell, least);
            }
        }
    }
}
