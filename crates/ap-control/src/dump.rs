//! Debounced auto-deposit of the agent's carried stack.

use ap_core::SimTime;
use ap_host::Host;
use tracing::debug;

use crate::Autopilot;

impl Autopilot {
    pub(crate) fn update_auto_dump<H: Host>(&mut self, host: &mut H, time: SimTime) {
        let Some(cell) = self.dump_target() else {
            return;
        };
        if !host.accepts_items(cell) || !host.is_interactable(cell, host.team()) {
            debug!(%cell, "deposit target stopped accepting, dropping");
            self.drop_dump_target();
            return;
        }
        // The window resets whether or not a transfer goes out below.
        if !self.transfer_ready(time.time) {
            return;
        }
        let stack = host.carried_stack();
        if !stack.is_empty() && host.accept_stack(cell, stack) > 0 && !host.is_transferring() {
            debug!(%cell, item = %stack.item, amount = stack.amount, "depositing carried stack");
            host.transfer_inventory(cell);
        }
    }
}
