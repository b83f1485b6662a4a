//! Commands the autopilot issues into the host.

use ap_core::{CellId, ItemId};

/// Fire-and-forget command issuance.
///
/// Commands take effect on the host's schedule (possibly replicated over the
/// network first); the autopilot never waits for or observes their outcome
/// within the issuing tick.
pub trait CommandSink {
    /// Reconfigure an output facility to produce `item`.
    fn configure_output(&mut self, cell: CellId, item: ItemId);

    /// Transfer the agent's full carried stack into `cell`.
    fn transfer_inventory(&mut self, cell: CellId);
}
