use ap_core::{CellId, Team};
use thiserror::Error;

/// Activation-time rejections.  Steady-state ticking never errors: stale
/// references degrade by deactivating the affected sub-behavior instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("cell {0} is not an output facility")]
    NotAnOutputFacility(CellId),

    #[error("cell {0} does not accept deposits from team {1}")]
    TargetRejectsItems(CellId, Team),
}

pub type ControlResult<T> = Result<T, ControlError>;
