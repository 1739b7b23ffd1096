use thiserror::Error;

use crate::{Approach, Zone};

/// Apart from `InvalidParameter`, every variant is an internal-consistency
/// violation and stops the run.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid intersection parameter: {what} must be positive and finite (got {value})")]
    InvalidParameter {
        what:  &'static str,
        value: f64,
    },

    #[error("inconsistent {kind} event: {reason}")]
    InconsistentEvent {
        kind:   String,
        reason: String,
    },

    #[error("zone {zone} is held by {holder}, {claimant} cannot claim it")]
    ZoneConflict {
        zone:     Zone,
        holder:   Approach,
        claimant: Approach,
    },

    #[error("{approach} released zone {zone} without holding it")]
    ZoneNotHeld {
        zone:     Zone,
        approach: Approach,
    },
}

impl ModelError {
    pub(crate) fn inconsistent(kind: impl ToString, reason: impl Into<String>) -> Self {
        ModelError::InconsistentEvent {
            kind:   kind.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
