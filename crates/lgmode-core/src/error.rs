//! Error taxonomy for mode computations.

use thiserror::Error;

/// Errors that can occur while building or evaluating a mode profile.
#[derive(Debug, Error)]
pub enum ModeError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Degenerate intensity profile: {0}")]
    DegenerateProfile(String),

    #[error("Eigenvalue computation failed: {0}")]
    EigenFailure(String),
}

impl ModeError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }
}
