//! Error types for wall-function evaluation.
//!
//! The closures themselves never fail on valid input; these errors cover
//! configuration and caller precondition checks.

use thiserror::Error;
use wf_core::{FaceId, WfError};

/// Errors raised while validating wall-function configuration or face data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallError {
    #[error("Invalid input: {0}")]
    Input(#[from] WfError),

    #[error("Invalid input on face {face}: {source}")]
    Face { face: FaceId, source: WfError },

    #[error("Unknown wall function code: {code}")]
    UnknownModel { code: i32 },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },
}

pub type WallResult<T> = Result<T, WallError>;

impl From<WallError> for WfError {
    fn from(e: WallError) -> Self {
        match e {
            WallError::Input(inner) => inner,
            WallError::Face { source, .. } => source,
            WallError::UnknownModel { code: _ } => WfError::InvalidArg {
                what: "unknown wall function code",
            },
            WallError::InvalidConfig { what } => WfError::InvalidArg { what },
        }
    }
}
