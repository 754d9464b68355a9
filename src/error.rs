//! Error types for the DIRECT optimizer.
//!
//! `DirectReturnCode` gives every failure and termination reason a stable
//! integer code; `DirectError` is the Rust-idiomatic error carried by `Result`.

use thiserror::Error;

/// Boxed error returned by fallible objectives.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return codes for a DIRECT run.
///
/// Negative values indicate errors, positive values indicate normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectReturnCode {
    /// Invalid bounds (length mismatch, or lower >= upper for some dimension)
    InvalidBounds = -1,
    /// The objective raised an error or returned a non-finite value
    ObjectiveFailed = -5,
    /// Invalid arguments
    InvalidArgs = -101,

    /// The iteration budget was used up
    MaxIterReached = 2,
    /// Every rectangle on the hull fell below the minimum radius
    MinRadiusReached = 4,
}

impl DirectReturnCode {
    /// Returns true if this is a successful termination (positive code).
    pub fn is_success(&self) -> bool {
        (*self as i32) > 0
    }

    /// Returns true if this is an error (negative code).
    pub fn is_error(&self) -> bool {
        (*self as i32) < 0
    }

    /// Convert from an integer code.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::InvalidBounds),
            -5 => Some(Self::ObjectiveFailed),
            -101 => Some(Self::InvalidArgs),
            2 => Some(Self::MaxIterReached),
            4 => Some(Self::MinRadiusReached),
            _ => None,
        }
    }
}

/// Why a single objective evaluation was rejected.
#[derive(Error, Debug)]
pub enum EvaluationFailure {
    #[error("objective returned non-finite value {0}")]
    NonFinite(f64),

    #[error("objective raised an error: {0}")]
    Raised(#[source] BoxError),
}

/// Errors that can occur during DIRECT optimization.
#[derive(Error, Debug)]
pub enum DirectError {
    /// A bound is non-finite or `lower[dim] >= upper[dim]`.
    #[error("Invalid bounds in dimension {dim}: lower {lower} must be finite and < upper {upper}")]
    InvalidBounds { dim: usize, lower: f64, upper: f64 },

    /// `lower` and `upper` differ in length.
    ///
    /// Also an invalid-bounds failure: [`DirectError::code`] reports
    /// [`DirectReturnCode::InvalidBounds`] for it. Match on the code, not on
    /// the variant, to catch every bounds error.
    #[error("Invalid bounds: {lower} lower bounds but {upper} upper bounds")]
    BoundsLengthMismatch { lower: usize, upper: usize },

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Objective evaluation failed at {point:?}")]
    ObjectiveEvaluationFailure {
        point: Vec<f64>,
        #[source]
        cause: EvaluationFailure,
    },
}

impl DirectError {
    /// The return code classifying this error.
    pub fn code(&self) -> DirectReturnCode {
        match self {
            DirectError::InvalidBounds { .. } | DirectError::BoundsLengthMismatch { .. } => {
                DirectReturnCode::InvalidBounds
            }
            DirectError::InvalidArgs(_) => DirectReturnCode::InvalidArgs,
            DirectError::ObjectiveEvaluationFailure { .. } => DirectReturnCode::ObjectiveFailed,
        }
    }
}

/// Result type alias for DIRECT operations.
pub type Result<T> = std::result::Result<T, DirectError>;
