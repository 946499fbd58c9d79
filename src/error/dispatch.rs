//! Errors raised while applying a single event to the presentation surface.
//!
//! None of these are fatal. The scheduler turns them into a diagnostic line in
//! the operation log and keeps playing.

use thiserror::Error;

use crate::events::EventKind;

/// An event broke the producer contract (bad indices for the array it targets).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// An index does not address an element of the array.
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// A swap names the same position twice.
    #[error("swap needs two distinct indices, got {index} twice")]
    SwapSameIndex { index: usize },

    /// A compare or highlight that names no element at all.
    #[error("{kind} event carries no indices")]
    EmptyIndices { kind: EventKind },
}

impl ContractViolation {
    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContractViolation::IndexOutOfRange { .. } => "CONTRACT_INDEX_RANGE",
            ContractViolation::SwapSameIndex { .. } => "CONTRACT_SWAP_SAME",
            ContractViolation::EmptyIndices { .. } => "CONTRACT_EMPTY",
        }
    }
}

/// The presentation surface refused an access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface index {index} is out of range for {len} elements")]
    OutOfRange { index: usize, len: usize },
}

/// Why one dispatch had its visual effect dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl DispatchError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Contract(violation) => violation.error_code(),
            DispatchError::Surface(_) => "SURFACE_RANGE",
        }
    }
}
