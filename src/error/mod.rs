//! Error types for algoviz.
//!
//! The animation core never fails outward under normal use: a bad event costs
//! one dispatch its visual effect and nothing more. The types here split along
//! that line:
//!
//! | Type | Raised by | Fatal |
//! |------|-----------|-------|
//! | [`ContractViolation`] | event validation at dispatch time | No |
//! | [`SurfaceError`] | presentation surface accessors | No |
//! | [`DispatchError`] | either of the above, per dispatch | No |
//! | [`ConfigError`] | environment and command-line parsing | Yes, at startup |
//! | [`VizError`] | everything the binary can bail out on | Yes |

mod config;
mod dispatch;

pub use config::ConfigError;
pub use dispatch::{ContractViolation, DispatchError, SurfaceError};

use thiserror::Error;

/// Top-level error for the binary's setup and I/O paths.
#[derive(Debug, Error)]
pub enum VizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Telemetry(String),
}

impl VizError {
    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            VizError::Config(err) => err.error_code(),
            VizError::Io(_) => "IO",
            VizError::Encode(_) => "ENCODE",
            VizError::Telemetry(_) => "TELEMETRY",
        }
    }
}

/// Result alias used across the binary-facing modules.
pub type VizResult<T> = Result<T, VizError>;
