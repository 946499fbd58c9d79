//! Configuration and command-line errors.

use thiserror::Error;

/// A setting from the environment or the command line could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown algorithm '{name}' (expected one of: {expected})")]
    UnknownAlgorithm { name: String, expected: String },

    #[error("invalid array element '{value}': expected an integer")]
    InvalidArrayElement { value: String },

    #[error("the array to visualize must not be empty")]
    EmptyArray,

    #[error("invalid cadence '{value}': expected a positive number of milliseconds")]
    InvalidCadence { value: String },

    #[error("invalid search target '{value}': expected an integer")]
    InvalidTarget { value: String },

    #[error("flag {flag} needs a value")]
    MissingValue { flag: String },

    #[error("unrecognized argument '{arg}'")]
    UnknownArgument { arg: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownAlgorithm { .. } => "CONFIG_ALGORITHM",
            ConfigError::InvalidArrayElement { .. } | ConfigError::EmptyArray => "CONFIG_ARRAY",
            ConfigError::InvalidCadence { .. } => "CONFIG_CADENCE",
            ConfigError::InvalidTarget { .. } => "CONFIG_TARGET",
            ConfigError::MissingValue { .. } | ConfigError::UnknownArgument { .. } => "CONFIG_ARGS",
        }
    }
}
