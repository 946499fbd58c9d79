//! Runtime configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! `ALGOVIZ_*` environment variables, then command-line flags
//! (see [`crate::cli::CliOverrides`]).
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ALGOVIZ_CADENCE_MS` | Milliseconds between dispatched events | `1000` |
//! | `ALGOVIZ_ARRAY` | Comma-separated integers to visualize | `23,7,15,92,4,68,31,55,12,89` |
//! | `ALGOVIZ_ALGORITHM` | Algorithm to start with | none (menu) |
//! | `ALGOVIZ_TARGET` | Value binary search looks for | two thirds into the input |
//! | `ALGOVIZ_LOG` | `tracing` filter directive | `info` |
//! | `ALGOVIZ_LOG_FILE` | Log file used while the TUI owns the screen | `<cache>/algoviz/algoviz.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::producers::Algorithm;
use crate::scheduler::DEFAULT_CADENCE;

/// Array shown when nothing else is configured.
pub const DEFAULT_DATASET: [i64; 10] = [23, 7, 15, 92, 4, 68, 31, 55, 12, 89];

/// Filter used when `ALGOVIZ_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_CADENCE: &str = "ALGOVIZ_CADENCE_MS";
pub const ENV_ARRAY: &str = "ALGOVIZ_ARRAY";
pub const ENV_ALGORITHM: &str = "ALGOVIZ_ALGORITHM";
pub const ENV_TARGET: &str = "ALGOVIZ_TARGET";
pub const ENV_LOG: &str = "ALGOVIZ_LOG";
pub const ENV_LOG_FILE: &str = "ALGOVIZ_LOG_FILE";

/// Everything the visualizer needs to know before it starts.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use algoviz::config::VizConfig;
/// use algoviz::producers::Algorithm;
///
/// let config = VizConfig::default()
///     .with_dataset(vec![3, 1, 2])
///     .with_cadence(Duration::from_millis(250))
///     .with_algorithm(Algorithm::QuickSort);
/// assert_eq!(config.dataset, vec![3, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig {
    /// Values every algorithm starts from
    pub dataset: Vec<i64>,
    /// Interval between dispatched events
    pub cadence: Duration,
    /// Algorithm selected on launch, if any
    pub algorithm: Option<Algorithm>,
    /// Binary search target
    pub search_target: Option<i64>,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Explicit log file; `None` means the default under the cache dir
    pub log_file: Option<PathBuf>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_vec(),
            cadence: DEFAULT_CADENCE,
            algorithm: None,
            search_target: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl VizConfig {
    pub fn with_dataset(mut self, dataset: Vec<i64>) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_search_target(mut self, target: i64) -> Self {
        self.search_target = Some(target);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overlaid with the `ALGOVIZ_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `var`.
    ///
    /// Blank values count as unset.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = var(ENV_CADENCE) {
            config.cadence = parse_cadence(&value)?;
        }
        if let Some(value) = var(ENV_ARRAY) {
            config.dataset = parse_dataset(&value)?;
        }
        if let Some(value) = var(ENV_ALGORITHM) {
            config.algorithm = Some(value.parse()?);
        }
        if let Some(value) = var(ENV_TARGET) {
            config.search_target = Some(parse_target(&value)?);
        }
        if let Some(value) = var(ENV_LOG) {
            config.log_filter = value;
        }
        if let Some(value) = var(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

/// Parse a comma- or whitespace-separated list of integers.
pub fn parse_dataset(raw: &str) -> Result<Vec<i64>, ConfigError> {
    let values = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ConfigError::InvalidArrayElement {
                    value: part.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ConfigError::EmptyArray);
    }
    Ok(values)
}

/// Parse a cadence in whole milliseconds; zero is rejected.
pub fn parse_cadence(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidCadence {
            value: raw.to_string(),
        }),
    }
}

pub fn parse_target(raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidTarget {
            value: raw.to_string(),
        })
}
