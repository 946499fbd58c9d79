//! Logging setup.
//!
//! While the TUI owns the screen, log output goes to a file so it cannot tear
//! the frame; the non-interactive modes log to stderr and keep stdout for
//! their own output.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{VizConfig, DEFAULT_LOG_FILTER};
use crate::error::{VizError, VizResult};

const LOG_DIR_NAME: &str = "algoviz";
const LOG_FILE_NAME: &str = "algoviz.log";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `<cache dir>/algoviz/algoviz.log`, if the platform has a cache dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Pick the log target for a run. `interactive` is true when the TUI will
/// draw on the terminal.
pub fn log_target_for(config: &VizConfig, interactive: bool) -> LogTarget {
    if !interactive {
        return LogTarget::Stderr;
    }
    config
        .log_file
        .clone()
        .or_else(default_log_path)
        .map_or(LogTarget::Stderr, LogTarget::File)
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Parse a filter directive, falling back to the default on bad input.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("algoviz: ignoring invalid log filter '{directive}': {err}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Install the global subscriber.
///
/// File output has ANSI colors turned off; stderr keeps them.
///
/// # Arguments
///
/// * `filter` - `EnvFilter` directive; an invalid one falls back to `info`
/// * `target` - Where formatted events go
///
/// # Errors
///
/// Returns [`VizError::Io`](crate::error::VizError::Io) if the log file cannot
/// be opened, or `VizError::Telemetry` if a global subscriber is already set.
pub fn init(filter: &str, target: &LogTarget) -> VizResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter))
        .with_target(true);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|err| VizError::Telemetry(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_logs_to_stderr() {
        let config = VizConfig::default().with_log_file("/tmp/ignored.log");
        assert_eq!(log_target_for(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = VizConfig::default().with_log_file("/tmp/viz.log");
        assert_eq!(
            log_target_for(&config, true),
            LogTarget::File(PathBuf::from("/tmp/viz.log"))
        );
    }

    #[test]
    fn test_default_path_lives_under_app_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("algoviz/algoviz.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("viz.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_bad_filter_falls_back() {
        let filter = build_filter("algoviz=notalevel[");
        assert!(filter.to_string().contains(DEFAULT_LOG_FILTER));
    }
}
