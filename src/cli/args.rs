//! Command-line argument parsing.
//!
//! Flags either pick a mode (`--version`, `--help`, `--events`, `--headless`)
//! or override a configuration value. Anything unrecognized is an error so a
//! mistyped flag never silently falls through to the TUI.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::{parse_cadence, parse_dataset, parse_target, VizConfig};
use crate::error::ConfigError;
use crate::producers::Algorithm;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the selected algorithm's events as JSON lines
    Events(CliOverrides),
    /// Play the session on stdout without taking over the terminal
    Headless(CliOverrides),
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Configuration values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub algorithm: Option<Algorithm>,
    pub dataset: Option<Vec<i64>>,
    pub cadence: Option<Duration>,
    pub target: Option<i64>,
    pub log_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl CliOverrides {
    /// Layer these values over `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Defaults already merged with the environment
    pub fn apply(self, mut config: VizConfig) -> VizConfig {
        if let Some(algorithm) = self.algorithm {
            config.algorithm = Some(algorithm);
        }
        if let Some(dataset) = self.dataset {
            config.dataset = dataset;
        }
        if let Some(cadence) = self.cadence {
            config.cadence = cadence;
        }
        if let Some(target) = self.target {
            config.search_target = Some(target);
        }
        if let Some(filter) = self.log_filter {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = self.log_file {
            config = config.with_log_file(path);
        }
        config
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Tui,
    Events,
    Headless,
}

/// Parse command-line arguments and return the command to run.
///
/// Mode flags may appear anywhere; the last one wins. `--version` and
/// `--help` return as soon as they are seen, ignoring the rest.
///
/// # Arguments
///
/// * `args` - Iterator over arguments, program name first (as from `std::env::args()`)
///
/// # Errors
///
/// Returns a [`ConfigError`] for an unknown flag, a flag missing its value,
/// or a value that does not parse.
///
/// # Examples
///
/// ```
/// use algoviz::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["algoviz".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut mode = Mode::Tui;
    let mut overrides = CliOverrides::default();

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        // Accept both `--flag value` and `--flag=value`
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |flag: &str| {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| ConfigError::MissingValue {
                    flag: flag.to_string(),
                })
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--events" => mode = Mode::Events,
            "--headless" => mode = Mode::Headless,
            "--algorithm" | "-a" => overrides.algorithm = Some(value(&flag)?.parse()?),
            "--array" => overrides.dataset = Some(parse_dataset(&value(&flag)?)?),
            "--cadence" => overrides.cadence = Some(parse_cadence(&value(&flag)?)?),
            "--target" => overrides.target = Some(parse_target(&value(&flag)?)?),
            "--log" => overrides.log_filter = Some(value(&flag)?),
            "--log-file" => overrides.log_file = Some(PathBuf::from(value(&flag)?)),
            _ => return Err(ConfigError::UnknownArgument { arg }),
        }
    }

    Ok(match mode {
        Mode::Tui => CliCommand::RunTui(overrides),
        Mode::Events => CliCommand::Events(overrides),
        Mode::Headless => CliCommand::Headless(overrides),
    })
}

/// Usage text for `--help`.
pub fn usage() -> String {
    let algorithms = Algorithm::ALL
        .iter()
        .map(|algorithm| algorithm.slug())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "\
Usage: algoviz [OPTIONS]

Animate sorting and searching algorithms in the terminal.

Options:
  -a, --algorithm <NAME>  Start with this algorithm ({algorithms})
      --array <LIST>      Comma-separated integers to visualize
      --cadence <MS>      Milliseconds between steps
      --target <N>        Value for binary search to find
      --log <FILTER>      Log filter directive, e.g. algoviz=debug
      --log-file <PATH>   Write logs here while the TUI is open
      --events            Print the algorithm's events as JSON lines and exit
      --headless          Play the animation as plain log lines on stdout
  -h, --help              Print this help
  -V, --version           Print version
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let args = std::iter::once("algoviz")
            .chain(args.iter().copied())
            .map(String::from);
        parse_args(args)
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--cadence", "10", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(CliOverrides::default())));
    }

    #[test]
    fn test_parse_overrides() {
        let command = parse(&["-a", "quick", "--array", "3,1,2", "--cadence=50", "--target", "2"]).unwrap();
        assert_eq!(
            command,
            CliCommand::RunTui(CliOverrides {
                algorithm: Some(Algorithm::QuickSort),
                dataset: Some(vec![3, 1, 2]),
                cadence: Some(Duration::from_millis(50)),
                target: Some(2),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_parse_log_flags() {
        let command = parse(&["--headless", "--log=algoviz=trace", "--log-file", "/tmp/viz.log"]).unwrap();
        let CliCommand::Headless(overrides) = command else {
            panic!("expected headless, got {command:?}");
        };
        assert_eq!(overrides.log_filter.as_deref(), Some("algoviz=trace"));

        let config = overrides.apply(VizConfig::default());
        assert_eq!(config.log_filter, "algoviz=trace");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/viz.log")));
    }

    #[test]
    fn test_parse_modes() {
        assert!(matches!(parse(&["--events"]), Ok(CliCommand::Events(_))));
        assert!(matches!(
            parse(&["--headless", "-a", "bubble"]),
            Ok(CliCommand::Headless(CliOverrides {
                algorithm: Some(Algorithm::BubbleSort),
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["--cadence"]),
            Err(ConfigError::MissingValue {
                flag: "--cadence".to_string()
            })
        );
        assert_eq!(
            parse(&["--unknown"]),
            Err(ConfigError::UnknownArgument {
                arg: "--unknown".to_string()
            })
        );
        assert!(matches!(
            parse(&["--array", "1,two"]),
            Err(ConfigError::InvalidArrayElement { .. })
        ));
    }

    #[test]
    fn test_apply_overrides_config() {
        let config = CliOverrides {
            cadence: Some(Duration::from_millis(5)),
            ..Default::default()
        }
        .apply(VizConfig::default().with_search_target(7));
        assert_eq!(config.cadence, Duration::from_millis(5));
        assert_eq!(config.search_target, Some(7));
    }

    #[test]
    fn test_usage_lists_algorithms() {
        let text = usage();
        assert!(text.contains("insertion-sort"));
        assert!(text.contains("--headless"));
    }
}
