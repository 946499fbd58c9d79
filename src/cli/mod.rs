//! Command-line interface.
//!
//! `main` parses arguments before touching the terminal. Informational
//! commands are answered by [`run_cli_command`]; the two non-interactive
//! modes live in [`events`] and [`headless`]; everything else starts the TUI.
//!
//! ```ignore
//! use algoviz::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! ```

pub mod args;
pub mod events;
pub mod headless;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOverrides};
pub use events::write_events;
pub use headless::run_headless;
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::VizConfig;
use crate::producers::Algorithm;

/// Algorithm used by the non-interactive modes when none is configured.
pub const FALLBACK_ALGORITHM: Algorithm = Algorithm::BubbleSort;

/// Answer `--version` and `--help`.
///
/// Returns `None` for every command that needs a configuration.
/// `Version` never returns.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            print!("{}", usage());
            Some(Ok(()))
        }
        CliCommand::Events(_) | CliCommand::Headless(_) | CliCommand::RunTui(_) => None,
    }
}

/// The algorithm a non-interactive run plays.
pub fn chosen_algorithm(config: &VizConfig) -> Algorithm {
    config.algorithm.unwrap_or(FALLBACK_ALGORITHM)
}
