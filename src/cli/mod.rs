//! CLI module.
//!
//! Handles command-line flags before the TUI starts:
//! - Argument parsing
//! - Version and usage display
//! - The `--health` probe
//!
//! # Usage
//!
//! ```ignore
//! use stroke_risk::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     // --help or a parse error; nothing else to do
//! }
//! ```

pub mod args;
pub mod health;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use health::handle_health_command;
pub use version::{handle_version_command, VERSION};

use color_eyre::{eyre::eyre, Result};

/// Run a command that needs neither the network nor the terminal.
///
/// # Returns
///
/// * `None` - The command is `Run` or `Health`; the caller handles it
/// * `Some(Ok(()))` - Usage was printed
/// * `Some(Err(e))` - The arguments were invalid
///
/// `Version` never returns; it exits the process.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::Health { .. } | CliCommand::Run { .. } => None,
    }
}
