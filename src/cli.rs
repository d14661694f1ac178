//! CLI - Command Line Interface for the Carflix client
//!
//! Every TUI data operation is scriptable. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # List the catalog
//! carflix shows --json
//!
//! # Inspect one show
//! carflix show m1
//!
//! # Ask the server to rescan its library
//! carflix reload
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Show or episode not found
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Carflix - terminal client for a personal media server
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "carflix",
    version,
    author = "Gorka & Hermes",
    about = "Terminal client for the Carflix personal media server",
    after_help = "EXAMPLES:\n\
                  carflix                         Launch interactive TUI\n\
                  carflix shows                   List the catalog\n\
                  carflix show m1 --json          Show detail as JSON\n\
                  carflix reload                  Trigger a library rescan"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Carflix server base URL (overrides env and config file)
    #[arg(long, short = 's', global = true)]
    pub server: Option<String>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all shows in the catalog
    #[command(visible_alias = "ls")]
    Shows(ShowsCmd),

    /// Get one show's detail, including its episodes
    Show(ShowCmd),

    /// Ask the server to rescan its library
    Reload(ReloadCmd),
}

/// List the catalog
#[derive(Args, Debug)]
pub struct ShowsCmd {}

/// Get detail for one show
#[derive(Args, Debug)]
pub struct ShowCmd {
    /// Show id as listed by `carflix shows`
    #[arg(required = true)]
    pub id: String,
}

/// Trigger a library rescan
#[derive(Args, Debug)]
pub struct ReloadCmd {}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Handling
// =============================================================================

/// Output formatter respecting --json and --quiet
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_tui_mode() {
        let cli = Cli::parse_from(["carflix"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_show_subcommand_parses_id() {
        let cli = Cli::parse_from(["carflix", "show", "m1"]);
        match cli.command {
            Some(Command::Show(cmd)) => assert_eq!(cmd.id, "m1"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_server_flag() {
        let cli = Cli::parse_from(["carflix", "shows", "--server", "http://box:8080"]);
        assert_eq!(cli.server.as_deref(), Some("http://box:8080"));
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
    }

    #[test]
    fn test_exit_code_process_conversion() {
        // std::process::ExitCode has no PartialEq; compare Debug forms
        assert_eq!(
            format!("{:?}", std::process::ExitCode::from(ExitCode::NotFound)),
            format!("{:?}", std::process::ExitCode::from(4u8))
        );
    }
}
