use crate::commands::Command;
use crate::tracing::{LogLevel, TracingFormat};
use clap::Parser;
use clap::builder::FalseyValueParser;
use miette::{Diagnostic, Report};
use naval_core::{RenderOptions, Selection};
use serde::Serialize;
use std::ffi::OsStr;
use std::io::{self, IsTerminal, Write};
use thiserror::Error;

/// Exit codes for the CLI application
pub const EXIT_OK: i32 = 0;
/// Usage or configuration error exit code
pub const EXIT_CLI: i32 = 2;
/// Output or unexpected runtime error exit code
pub const EXIT_OUTPUT: i32 = 3;

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum CliError {
    /// Usage or configuration error (exit code 2)
    #[error("CLI/configuration error: {message}")]
    #[diagnostic(code(naval::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Writing the result failed (exit code 3)
    #[error("Output error: {message}")]
    #[diagnostic(code(naval::cli::output))]
    Output {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Other unexpected error (exit code 3)
    #[error("Unexpected error: {message}")]
    #[diagnostic(code(naval::cli::other))]
    Other {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create a new configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a new output error
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new other error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            help: None,
        }
    }
}

impl From<naval_core::Error> for CliError {
    fn from(err: naval_core::Error) -> Self {
        match err {
            naval_core::Error::InvalidWidth { width, min } => Self::config_with_help(
                format!("--width {width} is below the minimum of {min}"),
                "Pass a larger value to --width, or omit it to use the default",
            ),
            naval_core::Error::Serialization(_) => Self::other(err.to_string()),
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config { .. } => EXIT_CLI,
        CliError::Output { .. } | CliError::Other { .. } => EXIT_OUTPUT,
    }
}

/// Render error appropriately based on JSON flag
pub fn render_error(err: &CliError, json_mode: bool) {
    if json_mode {
        let error_envelope = ErrorEnvelope::new(serde_json::json!({
            "code": match err {
                CliError::Config { .. } => "config",
                CliError::Output { .. } => "output",
                CliError::Other { .. } => "other",
            },
            "message": err.to_string()
        }));

        match serde_json::to_string(&error_envelope) {
            Ok(json) => {
                let _ = write_stdout(&format!("{json}\n"));
            }
            Err(_) => {
                let _ = writeln!(io::stderr(), "Error serializing error response");
            }
        }
    } else {
        let report = Report::new(err.clone());
        let _ = writeln!(io::stderr(), "{report:?}");
        let _ = io::stderr().flush();
    }
}

/// Write the whole output to stdout in one call.
///
/// A closed pipe on the reading side is not treated as a failure.
pub fn write_stdout(output: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before output was written");
            Ok(())
        }
        Err(e) => Err(CliError::output(format!("Failed to write to stdout: {e}"))),
    }
}

/// Success response envelope for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct OkEnvelope<T> {
    /// Status indicator - always "ok" for success
    pub status: &'static str,
    /// The actual data payload
    pub data: T,
}

impl<T> OkEnvelope<T> {
    /// Create a new success envelope
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self { status: "ok", data }
    }
}

/// Error response envelope for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope<E> {
    /// Status indicator - always "error" for failures
    pub status: &'static str,
    /// The error details
    pub error: E,
}

impl<E> ErrorEnvelope<E> {
    /// Create a new error envelope
    #[must_use]
    pub const fn new(error: E) -> Self {
        Self {
            status: "error",
            error,
        }
    }
}

const EXAMPLES: &str = "\
EXAMPLES:
    naval-cli                    # Display a quote with ASCII art
    naval-cli --no-ascii         # Display quote without ASCII art
    naval-cli --count 5          # Display 5 quotes
    naval-cli --random           # Pick a different quote every run
    naval-cli --no-color         # Display without colors

For more information, visit: https://github.com/wimpywarlord/naval-cli";

/// Main CLI entry point for naval-cli.
///
/// Display Naval Ravikant's wisdom with ASCII art in your terminal.
#[derive(Parser, Debug)]
#[command(name = "naval-cli")]
#[command(about = "Display Naval Ravikant's wisdom with ASCII art in your terminal")]
#[command(long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Print `naval-cli v<version>` and exit.
    #[arg(short = 'V', long, help = "Show version information")]
    pub version: bool,

    /// Use the plain layout.
    #[arg(
        long,
        env = "NAVAL_CLI_NO_ASCII",
        value_parser = FalseyValueParser::new(),
        help = "Display quote without ASCII art"
    )]
    pub no_ascii: bool,

    /// Disable ANSI colors.
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    /// Number of quotes to display.
    #[arg(
        short = 'n',
        long,
        env = "NAVAL_CLI_COUNT",
        default_value_t = 1,
        allow_negative_numbers = true,
        help = "Number of quotes to display (values below 1 show one)"
    )]
    pub count: i64,

    /// Seed for a reproducible pick.
    #[arg(
        long,
        env = "NAVAL_CLI_SEED",
        conflicts_with = "random",
        help = "Pick quotes reproducibly from this seed"
    )]
    pub seed: Option<u64>,

    /// Pick from OS entropy.
    #[arg(short = 'r', long, help = "Pick quotes at random on every run")]
    pub random: bool,

    /// Wrap width override.
    #[arg(
        short = 'w',
        long,
        env = "NAVAL_CLI_WIDTH",
        help = "Wrap quotes at this many columns (minimum 20)"
    )]
    pub width: Option<usize>,

    /// Emit JSON envelope instead of rendered text.
    #[arg(long, help = "Emit JSON envelope instead of rendered text")]
    pub json: bool,

    /// Logging verbosity level.
    #[arg(
        short = 'L',
        long,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    /// Log output format.
    #[arg(
        long,
        help = "Log output format (ignored with --json, which logs JSON)",
        default_value = "dev",
        value_enum
    )]
    pub log_format: TracingFormat,
}

impl Cli {
    /// Selection strategy requested by the flags
    #[must_use]
    pub const fn selection(&self) -> Selection {
        match (self.seed, self.random) {
            (Some(seed), _) => Selection::Seeded(seed),
            (None, true) => Selection::Random,
            (None, false) => Selection::Featured,
        }
    }

    /// Tracing format, forced to JSON when `--json` is set
    #[must_use]
    pub const fn tracing_format(&self) -> TracingFormat {
        if self.json {
            TracingFormat::Json
        } else {
            self.log_format
        }
    }

    /// Render options for this invocation
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_ascii: !self.no_ascii,
            color: color_enabled(self.no_color),
            width: self.width,
        }
    }

    /// Convert parsed flags into the command to execute
    #[must_use]
    pub fn into_command(self) -> Command {
        if self.version {
            Command::Version { json: self.json }
        } else {
            Command::Render {
                selection: self.selection(),
                count: usize::try_from(self.count).unwrap_or(1),
                options: self.render_options(),
                json: self.json,
            }
        }
    }
}

/// Colors are used only on a terminal, without `--no-color`, and with `NO_COLOR` unset or empty
#[must_use]
pub fn color_enabled(no_color_flag: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR");
    color_allowed(no_color_flag, no_color_env.as_deref()) && io::stdout().is_terminal()
}

/// Whether the flag and the `NO_COLOR` value permit colors, ignoring the terminal check
#[must_use]
pub fn color_allowed(no_color_flag: bool, no_color_env: Option<&OsStr>) -> bool {
    !no_color_flag && no_color_env.is_none_or(OsStr::is_empty)
}

/// Parse command line arguments, returning clap's error for help, usage and unknown flags.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
