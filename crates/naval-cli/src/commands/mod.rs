//! Command dispatch
//!
//! Every command produces the complete stdout text as a `String`; the
//! binary writes it out in a single call.

/// Quote rendering command
pub mod quote;
/// Version command
pub mod version;

use crate::cli::CliError;
use naval_core::{RenderOptions, Selection};
use tracing::instrument;

/// A fully resolved invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print version information
    Version {
        /// Emit a JSON envelope with build metadata
        json: bool,
    },
    /// Select and render quotes
    Render {
        /// How quotes are picked
        selection: Selection,
        /// Requested number of quotes, clamped by the quote book
        count: usize,
        /// Layout and color options
        options: RenderOptions,
        /// Emit a JSON envelope instead of rendered text
        json: bool,
    },
}

impl Command {
    /// Short name used in tracing spans
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Version { .. } => "version",
            Self::Render { .. } => "render",
        }
    }
}

/// Execute a command and return its output
#[instrument(skip_all, fields(command = command.name()))]
pub fn execute(command: Command) -> Result<String, CliError> {
    match command {
        Command::Version { json } => version::execute_version(json),
        Command::Render {
            selection,
            count,
            options,
            json,
        } => quote::execute_render(selection, count, options, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Version { json: false }.name(), "version");
        let render = Command::Render {
            selection: Selection::Featured,
            count: 1,
            options: RenderOptions::default(),
            json: false,
        };
        assert_eq!(render.name(), "render");
    }

    #[test]
    fn test_execute_dispatches_version() {
        let output = execute(Command::Version { json: false }).unwrap();
        assert_eq!(output, "naval-cli v1.0.0\n");
    }
}
