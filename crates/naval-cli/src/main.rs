//! naval-cli binary
//!
//! Single-shot and synchronous: parse flags, run one command, write its
//! output once, exit.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use naval_cli::cli::{self, EXIT_CLI, EXIT_OK, exit_code_for, render_error};
use naval_cli::commands;
use naval_cli::tracing::{TracingConfig, init_tracing};

fn main() {
    // NOTE: Using eprintln! in panic hook is intentional - tracing infrastructure
    // may be corrupted during a panic, so we use the most reliable output method.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with --level debug for more information.");
    }));

    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help goes to stdout with success; usage errors and unknown flags to stderr
            let _ = err.print();
            return if err.use_stderr() { EXIT_CLI } else { EXIT_OK };
        }
    };

    let tracing_config = TracingConfig {
        format: cli.tracing_format(),
        level: cli.level.into(),
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("Warning: {e}");
    }

    let json_mode = cli.json;
    let command = cli.into_command();
    let span = naval_cli::command_span!(command.name());
    let _entered = span.enter();

    match commands::execute(command).and_then(|output| cli::write_stdout(&output)) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            render_error(&err, json_mode);
            exit_code_for(&err)
        }
    }
}
