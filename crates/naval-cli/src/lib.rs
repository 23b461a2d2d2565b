// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

//! naval-cli - Naval Ravikant's wisdom in your terminal
//!
//! The binary parses flags with clap, resolves them into a [`commands::Command`],
//! executes it to produce the complete output text, and writes that text to
//! stdout in one call. Quote data and layout live in `naval-core`.

/// CLI argument parsing, errors and exit codes.
pub mod cli;
/// Command implementations (version, render).
pub mod commands;
/// Tracing and logging configuration.
pub mod tracing;
