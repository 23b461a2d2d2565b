// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

//! Core types for naval-cli
//!
//! This crate owns everything that does not depend on the command line:
//! the embedded quote book, quote selection, text layout and rendering,
//! and build version information. The `naval-cli` crate wires these into
//! an argument parser and writes the result to stdout.

mod error;
/// Embedded portrait used by the framed layout.
pub mod portrait;
/// Quote types, the embedded quote book and selection strategies.
pub mod quote;
/// Text layout and rendering.
pub mod render;
/// Build version information.
pub mod version;

pub use error::{Error, Result};
pub use quote::{AUTHOR, Quote, QuoteBook, Selection};
pub use render::{RenderOptions, Renderer};
pub use version::BuildInfo;
