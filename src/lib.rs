#![forbid(unsafe_code)]
//! BL Language Front End
//!
//! BL is the programming language of the BugsWorld simulator: a program
//! defines a bug's behavior as named instruction definitions plus a main
//! block, with control flow guarded by sensor conditions. This crate is the
//! front end: lexing, parsing, rendered diagnostics, and a canonical
//! formatter, with the `bl` binary on top.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug in this crate (logic error), use
//!   `.expect("reason")` with a clear explanation. The vocabulary tables in `bl_core` do this for
//!   registry lookups that cannot fail.

pub mod cli;
pub mod format;

pub use bl_syntax::ast;
pub use bl_syntax::diagnostics;
pub use bl_syntax::lexer;
pub use bl_syntax::parser;

pub use format::{FormatConfig, check_formatted, format_diff, format_source, format_source_with_config};
