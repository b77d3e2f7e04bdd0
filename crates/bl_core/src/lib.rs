//! Provide the canonical language vocabulary for the BL toolchain.
//!
//! This crate is intentionally small and dependency-free. It contains the closed
//! vocabulary sets of the BL language (reserved keywords and bug-world conditions)
//! as pure registry tables that the lexer, the formatter, and diagnostics all
//! share.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no syntax-tree types.
//! - Syntax legality is owned by the lexer/parser; this crate only answers "is this
//!   spelling part of the language, and what is its canonical form?".

pub mod lang;
