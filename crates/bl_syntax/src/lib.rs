//! Shared syntax frontend for the BL language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI, the
//! formatter, and future tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it checks the shape of a program
//!   (including matching `END` names and unique instruction names) but does not
//!   interpret or otherwise execute it.
//! - Vocabulary identity (keywords/conditions) comes from `bl_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use bl_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("PROGRAM p IS BEGIN END p").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.name, "p");
//! ```
//!
//! ## See also
//! - `bl_core::lang` for registry-backed language vocabulary (keywords/conditions).

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
