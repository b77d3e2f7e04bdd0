//! Parser for the BL language
//!
//! Converts a token stream into an AST by recursive descent, consuming the
//! stream front-to-back with at most one token of lookahead. The first rule
//! violation ends the parse; there is no recovery and no error list.
//!
//! ## Examples
//!
//! ```rust
//! use bl_syntax::{lexer, parser};
//!
//! let source = "PROGRAM demo IS BEGIN move END demo";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.name, "demo");
//! ```

use std::collections::BTreeMap;

use crate::ast::{Block, Ident, Program, Span, Statement};
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use bl_core::lang::conditions::Condition;
use bl_core::lang::keywords::{self, KeywordId};

// NOTE: The parser lives in one Rust module but is spread over several files
// via `include!`, so private helpers stay callable across the chunks without
// one oversized source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/program.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
