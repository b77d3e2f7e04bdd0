//! Token types for the BL lexer.
//!
//! Chunks resolve against the `bl_core::lang` registries at lex time, so
//! keyword and condition tokens carry stable IDs rather than spellings. The
//! parser never compares strings to decide what a token is; see
//! `crate::token_helpers` for the matching helpers it uses instead.

use crate::ast::Span;
use bl_core::lang::conditions::{self, Condition};
use bl_core::lang::keywords::{self, KeywordId};

/// What a lexed chunk turned out to be.
///
/// Every chunk gets exactly one classification. `true` is always a condition
/// token, never an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Condition(Condition),
    Ident(String),
    Eof,
}

/// A classified chunk and the byte range it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Look up a chunk in the keyword registry.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

/// Look up a chunk in the condition registry.
pub fn condition_id(name: &str) -> Option<Condition> {
    conditions::from_str(name)
}
