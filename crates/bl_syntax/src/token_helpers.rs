//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to
//! give diagnostics a consistent way to talk about tokens.

use crate::lexer::TokenKind;
use bl_core::lang::conditions;
use bl_core::lang::keywords::{self, KeywordId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Describe this token for "expected X, found Y" diagnostics.
    ///
    /// Canonical spellings come from the `bl_core::lang` registries, so the
    /// wording always matches what the user wrote.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
            TokenKind::Condition(c) => format!("condition '{}'", conditions::as_str(*c)),
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}
