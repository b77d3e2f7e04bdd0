//! Lexer for the BL language
//!
//! Handles tokenization including:
//! - Keywords (PROGRAM, INSTRUCTION, IF, WHILE, ...)
//! - Conditions (next-is-empty, random, ...)
//! - Identifiers (program, instruction, and call names)
//!
//! A BL token is a maximal run of non-whitespace characters. There are no
//! comments, no literals, and no layout tokens, so the scanner is a plain
//! chunker plus a registry lookup per chunk.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, condition_id, keyword_id};

use crate::ast::Span;
use crate::diagnostics::ParseError;

/// Lexer for BL source code.
///
/// Converts source text into a stream of tokens. The first unclassifiable
/// chunk aborts the scan; there is no error collection.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or the first error found.
    /// The token stream always ends with exactly one `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Chunk scanning
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), ParseError> {
        // Skip whitespace between chunks
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }

        if self.is_at_end() {
            return Ok(());
        }

        let start = self.current_pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                break;
            }
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        let span = Span::new(start, self.current_pos);

        // Classification order: keyword, condition, identifier. The registries
        // are disjoint and case-sensitive, so each chunk resolves at most once.
        if let Some(id) = keyword_id(spelling) {
            self.tokens.push(Token::new(TokenKind::Keyword(id), span));
        } else if let Some(cond) = condition_id(spelling) {
            self.tokens.push(Token::new(TokenKind::Condition(cond), span));
        } else if is_identifier(spelling) {
            self.tokens
                .push(Token::new(TokenKind::Ident(spelling.to_string()), span));
        } else {
            let mut err = ParseError::new(format!("Unrecognized token '{spelling}'"), span);
            if spelling.contains('-') {
                err = err.with_hint("condition names are lower case, like 'next-is-empty'");
            } else {
                err = err.with_hint("names start with a letter and contain only letters and digits");
            }
            return Err(err);
        }
        Ok(())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check whether a chunk is a well-formed BL identifier.
///
/// Identifiers start with an ASCII letter and continue with ASCII letters or
/// digits. Keyword and condition spellings are resolved before this predicate
/// is consulted, so it never sees them during scanning.
pub fn is_identifier(chunk: &str) -> bool {
    let mut chars = chunk.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_continue),
        _ => false,
    }
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
