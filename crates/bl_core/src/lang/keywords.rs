//! Reserved-word registry for BL.
//!
//! Everything the workspace knows about keywords comes from here: a stable
//! [`KeywordId`] per reserved word and the const table [`KEYWORDS`] pairing
//! each id with its canonical spelling and category.
//!
//! ## Notes
//! - BL spells keywords in upper case, and [`from_str`] matches
//!   **case-sensitively**: `WHILE` is the keyword, `while` is an ordinary
//!   identifier.
//! - The registry stays pure (no syntax-tree types, no IO), so both the lexer
//!   and the formatter can depend on it without dragging each other in.
//!
//! ## Examples
//! ```rust
//! use bl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("IF"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("if"), None);
//! assert_eq!(keywords::as_str(KeywordId::If), "IF");
//! ```

/// One variant per reserved word.
///
/// ## Notes
/// - [`as_str`] recovers the canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Is,
    Begin,
    End,
    Instruction,

    // Control flow
    If,
    Then,
    Else,
    While,
    Do,
}

/// Coarse grouping consumed by docs and tooling.
///
/// ## Notes
/// - Parsing never consults the category; it is descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Structure,
    ControlFlow,
}

/// One registry row.
///
/// ## Notes
/// - `canonical` is the only accepted spelling; BL defines no aliases.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// The complete keyword table.
///
/// ## Notes
/// - Rows are grouped for readability; their order carries no meaning.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program structure
    info(KeywordId::Program, "PROGRAM", KeywordCategory::Structure),
    info(KeywordId::Is, "IS", KeywordCategory::Structure),
    info(KeywordId::Begin, "BEGIN", KeywordCategory::Structure),
    info(KeywordId::End, "END", KeywordCategory::Structure),
    info(KeywordId::Instruction, "INSTRUCTION", KeywordCategory::Structure),
    // Control flow
    info(KeywordId::If, "IF", KeywordCategory::ControlFlow),
    info(KeywordId::Then, "THEN", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "ELSE", KeywordCategory::ControlFlow),
    info(KeywordId::While, "WHILE", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "DO", KeywordCategory::ControlFlow),
];

/// Canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category of `id`.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Registry row for `id`.
///
/// ## Panics
/// - When `id` has no row in [`KEYWORDS`], which would mean the table fell
///   out of sync with the enum.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling to its keyword, if it is one.
///
/// ## Returns
/// - `Some(KeywordId)` when `s` exactly matches a canonical spelling.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
