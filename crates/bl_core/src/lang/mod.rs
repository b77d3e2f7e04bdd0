//! BL language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved
//! keywords and bug-world conditions.
//!
//! The design goal is to avoid stringly-typed checks scattered across the
//! tooling. Callers work with **stable IDs** (e.g. [`keywords::KeywordId`],
//! [`conditions::Condition`]) and look up spellings/metadata via registry
//! tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no syntax-tree types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for
//!   shared use (diagnostics, formatting, docs).
//!
//! ## Examples
//! ```rust
//! use bl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("WHILE"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "WHILE");
//! ```

pub mod conditions;
pub mod keywords;
