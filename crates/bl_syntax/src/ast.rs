//! Abstract syntax tree definitions for BL.
//!
//! A BL program is a name, a table of instruction definitions, and a main body.
//! Bodies are always blocks: ordered, possibly empty statement sequences. That
//! invariant is carried by the types themselves (every body field is a [`Block`]),
//! so no parser state or later pass has to re-check it.

use std::collections::BTreeMap;

use bl_core::lang::conditions::Condition;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Identifier (plain string; BL names are short and never interned)
pub type Ident = String;

/// An ordered, possibly empty sequence of statements.
pub type Block = Vec<Statement>;

/// A single BL statement.
///
/// ## Notes
/// - `If`/`IfElse` are distinct cases: an absent `ELSE` branch is not an empty
///   one, and the two print differently.
/// - Guard conditions come from the closed [`Condition`] set; there is no
///   expression grammar in BL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    If {
        condition: Condition,
        body: Block,
    },
    IfElse {
        condition: Condition,
        then_body: Block,
        else_body: Block,
    },
    While {
        condition: Condition,
        body: Block,
    },
    /// Invocation of a user-defined instruction or a primitive move.
    Call(Ident),
}

/// A complete BL program.
///
/// ## Notes
/// - `instructions` maps each instruction name to its body; map keys are unique
///   by construction, which is exactly the language's uniqueness rule.
/// - `BTreeMap` iteration is ordered by name, so printing is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: Ident,
    pub instructions: BTreeMap<Ident, Block>,
    pub body: Block,
}
