//! Guard-condition registry for BL.
//!
//! `IF` and `WHILE` statements test exactly one condition from this closed
//! set. Each condition has a stable [`Condition`] id, and the const table
//! [`CONDITIONS`] pairs ids with canonical spellings and categories.
//!
//! ## Notes
//! - Condition spellings are lower case with hyphens (`next-is-not-wall`) and
//!   lookup via [`from_str`] is **case-sensitive**.
//! - Adding a condition to the language means adding one row here; the lexer,
//!   formatter, and diagnostics all read the table.
//!
//! ## Examples
//! ```rust
//! use bl_core::lang::conditions::{self, Condition};
//!
//! assert_eq!(conditions::from_str("next-is-empty"), Some(Condition::NextIsEmpty));
//! assert_eq!(conditions::as_str(Condition::Random), "random");
//! ```

/// One variant per guard condition.
///
/// ## Notes
/// - [`as_str`] recovers the canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    // Sensors on the cell ahead of the bug
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,

    // Evaluated without consulting the world
    Random,
    True,
}

/// Coarse grouping consumed by docs and tooling.
///
/// ## Notes
/// - Parsing never consults the category; every condition parses the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    /// Probes the cell directly ahead of the bug.
    Sensor,
    /// Needs no world state (`random`, `true`).
    Intrinsic,
}

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct ConditionInfo {
    pub id: Condition,
    pub canonical: &'static str,
    pub category: ConditionCategory,
}

/// The complete condition table.
///
/// ## Notes
/// - Sensor conditions come in affirmative/negated pairs; keep the pairs adjacent.
pub const CONDITIONS: &[ConditionInfo] = &[
    // Sensors
    info(Condition::NextIsEmpty, "next-is-empty", ConditionCategory::Sensor),
    info(Condition::NextIsNotEmpty, "next-is-not-empty", ConditionCategory::Sensor),
    info(Condition::NextIsWall, "next-is-wall", ConditionCategory::Sensor),
    info(Condition::NextIsNotWall, "next-is-not-wall", ConditionCategory::Sensor),
    info(Condition::NextIsFriend, "next-is-friend", ConditionCategory::Sensor),
    info(Condition::NextIsNotFriend, "next-is-not-friend", ConditionCategory::Sensor),
    info(Condition::NextIsEnemy, "next-is-enemy", ConditionCategory::Sensor),
    info(Condition::NextIsNotEnemy, "next-is-not-enemy", ConditionCategory::Sensor),
    // Intrinsics
    info(Condition::Random, "random", ConditionCategory::Intrinsic),
    info(Condition::True, "true", ConditionCategory::Intrinsic),
];

/// Canonical spelling for `id`.
pub fn as_str(id: Condition) -> &'static str {
    info_for(id).canonical
}

/// Category of `id`.
pub fn category(id: Condition) -> ConditionCategory {
    info_for(id).category
}

/// Registry row for `id`.
///
/// ## Panics
/// - When `id` has no row in [`CONDITIONS`], which would mean the table fell
///   out of sync with the enum.
pub fn info_for(id: Condition) -> &'static ConditionInfo {
    CONDITIONS.iter().find(|c| c.id == id).expect("condition info missing")
}

/// Resolve a spelling to its condition, if it is one.
///
/// ## Returns
/// - `Some(Condition)` when `s` exactly matches a canonical spelling.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**; `Random` or `NEXT-IS-EMPTY` do not resolve.
pub fn from_str(s: &str) -> Option<Condition> {
    CONDITIONS.iter().find(|c| c.canonical == s).map(|c| c.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: Condition, canonical: &'static str, category: ConditionCategory) -> ConditionInfo {
    ConditionInfo { id, canonical, category }
}
