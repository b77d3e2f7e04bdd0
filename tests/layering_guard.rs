//! Layering guardrails to keep the vocabulary crate dependency-free.
//!
//! `bl_core` defines the language vocabulary and nothing else; `bl_syntax`
//! depends on it, never the other way around. This test scans
//! `crates/bl_core/Cargo.toml` and fails if a `[dependencies]` table with
//! entries appears.

#[test]
fn vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/bl_core/Cargo.toml");

    let mut lines = manifest.lines().map(str::trim);
    let has_table = lines.by_ref().any(|line| line == "[dependencies]");
    if !has_table {
        return;
    }

    let entries: Vec<&str> = lines
        .take_while(|line| !line.starts_with('['))
        .filter_map(|line| line.split('#').next())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    assert!(entries.is_empty(), "`bl_core` must stay dependency-free, found: {entries:?}");
}
