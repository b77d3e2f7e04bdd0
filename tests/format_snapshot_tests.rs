//! Golden snapshot tests for the formatter
//!
//! These tests format `.bl` input files and compare the output against
//! stored snapshots. This ensures layout changes are reviewed and
//! intentional.
//!
//! Run with: `cargo test --test format_snapshot_tests`
//! Review changes: `cargo insta review`

use bl::format_source;
use std::fs;

/// Load a test file from the format_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/format_snapshots/{}.bl", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

/// Format a source file into the canonical layout
fn format_bl(source: &str) -> String {
    format_source(source).expect("formatter failed")
}

#[test]
fn test_minimal_format() {
    let source = load_test_file("minimal");
    let formatted = format_bl(&source);
    insta::assert_snapshot!("minimal", formatted.trim_end());
}

#[test]
fn test_guards_format() {
    let source = load_test_file("guards");
    let formatted = format_bl(&source);
    insta::assert_snapshot!("guards", formatted.trim_end());
}

#[test]
fn test_instructions_format() {
    let source = load_test_file("instructions");
    let formatted = format_bl(&source);
    insta::assert_snapshot!("instructions", formatted.trim_end());
}

#[test]
fn test_conditions_format() {
    let source = load_test_file("conditions");
    let formatted = format_bl(&source);
    insta::assert_snapshot!("conditions", formatted.trim_end());
}

#[test]
fn test_formatted_output_ends_with_single_newline() {
    for name in ["minimal", "guards", "instructions", "conditions"] {
        let formatted = format_bl(&load_test_file(name));
        assert!(formatted.ends_with('\n'), "{name} output missing newline");
        assert!(
            !formatted.ends_with("\n\n"),
            "{name} output has trailing blank line"
        );
    }
}
