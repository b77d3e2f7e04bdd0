//! Integration tests for the BL front end

use std::fs;
use std::path::Path;

use bl::{lexer, parser};

/// Helper to run the full front end on a source file
fn check_file(path: &Path) -> Result<(), String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let tokens = lexer::lex(&source).map_err(|e| e.message.clone())?;
    parser::parse(&tokens).map_err(|e| e.message.clone())?;
    Ok(())
}

/// Test that all valid fixtures parse successfully
#[test]
fn test_valid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/valid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "bl").unwrap_or(false) {
            let result = check_file(&path);
            assert!(
                result.is_ok(),
                "Expected {} to parse successfully, got error: {:?}",
                path.display(),
                result.unwrap_err()
            );
        }
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/invalid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "bl").unwrap_or(false) {
            let result = check_file(&path);
            assert!(
                result.is_err(),
                "Expected {} to fail, but it parsed",
                path.display()
            );
        }
    }
}

/// Test that valid fixtures survive a format round trip
#[test]
fn test_valid_fixtures_format_round_trip() {
    let fixtures_dir = Path::new("tests/fixtures/valid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "bl").unwrap_or(false) {
            let source = fs::read_to_string(&path).unwrap();
            let formatted = bl::format_source(&source)
                .unwrap_or_else(|e| panic!("{} failed to format: {}", path.display(), e));

            // The canonical form parses to the same tree as the original.
            let original = parser::parse(&lexer::lex(&source).unwrap()).unwrap();
            let reparsed = parser::parse(&lexer::lex(&formatted).unwrap()).unwrap();
            assert_eq!(
                original,
                reparsed,
                "{} changed meaning when formatted",
                path.display()
            );

            assert!(
                bl::check_formatted(&formatted).unwrap(),
                "{} did not reach a fixed point after one format pass",
                path.display()
            );
        }
    }
}

/// Front-end behavior exercised through the crate surface
mod pipeline_tests {
    use bl::lexer::{TokenKind, lex};
    use bl::{diagnostics, parser};

    #[test]
    fn test_token_stream_ends_with_eof() {
        let tokens = lex("PROGRAM p IS BEGIN END p").unwrap();
        assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));
    }

    #[test]
    fn test_conditions_lex_as_conditions() {
        let tokens = lex("IF next-is-not-enemy THEN").unwrap();
        assert!(matches!(tokens[1].kind, TokenKind::Condition(_)));
    }

    #[test]
    fn test_rendered_diagnostic_names_the_file() {
        let source = "PROGRAM p IS BEGIN END q";
        let tokens = lex(source).unwrap();
        let err = parser::parse(&tokens).unwrap_err();
        let rendered = diagnostics::render("walk.bl", source, &err);
        assert!(rendered.contains("walk.bl"), "{rendered}");
        assert!(
            rendered.contains("does not match the program name"),
            "{rendered}"
        );
    }

    #[test]
    fn test_lex_error_renders_with_source_context() {
        let source = "PROGRAM 9lives IS BEGIN END p";
        let err = lex(source).unwrap_err();
        let rendered = diagnostics::render("bad.bl", source, &err);
        assert!(rendered.contains("bad.bl"), "{rendered}");
    }
}
