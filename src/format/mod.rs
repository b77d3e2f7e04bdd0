//! BL Code Formatter
//!
//! This module formats BL source files into the canonical layout:
//! one statement per line, 4-space indentation for guard bodies,
//! instruction definitions in name order, and blank lines between the
//! program's sections.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;

use bl_syntax::diagnostics::ParseError;
use bl_syntax::{lexer, parser};

/// Format BL source code with default settings
pub fn format_source(source: &str) -> Result<String, ParseError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format BL source code with custom configuration
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, ParseError> {
    let tokens = lexer::lex(source)?;
    let ast = parser::parse(&tokens)?;
    Ok(Formatter::new(config).format(&ast))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, ParseError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source
pub fn format_diff(source: &str) -> Result<Option<String>, ParseError> {
    let formatted = format_source(source)?;

    if source == formatted {
        return Ok(None);
    }

    // Simple line-by-line diff
    let mut diff = String::new();
    let original_lines: Vec<&str> = source.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    let max_lines = original_lines.len().max(formatted_lines.len());

    for i in 0..max_lines {
        let orig = original_lines.get(i).unwrap_or(&"");
        let fmt = formatted_lines.get(i).unwrap_or(&"");

        if orig != fmt {
            if !orig.is_empty() {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if !fmt.is_empty() {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
            }
        }
    }

    Ok(Some(diff))
}
