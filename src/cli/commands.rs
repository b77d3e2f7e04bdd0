//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use bl_syntax::ast::Program;
use bl_syntax::{diagnostics, lexer, parser};

use crate::format::{format_diff, format_source};

use super::{CliError, CliResult, ExitCode};

/// Source files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a source file, enforcing the size cap.
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{file_path}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{file_path}' is too large ({} bytes, max {MAX_SOURCE_SIZE} bytes)",
            metadata.len()
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{file_path}': {e}")))
}

/// Lex and parse a source string, rendering any failure against the source.
fn parse_source(file_path: &str, source: &str) -> CliResult<Program> {
    let tokens = lexer::lex(source)
        .map_err(|err| CliError::failure(diagnostics::render(file_path, source, &err)))?;
    parser::parse(&tokens)
        .map_err(|err| CliError::failure(diagnostics::render(file_path, source, &err)))
}

/// Check that a file parses.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    parse_source(file_path, &source)?;
    println!("✓ Syntax check passed!");
    Ok(ExitCode::SUCCESS)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source)
        .map_err(|err| CliError::failure(diagnostics::render(file_path, &source, &err)))?;

    for tok in &tokens {
        println!("{tok:?}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the syntax tree.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ast = parse_source(file_path, &source)?;
    println!("{ast:#?}");
    Ok(ExitCode::SUCCESS)
}

/// Format BL source files under `path`.
///
/// `check_mode` and `diff_mode` report stale files without touching them;
/// otherwise stale files are rewritten in place.
pub fn format_files(path: &str, check_mode: bool, diff_mode: bool) -> CliResult<ExitCode> {
    let files = collect_bl_files(Path::new(path));
    if files.is_empty() {
        return Err(CliError::failure("No .bl files found"));
    }
    tracing::debug!(file_count = files.len(), "formatting");

    let write_mode = !check_mode && !diff_mode;
    let mut stale = 0usize;
    let mut written = 0usize;
    let mut errors = 0usize;

    for file in &files {
        let display = file.display();

        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Error reading {display}: {err}");
                errors += 1;
                continue;
            }
        };

        let formatted = match format_source(&source) {
            Ok(formatted) => formatted,
            Err(err) => {
                eprintln!(
                    "{}",
                    diagnostics::render(&file.to_string_lossy(), &source, &err)
                );
                errors += 1;
                continue;
            }
        };

        if formatted == source {
            continue;
        }
        stale += 1;

        if diff_mode {
            println!("--- {display}");
            if let Ok(Some(diff)) = format_diff(&source) {
                print!("{diff}");
            }
            println!();
        }
        if check_mode {
            println!("Would reformat: {display}");
        }
        if write_mode {
            match fs::write(file, &formatted) {
                Ok(()) => {
                    println!("Formatted: {display}");
                    written += 1;
                }
                Err(err) => {
                    eprintln!("Error writing {display}: {err}");
                    errors += 1;
                }
            }
        }
    }

    if write_mode {
        println!("\n✓ {written} file(s) formatted, {errors} error(s)");
    } else if stale > 0 {
        let verdict = if check_mode {
            "would be reformatted"
        } else {
            "need formatting"
        };
        return Err(CliError::failure(format!("\n{stale} file(s) {verdict}")));
    } else if errors == 0 {
        println!("✓ {} file(s) already formatted", files.len());
    }

    if errors > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Find `.bl` files: the path itself, or everything under it.
///
/// Hidden directories and `target` are skipped.
fn collect_bl_files(root: &Path) -> Vec<PathBuf> {
    fn is_bl(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "bl")
    }

    if root.is_file() {
        return if is_bl(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        };
    }

    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                if !name.starts_with('.') && name != "target" {
                    pending.push(path);
                }
            } else if is_bl(&path) {
                files.push(path);
            }
        }
    }
    files
}
