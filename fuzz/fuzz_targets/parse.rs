#![no_main]

use bl::{format_source, lexer, parser};
use libfuzzer_sys::fuzz_target;

// Drive the whole front end: lex and parse arbitrary bytes, and whenever the
// input turns out to be a valid program, check that the canonical formatter
// emits something the parser accepts again.
fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tokens) = lexer::lex(source) else {
        return;
    };
    if parser::parse(&tokens).is_err() {
        return;
    }
    let formatted = match format_source(source) {
        Ok(formatted) => formatted,
        Err(err) => panic!("valid program failed to format: {err}"),
    };
    let reparsed = lexer::lex(&formatted).and_then(|tokens| parser::parse(&tokens));
    if let Err(err) = reparsed {
        panic!("canonical output failed to reparse: {err}");
    }
});
