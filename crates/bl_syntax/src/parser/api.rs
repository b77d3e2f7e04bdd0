// Public parsing entrypoint. Included into `crate::parser`.

/// Parse a token stream into a [`Program`].
///
/// ## Parameters
///
/// - `tokens`: Token stream produced by [`crate::lexer::lex`], ending in `Eof`.
///
/// ## Errors
///
/// Returns the first [`ParseError`] encountered, carrying the span of the
/// offending token. Anything left in the stream after the closing program
/// name, other than the final `Eof`, is rejected.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
