// Parser state and entrypoint. Included into `crate::parser`.

/// A parsed instruction header and body, before the uniqueness check.
type InstructionDecl = (Ident, Span, Block);

/// Recursive-descent parser over a borrowed token stream.
///
/// ## Notes
/// - The parser walks the stream front-to-back with an index cursor and never
///   looks ahead more than one token.
/// - The first violated rule ends the parse. Nothing half-built escapes: on
///   error the partial tree is dropped with the parser.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser for a token stream produced by [`crate::lexer`].
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole stream into a [`Program`].
    ///
    /// ## Errors
    ///
    /// Returns the first [`ParseError`] encountered, carrying the span of the
    /// offending token.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::new(
                "Unexpected empty token stream",
                Span::default(),
            ));
        }
        self.program()
    }
}
