// Token-stream helpers shared by every grammar rule. Included into `crate::parser`.

impl<'a> Parser<'a> {
    /// Return `true` if the cursor sits on the `Eof` token.
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Consume the current token and return it.
    ///
    /// The cursor never moves past the `Eof` token, so `peek()` stays valid
    /// no matter how often this is called.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Consume the given keyword or fail with `msg`.
    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, ParseError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Consume an identifier or fail with `msg`.
    ///
    /// Returns the name together with its span so callers can point errors at
    /// the name itself (duplicate definitions, mismatched closing names).
    fn expect_ident(&mut self, msg: &str) -> Result<(Ident, Span), ParseError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.peek().span;
                self.advance();
                Ok((name, span))
            }
            _ => Err(self.error_here(msg)),
        }
    }

    /// Consume a condition or fail with `msg`.
    fn expect_condition(&mut self, msg: &str) -> Result<Condition, ParseError> {
        match self.peek().kind {
            TokenKind::Condition(condition) => {
                self.advance();
                Ok(condition)
            }
            _ => Err(self.error_here(msg)),
        }
    }

    /// Build a `"{msg}, found {token}"` error at the current token.
    fn error_here(&self, msg: &str) -> ParseError {
        let token = self.peek();
        ParseError::new(
            format!("{msg}, found {}", token.kind.describe()),
            token.span,
        )
    }
}
