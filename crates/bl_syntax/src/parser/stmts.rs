// Statement and block parsing. Included into `crate::parser`.

impl<'a> Parser<'a> {
    /// Parse statements until a block terminator.
    ///
    /// A block ends at `ELSE`, `END`, or end of input. The terminator is left
    /// in the stream for the enclosing rule to consume, which is also what
    /// makes the empty block work: the terminator is simply the first token
    /// the block sees.
    fn block(&mut self) -> Result<Block, ParseError> {
        let mut stmts = Vec::new();
        while !self.at_block_end() {
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    /// Return `true` if the current token terminates a block.
    fn at_block_end(&self) -> bool {
        self.is_at_end()
            || self.check_keyword(KeywordId::Else)
            || self.check_keyword(KeywordId::End)
    }

    /// Parse a single statement, dispatching on the current token.
    fn statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek().kind.keyword_id() {
            Some(KeywordId::If) => self.if_stmt(),
            Some(KeywordId::While) => self.while_stmt(),
            None if matches!(self.peek().kind, TokenKind::Ident(_)) => self.call_stmt(),
            _ => {
                let mut err = self.error_here("Expected a statement");
                if matches!(self.peek().kind, TokenKind::Condition(_)) {
                    err = err.with_hint("conditions may only appear after 'IF' or 'WHILE'");
                }
                Err(err)
            }
        }
    }

    /// Parse `IF condition THEN block [ELSE block] END IF`.
    ///
    /// Whether this is a plain `IF` or an `IF`/`ELSE` is decided by the single
    /// token that terminated the first block.
    fn if_stmt(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(KeywordId::If, "Expected 'IF'")?;
        let condition = self.expect_condition("Expected a condition after 'IF'")?;
        self.expect_keyword(KeywordId::Then, "Expected 'THEN' after the condition")?;
        let then_body = self.block()?;

        if self.check_keyword(KeywordId::Else) {
            self.advance();
            let else_body = self.block()?;
            self.close_guard(KeywordId::If)?;
            Ok(Statement::IfElse {
                condition,
                then_body,
                else_body,
            })
        } else {
            self.close_guard(KeywordId::If)?;
            Ok(Statement::If {
                condition,
                body: then_body,
            })
        }
    }

    /// Parse `WHILE condition DO block END WHILE`.
    fn while_stmt(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(KeywordId::While, "Expected 'WHILE'")?;
        let condition = self.expect_condition("Expected a condition after 'WHILE'")?;
        self.expect_keyword(KeywordId::Do, "Expected 'DO' after the condition")?;
        let body = self.block()?;
        self.close_guard(KeywordId::While)?;
        Ok(Statement::While { condition, body })
    }

    /// Parse a bare instruction call.
    ///
    /// Call targets are resolved later, so any identifier is accepted here
    /// whether or not the program defines it.
    fn call_stmt(&mut self) -> Result<Statement, ParseError> {
        let (name, _) = self.expect_ident("Expected an instruction name")?;
        Ok(Statement::Call(name))
    }

    /// Consume `END` followed by the exact keyword that opened the guard.
    fn close_guard(&mut self, opener: KeywordId) -> Result<(), ParseError> {
        let opener_str = keywords::as_str(opener);
        self.expect_keyword(
            KeywordId::End,
            &format!("Expected 'END' to close '{opener_str}'"),
        )?;
        self.expect_keyword(opener, &format!("Expected '{opener_str}' after 'END'"))?;
        Ok(())
    }
}
