// Top-level program parsing. Included into `crate::parser`.

impl<'a> Parser<'a> {
    /// Parse `PROGRAM name IS instruction* BEGIN block END name`.
    ///
    /// The closing name must repeat the opening name, and nothing may follow
    /// it but the `Eof` token.
    fn program(&mut self) -> Result<Program, ParseError> {
        self.expect_keyword(KeywordId::Program, "Expected 'PROGRAM' to open the program")?;
        let (name, _) = self.expect_ident("Expected a program name after 'PROGRAM'")?;
        self.expect_keyword(KeywordId::Is, "Expected 'IS' after the program name")?;

        let mut instructions: BTreeMap<Ident, Block> = BTreeMap::new();
        while self.check_keyword(KeywordId::Instruction) {
            let (inst_name, name_span, body) = self.instruction()?;
            if instructions.contains_key(&inst_name) {
                return Err(ParseError::new(
                    format!("Instruction '{inst_name}' has the same name as an earlier instruction"),
                    name_span,
                )
                .with_hint("instruction names must be unique within a program"));
            }
            instructions.insert(inst_name, body);
        }

        self.expect_keyword(KeywordId::Begin, "Expected 'BEGIN' to open the program body")?;
        let body = self.block()?;
        self.expect_keyword(KeywordId::End, "Expected 'END' to close the program body")?;
        let (closing, closing_span) = self.expect_ident("Expected the program name after 'END'")?;
        if closing != name {
            return Err(ParseError::new(
                format!("Closing name '{closing}' does not match the program name '{name}'"),
                closing_span,
            ));
        }
        self.expect_end_of_input()?;

        Ok(Program {
            name,
            instructions,
            body,
        })
    }

    /// Parse `INSTRUCTION name IS block END name`.
    ///
    /// Returns the name span alongside the parts so the caller can point a
    /// duplicate-name error at the definition site.
    fn instruction(&mut self) -> Result<InstructionDecl, ParseError> {
        self.expect_keyword(KeywordId::Instruction, "Expected 'INSTRUCTION'")?;
        let (name, name_span) =
            self.expect_ident("Expected an instruction name after 'INSTRUCTION'")?;
        self.expect_keyword(KeywordId::Is, "Expected 'IS' after the instruction name")?;
        let body = self.block()?;
        self.expect_keyword(KeywordId::End, "Expected 'END' to close the instruction body")?;
        let (closing, closing_span) =
            self.expect_ident("Expected the instruction name after 'END'")?;
        if closing != name {
            return Err(ParseError::new(
                format!("Closing name '{closing}' does not match the instruction name '{name}'"),
                closing_span,
            ));
        }
        Ok((name, name_span, body))
    }

    /// Require the `Eof` token and nothing after it.
    fn expect_end_of_input(&mut self) -> Result<(), ParseError> {
        if !self.is_at_end() {
            return Err(self.error_here("Expected end of input after the program"));
        }
        if self.pos + 1 != self.tokens.len() {
            let extra = &self.tokens[self.pos + 1];
            return Err(ParseError::new(
                format!("Found {} after end of input", extra.kind.describe()),
                extra.span,
            ));
        }
        Ok(())
    }
}
