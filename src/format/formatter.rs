//! Core formatting logic for BL source code
//!
//! Walks the AST and emits the canonical layout: one statement per line,
//! guard bodies indented one level, instruction definitions in name order
//! with blank lines between sections.

use bl_core::lang::conditions;
use bl_syntax::ast::{Block, Program, Statement};

use super::config::FormatConfig;
use super::writer::FormatWriter;

/// Formatter that transforms an AST back to formatted source code
pub struct Formatter {
    writer: FormatWriter,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Format a program and return the formatted source
    pub fn format(mut self, program: &Program) -> String {
        self.format_program(program);
        self.writer.finish()
    }

    fn format_program(&mut self, program: &Program) {
        let blanks = self.writer.config().blank_lines_between_sections;

        self.writer.line(&format!("PROGRAM {} IS", program.name));

        // Instruction definitions come out in name order, which is the map's
        // iteration order.
        for (name, body) in &program.instructions {
            self.writer.blank_lines(blanks);
            self.writer.line(&format!("INSTRUCTION {name} IS"));
            self.format_block(body);
            self.writer.line(&format!("END {name}"));
        }

        self.writer.blank_lines(blanks);
        self.writer.line("BEGIN");
        self.format_block(&program.body);
        self.writer.line(&format!("END {}", program.name));
    }

    fn format_block(&mut self, block: &Block) {
        self.writer.indent();
        for stmt in block {
            self.format_statement(stmt);
        }
        self.writer.dedent();
    }

    fn format_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Call(name) => self.writer.line(name),
            Statement::If { condition, body } => {
                self.writer
                    .line(&format!("IF {} THEN", conditions::as_str(*condition)));
                self.format_block(body);
                self.writer.line("END IF");
            }
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            } => {
                self.writer
                    .line(&format!("IF {} THEN", conditions::as_str(*condition)));
                self.format_block(then_body);
                self.writer.line("ELSE");
                self.format_block(else_body);
                self.writer.line("END IF");
            }
            Statement::While { condition, body } => {
                self.writer
                    .line(&format!("WHILE {} DO", conditions::as_str(*condition)));
                self.format_block(body);
                self.writer.line("END WHILE");
            }
        }
    }
}
