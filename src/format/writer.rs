//! Line-oriented output buffer for the formatter.
//!
//! Every BL construct occupies exactly one line, so the writer deals in whole
//! lines: callers hand it finished line text and it applies the indentation
//! for the current block depth.

use super::config::FormatConfig;

/// Accumulates formatted lines at a tracked block depth.
pub struct FormatWriter {
    output: String,
    depth: usize,
    config: FormatConfig,
}

impl FormatWriter {
    /// Create an empty writer with the given config.
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            config,
        }
    }

    /// Consume the writer and return the accumulated output.
    pub fn finish(self) -> String {
        self.output
    }

    /// Enter a block: subsequent lines gain one level of indentation.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Leave a block.
    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Emit one complete line, indented to the current depth.
    ///
    /// An empty `text` produces a bare newline with no indentation, so blank
    /// output never carries trailing spaces.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            let pad = self.depth * self.config.indent_width;
            self.output.extend(std::iter::repeat(' ').take(pad));
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    /// Emit `count` blank lines.
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.output.push('\n');
        }
    }

    /// The config this writer was built with.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> FormatWriter {
        FormatWriter::new(FormatConfig::default())
    }

    #[test]
    fn test_new_writer_is_empty() {
        assert_eq!(default_writer().finish(), "");
    }

    #[test]
    fn test_line_is_terminated() {
        let mut writer = default_writer();
        writer.line("BEGIN");
        assert_eq!(writer.finish(), "BEGIN\n");
    }

    #[test]
    fn test_lines_accumulate_in_order() {
        let mut writer = default_writer();
        writer.line("PROGRAM p IS");
        writer.line("BEGIN");
        writer.line("END p");
        assert_eq!(writer.finish(), "PROGRAM p IS\nBEGIN\nEND p\n");
    }

    #[test]
    fn test_indent_prefixes_lines() {
        let mut writer = default_writer();
        writer.line("BEGIN");
        writer.indent();
        writer.line("move");
        writer.dedent();
        writer.line("END p");
        assert_eq!(writer.finish(), "BEGIN\n    move\nEND p\n");
    }

    #[test]
    fn test_indent_width_comes_from_config() {
        let mut writer = FormatWriter::new(FormatConfig::new().with_indent_width(2));
        writer.indent();
        writer.indent();
        writer.line("move");
        assert_eq!(writer.finish(), "    move\n");
    }

    #[test]
    fn test_dedent_at_margin_stays_at_margin() {
        let mut writer = default_writer();
        writer.dedent();
        writer.line("move");
        assert_eq!(writer.finish(), "move\n");
    }

    #[test]
    fn test_empty_line_carries_no_padding() {
        let mut writer = default_writer();
        writer.indent();
        writer.line("");
        assert_eq!(writer.finish(), "\n");
    }

    #[test]
    fn test_blank_lines_zero_is_noop() {
        let mut writer = default_writer();
        writer.line("BEGIN");
        writer.blank_lines(0);
        writer.line("END p");
        assert_eq!(writer.finish(), "BEGIN\nEND p\n");
    }

    #[test]
    fn test_blank_lines_between_sections() {
        let mut writer = default_writer();
        writer.line("PROGRAM p IS");
        writer.blank_lines(1);
        writer.line("BEGIN");
        assert_eq!(writer.finish(), "PROGRAM p IS\n\nBEGIN\n");
    }

    #[test]
    fn test_guard_block_shape() {
        let mut writer = default_writer();
        writer.line("WHILE true DO");
        writer.indent();
        writer.line("move");
        writer.dedent();
        writer.line("END WHILE");
        assert_eq!(writer.finish(), "WHILE true DO\n    move\nEND WHILE\n");
    }

    #[test]
    fn test_config_accessor() {
        let writer = FormatWriter::new(FormatConfig::new().with_indent_width(6));
        assert_eq!(writer.config().indent_width, 6);
    }
}
