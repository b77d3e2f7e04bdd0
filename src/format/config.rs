//! Formatting configuration for BL
//!
//! BL's canonical layout is fixed apart from two knobs: how far nested
//! blocks indent, and how many blank lines separate the program's sections.

/// Knobs for the canonical layout.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Spaces added per block nesting level
    pub indent_width: usize,
    /// Blank lines between the header, each instruction definition, and the
    /// main body
    pub blank_lines_between_sections: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_between_sections: 1,
        }
    }
}

impl FormatConfig {
    /// Start from the canonical defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Override the section spacing.
    pub fn with_blank_lines_between_sections(mut self, count: usize) -> Self {
        self.blank_lines_between_sections = count;
        self
    }
}
