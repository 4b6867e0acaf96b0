//! Output writer with indentation tracking
//!
//! Renders a [`TestClassDef`] as C# source with Allman braces and configurable indentation.

use super::ir::{MemberDef, Stmt, TestClassDef};

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of blank lines between members of the test class
    pub blank_lines_members: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_members: 1,
        }
    }
}

impl RenderConfig {
    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Writer that tracks indentation and builds formatted output
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: RenderConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new writer with the given config
    pub fn new(config: RenderConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            self.output.push_str(&" ".repeat(self.indent_level * self.config.indent_width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines (for spacing between members)
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    /// `{`, then indent.
    pub fn open_block(&mut self) {
        self.writeln("{");
        self.indent();
    }

    /// Dedent, then `}`.
    pub fn close_block(&mut self) {
        self.dedent();
        self.writeln("}");
    }

    fn block(&mut self, header: &str, body: &[Stmt]) {
        self.writeln(header);
        self.open_block();
        for stmt in body {
            self.writeln(&stmt.to_string());
        }
        self.close_block();
    }

    fn member(&mut self, member: &MemberDef) {
        match member {
            MemberDef::Field { ty, name } => self.writeln(&format!("private {ty} {name};")),
            MemberDef::Method { attribute, name, body } => {
                if let Some(attribute) = attribute {
                    self.writeln(&format!("[{attribute}]"));
                }
                self.block(&format!("public void {name}()"), body);
            }
            MemberDef::Constructor { name, body } => self.block(&format!("public {name}()"), body),
        }
    }
}

/// Render one generated file.
pub fn render(class: &TestClassDef, config: &RenderConfig) -> String {
    let mut w = CodeWriter::new(config.clone());

    for using in &class.usings {
        w.writeln(using);
    }
    if !class.usings.is_empty() {
        w.newline();
    }

    w.writeln(&format!("namespace {}", class.namespace));
    w.open_block();

    if let Some(attribute) = class.attribute {
        w.writeln(&format!("[{attribute}]"));
    }
    w.writeln(&format!("public class {}", class.name));
    w.open_block();

    for (i, member) in class.members.iter().enumerate() {
        if i > 0 {
            w.blank_lines(config.blank_lines_members);
        }
        w.member(member);
    }

    w.close_block();
    w.close_block();
    w.finish()
}
