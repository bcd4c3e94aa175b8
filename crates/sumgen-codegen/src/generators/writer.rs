//! Line-oriented source writer with brace-block indentation.

/// Accumulates lines of source, indenting each by the current block depth.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    lines: Vec<String>,
    level: usize,
    indent: String,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            level: 0,
            indent: " ".repeat(indent_width),
        }
    }

    /// Write one line at the current depth. Empty lines carry no indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", self.indent.repeat(self.level), text));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Write `{` and indent.
    pub fn open(&mut self) {
        self.line("{");
        self.level += 1;
    }

    /// Dedent and write `}`.
    pub fn close(&mut self) {
        self.close_with("}");
    }

    /// Dedent and write `text`, e.g. `};`.
    pub fn close_with(&mut self, text: &str) {
        self.level = self.level.saturating_sub(1);
        self.line(text);
    }

    /// Run `f` one level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.level += 1;
        f(self);
        self.level = self.level.saturating_sub(1);
    }

    /// Write every line of a multi-line block at the current depth.
    pub fn block(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The accumulated source, newline-terminated.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
