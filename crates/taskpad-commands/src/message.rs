//! Result messages produced by executed commands
//!
//! A message is a pure value: a prefix sentence, zero or more body lines
//! (usually task display strings), and an optional suffix sentence. The
//! presentation layer decides how to render it.

/// Output of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    prefix: String,
    body: Vec<String>,
    suffix: Option<String>,
}

impl Message {
    /// Create a message with only a prefix sentence
    pub fn new(prefix: impl Into<String>) -> Self {
        Message {
            prefix: prefix.into(),
            body: Vec::new(),
            suffix: None,
        }
    }

    /// Append a body line
    pub fn with_body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Append several body lines
    pub fn with_body_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Set the suffix sentence
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// The prefix sentence
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The body lines
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// The suffix sentence, if any
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}
