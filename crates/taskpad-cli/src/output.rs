// Output formatting and styling

use colored::Colorize;
use taskpad_commands::Message;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Style with colors forced off, for tests and piped output
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Render a command result message. Body lines are indented under the
    /// prefix sentence.
    pub fn message(&self, message: &Message) -> String {
        let mut lines = Vec::with_capacity(message.body().len() + 2);
        if self.use_colors {
            lines.push(message.prefix().bold().to_string());
        } else {
            lines.push(message.prefix().to_string());
        }
        for line in message.body() {
            lines.push(format!("  {}", line));
        }
        if let Some(suffix) = message.suffix() {
            lines.push(suffix.to_string());
        }
        lines.join("\n")
    }

    /// Format an error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Greeting printed when a session starts
    pub fn greeting(&self) -> String {
        let banner = "Hello! What can I do for you today?";
        if self.use_colors {
            banner.bold().to_string()
        } else {
            banner.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_rendering_indents_body() {
        let style = OutputStyle::plain();
        let message = Message::new("Got it. I've added this task:")
            .with_body_line("[T][ ] buy milk")
            .with_suffix("Now you have 1 tasks in the list.");

        assert_eq!(
            style.message(&message),
            "Got it. I've added this task:\n  [T][ ] buy milk\nNow you have 1 tasks in the list."
        );
    }

    #[test]
    fn test_message_without_body_is_a_single_line() {
        let style = OutputStyle::plain();
        let message = Message::new("Bye. Hope to see you again soon!");
        assert_eq!(style.message(&message), "Bye. Hope to see you again soon!");
    }

    #[test]
    fn test_error_rendering() {
        let style = OutputStyle::plain();
        assert_eq!(style.error("boom"), "✗ boom");
    }
}
