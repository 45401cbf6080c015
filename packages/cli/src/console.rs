//! Console abstraction for the menu.
//!
//! The menu core interacts only through the `Console` trait, allowing
//! different hosts (terminal, scripted test console) to provide their
//! own implementations.

/// Error type for console I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(String),
}

/// One read from the user: a line, or a control signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A line of input (without the trailing newline).
    Line(String),
    /// Ctrl+C - abandon the current prompt, keep the menu running.
    Interrupt,
    /// Ctrl+D - leave the menu.
    Eof,
}

/// Host interface for menu I/O.
pub trait Console {
    /// Block for one line of input, showing `prompt` first.
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent, ConsoleError>;

    /// Write a line of normal output.
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Write an error message; hosts may style it.
    fn write_error(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write_line(text)
    }
}

#[cfg(test)]
pub mod test_console {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted console: pops canned events, records everything written.
    pub struct ScriptedConsole {
        pub events: VecDeque<LineEvent>,
        pub output: Vec<String>,
        pub errors: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn with_lines(lines: &[&str]) -> Self {
            Self {
                events: lines
                    .iter()
                    .map(|l| LineEvent::Line(l.to_string()))
                    .collect(),
                output: Vec::new(),
                errors: Vec::new(),
            }
        }

        pub fn push_event(mut self, event: LineEvent) -> Self {
            self.events.push_back(event);
            self
        }

        pub fn output_text(&self) -> String {
            self.output.join("\n")
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, _prompt: &str) -> Result<LineEvent, ConsoleError> {
            // A drained script behaves like the user hanging up.
            Ok(self.events.pop_front().unwrap_or(LineEvent::Eof))
        }

        fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
            self.output.push(text.to_string());
            Ok(())
        }

        fn write_error(&mut self, text: &str) -> Result<(), ConsoleError> {
            self.errors.push(text.to_string());
            Ok(())
        }
    }
}
