//! Terminal console using Reedline.
//!
//! Line editing and a persistent history file; styled error output via
//! nu-ansi-term.

use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

use nu_ansi_term::Color;
use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus,
    Reedline, Signal,
};

use crate::console::{Console, ConsoleError, LineEvent};

/// Interactive terminal console backed by a Reedline editor.
pub struct TerminalConsole {
    line_editor: Reedline,
}

impl TerminalConsole {
    /// Create a terminal console, attaching a history file when a
    /// local data directory is available.
    pub fn new() -> io::Result<Self> {
        let mut line_editor = Reedline::create();

        if let Some(history_path) = get_history_path() {
            if let Some(parent) = history_path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(500, history_path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        Ok(Self { line_editor })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent, ConsoleError> {
        let prompt = MenuPrompt {
            text: prompt.to_string(),
        };
        match self.line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => Ok(LineEvent::Line(line)),
            Ok(Signal::CtrlC) => Ok(LineEvent::Interrupt),
            Ok(Signal::CtrlD) => Ok(LineEvent::Eof),
            Err(e) => Err(ConsoleError::Io(format!("Reedline error: {}", e))),
        }
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        println!("{}", text);
        Ok(())
    }

    fn write_error(&mut self, text: &str) -> Result<(), ConsoleError> {
        println!("{} {}", Color::Red.bold().paint("Error:"), text);
        Ok(())
    }
}

/// Plain-text prompt rendering the menu's own prompt string.
struct MenuPrompt {
    text: String,
}

impl Prompt for MenuPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

fn get_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("bidstore").join("history.txt"))
}
