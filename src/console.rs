// Console layer: how the menu loop talks to the operator.
//
// `TermConsole` uses `dialoguer` prompts when a person is at a terminal.
// `LineConsole` reads plain lines from any `BufRead` and is used for piped
// input and in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use dialoguer::{Input, Select};

pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    /// Returns `None` once input has ended.
    fn line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn show(&mut self, message: &str) -> Result<()>;

    /// Shows a warning, set off by a blank line.
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Shows the menu and returns the raw choice text, where entry `i` of
    /// `items` is choice `i + 1`.
    fn menu(&mut self, title: &str, items: &[&str]) -> Result<Option<String>>;
}

/// Keyboard-driven prompts for an interactive terminal.
#[derive(Default)]
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        TermConsole
    }
}

impl Console for TermConsole {
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        let text: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read from terminal")?;
        Ok(Some(text))
    }

    fn show(&mut self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        println!("\n{}", message.yellow());
        Ok(())
    }

    fn menu(&mut self, title: &str, items: &[&str]) -> Result<Option<String>> {
        println!();
        // Arrow keys and Enter pick an entry.
        let selection = Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact()
            .context("Failed to read menu selection")?;
        Ok(Some((selection + 1).to_string()))
    }
}

/// Line-oriented prompts over arbitrary reader/writer pairs.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }
}

impl<R> LineConsole<R, Vec<u8>> {
    /// Everything written so far, for inspection in tests.
    pub fn into_output(self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("Failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn show(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", message)?;
        Ok(())
    }

    fn menu(&mut self, title: &str, items: &[&str]) -> Result<Option<String>> {
        writeln!(self.output, "\n{}", title)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        self.line("Enter your choice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_strips_terminators() {
        let mut c = LineConsole::new(Cursor::new(b"one\r\ntwo\nthree".to_vec()), Vec::new());
        assert_eq!(c.line("a").unwrap().as_deref(), Some("one"));
        assert_eq!(c.line("b").unwrap().as_deref(), Some("two"));
        assert_eq!(c.line("c").unwrap().as_deref(), Some("three"));
        assert_eq!(c.line("d").unwrap(), None);
        assert_eq!(c.into_output(), "a: b: c: d: ");
    }

    #[test]
    fn test_menu_lists_numbered_items() {
        let mut c = LineConsole::new(Cursor::new(b"2\n".to_vec()), Vec::new());
        let choice = c.menu("--- Menu ---", &["First", "Second"]).unwrap();
        assert_eq!(choice.as_deref(), Some("2"));
        assert_eq!(
            c.into_output(),
            "\n--- Menu ---\n1. First\n2. Second\nEnter your choice: "
        );
    }

    #[test]
    fn test_warn_is_set_off_by_blank_line() {
        let mut c = LineConsole::new(Cursor::new(Vec::new()), Vec::new());
        c.show("hello").unwrap();
        c.warn("careful").unwrap();
        assert_eq!(c.into_output(), "hello\n\ncareful\n");
    }
}
