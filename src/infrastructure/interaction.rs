//! User-facing side effects: alerts, confirmations and viewport scrolling.
//!
//! [`Interaction`] is the port the controller uses for everything that needs
//! the user's attention. `confirm` is blocking: it returns only once the user
//! has answered.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Port for blocking user notifications.
pub trait Interaction {
    /// Shows a message the user must acknowledge.
    fn alert(&mut self, message: &str);

    /// Asks a yes/no question; `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;

    /// Scrolls the content viewport back to the top.
    fn scroll_to_top(&mut self);
}

/// Terminal implementation over arbitrary reader and writer handles.
#[derive(Debug)]
pub struct TerminalInteraction<R, W> {
    input: R,
    output: W,
}

impl TerminalInteraction<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Interaction over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The trailing newline is stripped.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing the prompt or reading the line.
    pub fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the output handle.
    pub fn print(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Consumes the interaction, returning the output handle.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "! {message}") {
            tracing::warn!(error = %e, "failed to write alert");
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        if let Err(e) = write!(self.output, "{message} [y/N] ").and_then(|()| self.output.flush()) {
            tracing::warn!(error = %e, "failed to write confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }

    fn scroll_to_top(&mut self) {
        tracing::trace!("scroll to top");
    }
}

/// Records every interaction and answers confirmations from a script.
///
/// Unscripted confirmations are declined.
#[derive(Debug, Clone, Default)]
pub struct RecordingInteraction {
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
    pub scrolls: usize,
    answers: VecDeque<bool>,
}

impl RecordingInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next confirmation.
    pub fn answer_next(&mut self, proceed: bool) {
        self.answers.push_back(proceed);
    }
}

impl Interaction for RecordingInteraction {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_confirm_accepts_yes() {
        let mut term = TerminalInteraction::new("yes\n".as_bytes(), Vec::new());
        assert!(term.confirm("Are you sure you want to unsubscribe?"));

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output, "Are you sure you want to unsubscribe? [y/N] ");
    }

    #[test]
    fn terminal_confirm_defaults_to_no() {
        let mut term = TerminalInteraction::new("\n".as_bytes(), Vec::new());
        assert!(!term.confirm("Proceed?"));

        let mut eof = TerminalInteraction::new("".as_bytes(), Vec::new());
        assert!(!eof.confirm("Proceed?"));
    }

    #[test]
    fn read_line_strips_newline_and_reports_eof() {
        let mut term = TerminalInteraction::new("next\r\n".as_bytes(), Vec::new());
        assert_eq!(term.read_line("> ").unwrap().as_deref(), Some("next"));
        assert_eq!(term.read_line("> ").unwrap(), None);
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn recording_declines_unscripted_confirmations() {
        let mut rec = RecordingInteraction::new();
        rec.answer_next(true);
        assert!(rec.confirm("first"));
        assert!(!rec.confirm("second"));
        assert_eq!(rec.confirmations, vec!["first", "second"]);
    }
}
