//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use pixelbuddy::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("game", 2);
//!
//! let prompt = Prompt::select("game", "Pick", vec!["a".into(), "b".into(), "c".into()]);
//! assert_eq!(ui.prompt(&prompt).unwrap(), 2);
//!
//! ui.warning("No Steam results found.");
//! assert!(ui.has_warning("No Steam results"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    data: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, usize>,
    prompts_shown: Vec<Prompt>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the index returned for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, index: usize) {
        self.prompt_responses.insert(key.to_string(), index);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured primary output.
    pub fn outputs(&self) -> &[String] {
        &self.data
    }

    /// All primary output joined by newlines.
    pub fn data_text(&self) -> String {
        self.data.join("\n")
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown.
    pub fn prompts_shown(&self) -> &[Prompt] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if any primary output contains `text`.
    pub fn has_data(&self, text: &str) -> bool {
        self.data.iter().any(|d| d.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<usize> {
        self.prompts_shown.push(prompt.clone());
        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that records its final state.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finished: Option<std::result::Result<String, String>>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages set while running.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(msg)` after success, `Err(msg)` after failure, `None` while running.
    pub fn finished(&self) -> Option<&std::result::Result<String, String>> {
        self.finished.as_ref()
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finished = Some(Ok(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finished = Some(Err(msg.to_string()));
    }
}
