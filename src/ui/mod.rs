//! Terminal output, prompts, and spinners.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments and pipes
//! - [`MockUI`] for tests
//! - [`Table`] and [`render_gauge`] for formatted output
//!
//! # Example
//!
//! ```
//! use pixelbuddy::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("System specs");
//! ui.success("Done");
//! ```

pub mod gauge;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use gauge::{fps_gauge, render_gauge, GAUGE_WIDTH};
pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PixelBuddyTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write the command's primary output (tables, JSON).
    ///
    /// Unlike status messages this is never suppressed by the output mode.
    fn data(&mut self, text: &str);

    /// Ask the user to pick one option; returns its index.
    fn prompt(&mut self, prompt: &Prompt) -> Result<usize>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Theme used to style inline output such as tier badges.
    fn theme(&self) -> PixelBuddyTheme {
        PixelBuddyTheme::plain()
    }
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A single-choice prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Key used for lookups in non-interactive and test UIs.
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Option labels, in display order.
    pub options: Vec<String>,
    /// Index chosen when the user just presses enter.
    pub default: usize,
}

impl Prompt {
    /// Create a prompt with the first option as default.
    pub fn select(key: &str, question: &str, options: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            options,
            default: 0,
        }
    }
}
