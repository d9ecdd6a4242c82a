//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::PixelBuddyTheme;
use super::SpinnerHandle;

/// A progress spinner for network calls.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style("{spinner:.cyan} {msg}"));
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn finish_with(&mut self, line: String) {
        self.bar.set_style(spinner_style("{msg}"));
        self.bar.finish_with_message(line);
    }
}

fn spinner_style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = PixelBuddyTheme::new().format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = PixelBuddyTheme::new().format_error(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("Fetching");
        spinner.finish_success("Fetched");
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn hidden_spinner_finishes_with_error() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_error("Failed");
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn visible_spinner_sets_message() {
        let mut spinner = ProgressSpinner::new("Searching");
        spinner.set_message("Still searching");
        assert_eq!(spinner.bar.message(), "Still searching");
        spinner.finish_success("Found");
    }
}
