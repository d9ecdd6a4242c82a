//! Non-interactive UI for CI, pipes and headless environments.

use std::collections::HashMap;

use crate::error::{PixelBuddyError, Result};

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
///
/// `PIXELBUDDY_PROMPT_GAME=2` picks the second option of the `game` prompt.
pub const PROMPT_ENV_PREFIX: &str = "PIXELBUDDY_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `PIXELBUDDY_PROMPT_*` variables or fall back
/// to their default. Warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<usize> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let Some(value) = self.env_overrides.get(&env_key) else {
            return Ok(prompt.default);
        };

        let available = prompt.options.len();
        let choice: usize =
            value
                .trim()
                .parse()
                .map_err(|_| PixelBuddyError::ConfigValidationError {
                    message: format!("{} must be a number, got '{}'", env_key, value),
                })?;

        if choice == 0 || choice > available {
            return Err(PixelBuddyError::InvalidSelection { choice, available });
        }
        Ok(choice - 1)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> Prompt {
        Prompt::select(
            "game",
            "Pick a game",
            vec!["Portal".into(), "Portal 2".into(), "Portal RTX".into()],
        )
    }

    fn ui_with(pairs: &[(&str, &str)]) -> NonInteractiveUI {
        let overrides = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NonInteractiveUI::with_overrides(OutputMode::Normal, overrides)
    }

    #[test]
    fn is_never_interactive() {
        assert!(!NonInteractiveUI::new(OutputMode::Normal).is_interactive());
    }

    #[test]
    fn prompt_uses_default_without_override() {
        let mut ui = ui_with(&[]);
        assert_eq!(ui.prompt(&prompt()).unwrap(), 0);
    }

    #[test]
    fn prompt_reads_one_based_override() {
        let mut ui = ui_with(&[("PIXELBUDDY_PROMPT_GAME", "2")]);
        assert_eq!(ui.prompt(&prompt()).unwrap(), 1);
    }

    #[test]
    fn prompt_rejects_out_of_range_override() {
        let mut ui = ui_with(&[("PIXELBUDDY_PROMPT_GAME", "4")]);
        let err = ui.prompt(&prompt()).unwrap_err();
        assert!(matches!(
            err,
            PixelBuddyError::InvalidSelection {
                choice: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn prompt_rejects_non_numeric_override() {
        let mut ui = ui_with(&[("PIXELBUDDY_PROMPT_GAME", "portal")]);
        assert!(ui.prompt(&prompt()).is_err());
    }

    #[test]
    fn output_methods_do_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        ui.message("hidden");
        ui.success("hidden");
        ui.warning("hidden");
        ui.show_header("hidden");
        let mut spinner = ui.start_spinner("Fetching");
        spinner.set_message("Still fetching");
        spinner.finish_success("Fetched");
    }
}
