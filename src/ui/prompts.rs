//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::{PixelBuddyError, Result};

use super::Prompt;

/// Convert dialoguer errors to PixelBuddyError.
fn map_dialoguer_err(e: dialoguer::Error) -> PixelBuddyError {
    PixelBuddyError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Show a select prompt and return the chosen index.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<usize> {
    Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&prompt.options)
        .default(default_index(prompt))
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// The prompt's default, clamped to the option range.
fn default_index(prompt: &Prompt) -> usize {
    prompt.default.min(prompt.options.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_index_is_clamped() {
        let mut prompt = Prompt::select("game", "Pick", vec!["a".into(), "b".into()]);
        prompt.default = 7;
        assert_eq!(default_index(&prompt), 1);

        prompt.options.clear();
        assert_eq!(default_index(&prompt), 0);
    }

    #[test]
    fn dialoguer_errors_become_io() {
        let err = dialoguer::Error::IO(std::io::Error::other("tty closed"));
        assert!(matches!(map_dialoguer_err(err), PixelBuddyError::Io(_)));
    }
}
