//! Shell completions generation.
//!
//! The `pixelbuddy completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for a shell.
pub fn completion_script(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pixelbuddy", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.data(completion_script(self.args.shell).trim_end());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn generates_bash_completions() {
        let output = completion_script(Shell::Bash);
        assert!(output.contains("pixelbuddy"));
        assert!(output.contains("complete"));
        assert!(output.contains("check"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(completion_script(Shell::Zsh).contains("pixelbuddy"));
    }

    #[test]
    fn command_writes_script() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Fish });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_data("pixelbuddy"));
    }
}
