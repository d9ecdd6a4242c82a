//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands, SpecsArgs};
use crate::config::{load_config, PixelBuddyConfig};
use crate::error::Result;
use crate::hardware::SystemProbe;
use crate::steam::SteamClient;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher, with an optional explicit config file.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Get the explicit config path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn load_config(&self) -> Result<PixelBuddyConfig> {
        let config = load_config(self.config_path())?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Configuration is loaded only for commands that
    /// need it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Specs(args)) => {
                let config = self.load_config()?;
                let probe = SystemProbe::new();
                let cmd = super::specs::SpecsCommand::new(&probe, &config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Search(args)) => {
                let config = self.load_config()?;
                let client = SteamClient::new(&config.store)?;
                let cmd = super::search::SearchCommand::new(&client, &config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let config = self.load_config()?;
                let client = SteamClient::new(&config.store)?;
                let probe = SystemProbe::new();
                let cmd =
                    super::check::CheckCommand::new(&client, &probe, &config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to specs with default args
                let config = self.load_config()?;
                let probe = SystemProbe::new();
                let cmd = super::specs::SpecsCommand::new(&probe, &config, SpecsArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
