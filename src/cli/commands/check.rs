//! The `check` command: search, pick a game and assess compatibility.

use serde::Serialize;
use tracing::debug;

use crate::cli::args::{join_query, CheckArgs};
use crate::config::PixelBuddyConfig;
use crate::error::{PixelBuddyError, Result};
use crate::hardware::{HardwareProbe, HardwareProfile};
use crate::pipeline::{assess, Assessment};
use crate::scoring::ScoreTable;
use crate::steam::{GameListing, GameStore};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::{results_table, show_report};
use super::search::NO_RESULTS;
use super::specs::effective_profile;

/// Message shown when the store has no requirement data.
pub const NOT_AVAILABLE: &str = "System requirements not available.";

/// Prompt key for choosing among search results.
pub const GAME_PROMPT_KEY: &str = "game";

/// Machine-readable result of a check.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    game: Option<&'a GameListing>,
    app_id: Option<u32>,
    hardware: Option<&'a HardwareProfile>,
    assessment: Option<&'a Assessment>,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    store: &'a dyn GameStore,
    probe: &'a dyn HardwareProbe,
    config: &'a PixelBuddyConfig,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        store: &'a dyn GameStore,
        probe: &'a dyn HardwareProbe,
        config: &'a PixelBuddyConfig,
        args: CheckArgs,
    ) -> Self {
        Self {
            store,
            probe,
            config,
            args,
        }
    }

    fn search(&self, ui: &mut dyn UserInterface) -> Result<Vec<GameListing>> {
        let query = join_query(&self.args.query);
        let max = self.args.max.unwrap_or(self.config.store.max_results);

        let mut spinner = ui.start_spinner(&format!("Searching Steam for '{}'...", query));
        match self.store.search(&query, max) {
            Ok(listings) => {
                spinner.finish_success(&format!("Found {} result(s)", listings.len()));
                Ok(listings)
            }
            Err(e) => {
                spinner.finish_error("Search failed");
                Err(e)
            }
        }
    }

    /// Index of the chosen listing.
    ///
    /// `--pick` wins; otherwise the UI is asked when there is a real choice.
    /// JSON output never prompts and takes the first result.
    fn choose(&self, ui: &mut dyn UserInterface, listings: &[GameListing]) -> Result<usize> {
        let available = listings.len();

        if let Some(pick) = self.args.pick {
            if pick == 0 || pick > available {
                return Err(PixelBuddyError::InvalidSelection {
                    choice: pick,
                    available,
                });
            }
            return Ok(pick - 1);
        }

        if available < 2 || self.args.json {
            return Ok(0);
        }

        let options = listings
            .iter()
            .map(|game| format!("{} ({})", game.name, game.app_id))
            .collect();
        let prompt = Prompt::select(GAME_PROMPT_KEY, "Which game do you want to check?", options);
        let index = ui.prompt(&prompt)?;
        if index >= available {
            return Err(PixelBuddyError::InvalidSelection {
                choice: index + 1,
                available,
            });
        }
        Ok(index)
    }

    fn print_json(&self, ui: &mut dyn UserInterface, output: &CheckOutput<'_>) -> Result<()> {
        let json = serde_json::to_string_pretty(output)
            .map_err(|e| anyhow::anyhow!("Failed to serialize check result: {}", e))?;
        ui.data(&json);
        Ok(())
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (game, app_id) = match self.args.app_id {
            Some(app_id) => (None, app_id),
            None => {
                let listings = self.search(ui)?;
                if listings.is_empty() {
                    if self.args.json {
                        self.print_json(
                            ui,
                            &CheckOutput {
                                game: None,
                                app_id: None,
                                hardware: None,
                                assessment: None,
                            },
                        )?;
                    } else {
                        ui.warning(NO_RESULTS);
                    }
                    return Ok(CommandResult::success());
                }

                if !self.args.json {
                    ui.data(&results_table(&listings).render());
                }

                let index = self.choose(ui, &listings)?;
                let game = listings[index].clone();
                let app_id = game.app_id;
                (Some(game), app_id)
            }
        };

        let title = game
            .as_ref()
            .map(|g| g.name.clone())
            .unwrap_or_else(|| format!("Steam app {}", app_id));
        debug!("Checking {} ({})", title, app_id);
        ui.show_header(&title);

        let mut spinner = ui.start_spinner("Fetching system requirements...");
        let raw = self.store.fetch_requirements(app_id);
        if raw.is_empty() {
            spinner.finish_error("No requirements published");
        } else {
            spinner.finish_success("Fetched system requirements");
        }

        let profile = effective_profile(
            self.probe,
            &self.config.hardware,
            &self.args.hardware.overrides(),
        );
        debug!("Assessing against {:?}", profile);
        let assessment = assess(&profile, &raw, ScoreTable::builtin());

        if self.args.json {
            self.print_json(
                ui,
                &CheckOutput {
                    game: game.as_ref(),
                    app_id: Some(app_id),
                    hardware: Some(&profile),
                    assessment: Some(&assessment),
                },
            )?;
            return Ok(CommandResult::success());
        }

        match &assessment {
            Assessment::Unavailable => ui.warning(NOT_AVAILABLE),
            Assessment::Available(report) => show_report(ui, report),
        }

        Ok(CommandResult::success())
    }
}
