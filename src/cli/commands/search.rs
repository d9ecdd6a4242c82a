//! The `search` command: list Steam titles matching a query.

use crate::cli::args::{join_query, SearchArgs};
use crate::config::PixelBuddyConfig;
use crate::error::Result;
use crate::steam::GameStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::results_table;

/// Message shown when a search matches nothing.
pub const NO_RESULTS: &str = "No Steam results found.";

/// The search command implementation.
pub struct SearchCommand<'a> {
    store: &'a dyn GameStore,
    config: &'a PixelBuddyConfig,
    args: SearchArgs,
}

impl<'a> SearchCommand<'a> {
    /// Create a new search command.
    pub fn new(store: &'a dyn GameStore, config: &'a PixelBuddyConfig, args: SearchArgs) -> Self {
        Self {
            store,
            config,
            args,
        }
    }
}

impl Command for SearchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let query = join_query(&self.args.query);
        let max = self.args.max.unwrap_or(self.config.store.max_results);

        let mut spinner = ui.start_spinner(&format!("Searching Steam for '{}'...", query));
        let listings = match self.store.search(&query, max) {
            Ok(listings) => {
                spinner.finish_success(&format!("Found {} result(s)", listings.len()));
                listings
            }
            Err(e) => {
                spinner.finish_error("Search failed");
                return Err(e);
            }
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&listings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize results: {}", e))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if listings.is_empty() {
            ui.warning(NO_RESULTS);
            return Ok(CommandResult::success());
        }

        ui.data(&results_table(&listings).render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixelBuddyError;
    use crate::steam::{GameListing, RawRequirements};
    use crate::ui::MockUI;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeStore {
        listings: Vec<GameListing>,
        fail: bool,
        queries: RefCell<Vec<(String, usize)>>,
    }

    impl GameStore for FakeStore {
        fn search(&self, query: &str, max_results: usize) -> Result<Vec<GameListing>> {
            self.queries
                .borrow_mut()
                .push((query.to_string(), max_results));
            if self.fail {
                return Err(PixelBuddyError::SearchFailed {
                    query: query.to_string(),
                    message: "HTTP 503".to_string(),
                });
            }
            Ok(self.listings.iter().take(max_results).cloned().collect())
        }

        fn fetch_requirements(&self, _app_id: u32) -> RawRequirements {
            RawRequirements::default()
        }
    }

    fn listing(name: &str, app_id: u32) -> GameListing {
        GameListing {
            name: name.to_string(),
            app_id,
            url: format!("https://store.steampowered.com/app/{}/", app_id),
        }
    }

    fn args(words: &[&str]) -> SearchArgs {
        SearchArgs {
            query: words.iter().map(|w| w.to_string()).collect(),
            max: None,
            json: false,
        }
    }

    #[test]
    fn lists_results() {
        let store = FakeStore {
            listings: vec![listing("Portal 2", 620), listing("Portal", 400)],
            ..Default::default()
        };
        let config = PixelBuddyConfig::default();
        let mut ui = MockUI::new();

        let result = SearchCommand::new(&store, &config, args(&["portal"]))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_data("Portal 2"));
        assert!(ui.has_data("620"));
        assert_eq!(store.queries.borrow()[0], ("portal".to_string(), 5));
    }

    #[test]
    fn max_flag_overrides_config() {
        let store = FakeStore::default();
        let config = PixelBuddyConfig::default();
        let mut search = args(&["half", "life"]);
        search.max = Some(2);
        let mut ui = MockUI::new();

        SearchCommand::new(&store, &config, search)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(store.queries.borrow()[0], ("half life".to_string(), 2));
    }

    #[test]
    fn no_results_warns_and_succeeds() {
        let store = FakeStore::default();
        let config = PixelBuddyConfig::default();
        let mut ui = MockUI::new();

        let result = SearchCommand::new(&store, &config, args(&["zzzz"]))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning(NO_RESULTS));
        assert!(ui.outputs().is_empty());
    }

    #[test]
    fn json_output_is_an_array() {
        let store = FakeStore {
            listings: vec![listing("Portal 2", 620)],
            ..Default::default()
        };
        let config = PixelBuddyConfig::default();
        let mut search = args(&["portal"]);
        search.json = true;
        let mut ui = MockUI::new();

        SearchCommand::new(&store, &config, search)
            .execute(&mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        assert_eq!(json[0]["app_id"], 620);
        assert_eq!(json[0]["name"], "Portal 2");
    }

    #[test]
    fn search_failure_propagates() {
        let store = FakeStore {
            fail: true,
            ..Default::default()
        };
        let config = PixelBuddyConfig::default();
        let mut ui = MockUI::new();

        let err = SearchCommand::new(&store, &config, args(&["portal"]))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, PixelBuddyError::SearchFailed { .. }));
    }
}
