//! Steam store access: title search and requirement fetch.
//!
//! # Modules
//!
//! - [`client`] - Blocking HTTP client for the store
//! - [`search`] - Search result page scraping
//! - [`appdetails`] - `appdetails` API response handling

pub mod appdetails;
pub mod client;
pub mod search;

pub use appdetails::RawRequirements;
pub use client::SteamClient;
pub use search::GameListing;

use crate::error::Result;

/// A source of games and their requirement markup.
///
/// This trait allows substituting the store in tests.
pub trait GameStore {
    /// Search for games by title. An empty list means nothing matched.
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<GameListing>>;

    /// Fetch raw requirement markup for a game.
    ///
    /// Never fails: any network or decoding problem yields absent tiers.
    fn fetch_requirements(&self, app_id: u32) -> RawRequirements;
}
