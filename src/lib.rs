//! PixelBuddy - Check whether your PC can run a Steam game.
//!
//! PixelBuddy probes the local hardware, looks a game up on the Steam store,
//! parses its published system requirements and estimates how well the
//! game will run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compare`] - Hardware vs. requirement comparison
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`estimate`] - Performance tier and FPS estimation
//! - [`hardware`] - Hardware profile and system probing
//! - [`pipeline`] - End-to-end assessment for one game
//! - [`requirements`] - Requirement markup parsing
//! - [`scoring`] - CPU and GPU capability scores
//! - [`shell`] - External command execution
//! - [`steam`] - Steam store search and requirement lookup
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use pixelbuddy::hardware::HardwareProfile;
//! use pixelbuddy::pipeline::{assess, Assessment};
//! use pixelbuddy::scoring::ScoreTable;
//! use pixelbuddy::steam::RawRequirements;
//!
//! let user = HardwareProfile {
//!     cpu: "AMD Ryzen 7 5800X".to_string(),
//!     gpu: "NVIDIA GeForce RTX 3070".to_string(),
//!     ram_gb: 32.0,
//!     vram_mb: 8192.0,
//!     ..Default::default()
//! };
//! let raw = RawRequirements {
//!     minimum: Some("<ul><li>Memory: 8 GB RAM</li></ul>".to_string()),
//!     recommended: None,
//! };
//!
//! let Assessment::Available(report) = assess(&user, &raw, ScoreTable::builtin()) else {
//!     panic!("requirements were published");
//! };
//! assert!(report.can_run());
//! assert_eq!(report.score, 25);
//! ```
//!
//! For the HTTP-backed flow, see the integration tests.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod estimate;
pub mod hardware;
pub mod pipeline;
pub mod requirements;
pub mod scoring;
pub mod shell;
pub mod steam;
pub mod ui;

pub use error::{PixelBuddyError, Result};
