//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::hardware::HardwareOverrides;

/// PixelBuddy - Check whether your PC can run a Steam game.
#[derive(Debug, Parser)]
#[command(name = "pixelbuddy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (layered over ~/.pixelbuddy/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether the selected command prints JSON.
    pub fn wants_json(&self) -> bool {
        match &self.command {
            Some(Commands::Specs(args)) => args.json,
            Some(Commands::Search(args)) => args.json,
            Some(Commands::Check(args)) => args.json,
            Some(Commands::Completions(_)) | None => false,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show this machine's hardware (default if no command specified)
    Specs(SpecsArgs),

    /// Search the Steam store by title
    Search(SearchArgs),

    /// Check whether this machine can run a game
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Manual hardware values that replace probed ones.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HardwareArgs {
    /// CPU model to assume (e.g. "Intel Core i7-9700K")
    #[arg(long, value_name = "MODEL")]
    pub cpu: Option<String>,

    /// GPU model to assume (e.g. "RTX 3070")
    #[arg(long, value_name = "MODEL")]
    pub gpu: Option<String>,

    /// System memory to assume, in GB
    #[arg(long, value_name = "GB")]
    pub ram: Option<f64>,

    /// Graphics memory to assume, in MB
    #[arg(long, value_name = "MB")]
    pub vram: Option<f64>,
}

impl HardwareArgs {
    /// The flags as a hardware override set.
    pub fn overrides(&self) -> HardwareOverrides {
        HardwareOverrides {
            cpu: self.cpu.clone(),
            gpu: self.gpu.clone(),
            ram_gb: self.ram,
            vram_mb: self.vram,
        }
    }
}

/// Arguments for the `specs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SpecsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub hardware: HardwareArgs,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Game title to search for
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Number of results to show (overrides store.max_results)
    #[arg(short, long, value_name = "N")]
    pub max: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Game title to search for
    #[arg(num_args = 1.., required_unless_present = "app_id")]
    pub query: Vec<String>,

    /// Check this Steam app id directly, skipping the search
    #[arg(long, value_name = "ID")]
    pub app_id: Option<u32>,

    /// Pick the Nth search result (1-based) instead of prompting
    #[arg(short, long, value_name = "N", conflicts_with = "app_id")]
    pub pick: Option<usize>,

    /// Number of search results to consider (overrides store.max_results)
    #[arg(short, long, value_name = "N")]
    pub max: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub hardware: HardwareArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Join positional words into a single query.
pub fn join_query(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}
