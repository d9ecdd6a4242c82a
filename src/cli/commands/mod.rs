//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands receive their
//! collaborators (the store client and hardware probe) as trait objects, so
//! tests can drive them with fakes and a mock UI.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod search;
pub mod specs;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
