//! External command execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, execute_quiet, CommandResult};
pub use platform::{is_ci, os_family};
