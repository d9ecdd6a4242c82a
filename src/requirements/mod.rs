//! Requirement text parsing.
//!
//! Converts a vendor's minimum or recommended requirement block (HTML list
//! markup) into a [`RequirementBlock`] with a fixed set of categories.
//!
//! # Modules
//!
//! - [`block`] - Categories and the parsed block type
//! - [`markup`] - Text extraction from requirement markup
//! - [`parser`] - Line-to-category assignment

pub mod block;
pub mod markup;
pub mod parser;

pub use block::{Category, RequirementBlock};
pub use parser::parse;
