//! Local hardware profile and detection.
//!
//! # Modules
//!
//! - [`profile`] - The [`HardwareProfile`] snapshot and manual overrides
//! - [`probe`] - Detection of the running system

pub mod probe;
pub mod profile;

pub use probe::{HardwareProbe, SystemProbe};
pub use profile::{format_amount, round2, HardwareOverrides, HardwareProfile, UNKNOWN};
