//! Compatibility comparison between a hardware profile and one requirement
//! block.
//!
//! Four dimensions (RAM, VRAM, CPU, GPU) are extracted independently from
//! the block's text. Each matched dimension yields a ratio of user
//! capability to required capability and contributes up to 25 points; a
//! ratio below 1 is a shortfall. Dimensions the text doesn't mention
//! contribute nothing and never count as a shortfall.
//!
//! # Example
//!
//! ```
//! use pixelbuddy::compare::compare;
//! use pixelbuddy::hardware::HardwareProfile;
//! use pixelbuddy::requirements::{Category, RequirementBlock};
//! use pixelbuddy::scoring::ScoreTable;
//!
//! let user = HardwareProfile { ram_gb: 4.0, ..Default::default() };
//! let mut block = RequirementBlock::new();
//! block.set(Category::Memory, "8 GB RAM");
//!
//! let result = compare(&user, Some(&block), ScoreTable::builtin());
//! assert!(!result.can_meet);
//! assert_eq!(result.score, 12.5);
//! assert_eq!(result.notes, vec!["RAM too low: 4 GB < 8 GB"]);
//! ```

pub mod patterns;

use serde::Serialize;
use tracing::debug;

use crate::hardware::{format_amount, HardwareProfile};
use crate::requirements::RequirementBlock;
use crate::scoring::ScoreTable;

/// Points a single fully satisfied dimension contributes.
pub const DIMENSION_WEIGHT: f64 = 25.0;

/// Highest possible comparison score.
pub const MAX_SCORE: f64 = 100.0;

/// An independently extracted requirement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    #[serde(rename = "RAM")]
    Ram,
    #[serde(rename = "VRAM")]
    Vram,
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
}

impl Dimension {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ram => "RAM",
            Self::Vram => "VRAM",
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
        }
    }
}

/// Outcome for one matched dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionCheck {
    pub dimension: Dimension,
    /// The user's value, as displayed.
    pub measured: String,
    /// The required value, as displayed.
    pub required: String,
    /// User capability divided by required capability.
    pub ratio: f64,
}

impl DimensionCheck {
    /// Whether the user meets this requirement.
    pub fn meets(&self) -> bool {
        self.ratio >= 1.0
    }

    /// Score contribution, capped at [`DIMENSION_WEIGHT`].
    pub fn contribution(&self) -> f64 {
        self.ratio.min(1.0) * DIMENSION_WEIGHT
    }

    /// Shortfall note shown when the requirement is not met.
    fn shortfall_note(&self) -> String {
        match self.dimension {
            Dimension::Ram => format!("RAM too low: {} GB < {} GB", self.measured, self.required),
            Dimension::Vram => {
                format!("VRAM too low: {} MB < {} MB", self.measured, self.required)
            }
            Dimension::Cpu => format!(
                "CPU may be insufficient: {} < {}",
                self.measured, self.required
            ),
            Dimension::Gpu => format!(
                "GPU may be insufficient: {} < {}",
                self.measured, self.required
            ),
        }
    }
}

/// Result of comparing a profile against one requirement block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// False when any matched dimension falls short.
    pub can_meet: bool,
    /// Shortfall notes in RAM, VRAM, CPU, GPU order.
    pub notes: Vec<String>,
    /// Aggregate score in `[0, 100]`.
    pub score: f64,
    /// Every matched dimension, met or not.
    pub checks: Vec<DimensionCheck>,
}

impl ComparisonResult {
    /// Result for a block that could not be evaluated.
    pub fn unavailable() -> Self {
        Self {
            can_meet: false,
            notes: Vec::new(),
            score: 0.0,
            checks: Vec::new(),
        }
    }

    fn from_checks(checks: Vec<DimensionCheck>) -> Self {
        // Folding from +0.0 keeps an empty sum from being -0.0.
        let score = checks
            .iter()
            .fold(0.0, |acc, c| acc + c.contribution());
        let notes = checks
            .iter()
            .filter(|c| !c.meets())
            .map(DimensionCheck::shortfall_note)
            .collect();

        Self {
            can_meet: checks.iter().all(DimensionCheck::meets),
            notes,
            score: score.clamp(0.0, MAX_SCORE),
            checks,
        }
    }
}

/// Compare a hardware profile against a requirement block.
///
/// An absent block cannot be evaluated and is treated as failing with a
/// zero score.
pub fn compare(
    user: &HardwareProfile,
    req: Option<&RequirementBlock>,
    table: &ScoreTable,
) -> ComparisonResult {
    let Some(req) = req else {
        return ComparisonResult::unavailable();
    };

    let text = req.joined().to_lowercase();
    let checks: Vec<DimensionCheck> = [
        check_ram(user, &text),
        check_vram(user, &text),
        check_cpu(user, &text, table),
        check_gpu(user, &text, table),
    ]
    .into_iter()
    .flatten()
    .collect();

    let result = ComparisonResult::from_checks(checks);
    debug!(
        "Compared against requirements: score={} can_meet={} ({} dimensions matched)",
        result.score,
        result.can_meet,
        result.checks.len()
    );
    result
}

fn check_ram(user: &HardwareProfile, text: &str) -> Option<DimensionCheck> {
    let required = patterns::required_ram_gb(text)?;
    Some(DimensionCheck {
        dimension: Dimension::Ram,
        measured: format_amount(user.ram_gb),
        required: required.to_string(),
        ratio: user.ram_gb / required as f64,
    })
}

fn check_vram(user: &HardwareProfile, text: &str) -> Option<DimensionCheck> {
    let required = patterns::required_vram_gb(text)?;
    Some(DimensionCheck {
        dimension: Dimension::Vram,
        measured: format_amount(user.vram_mb),
        required: required.saturating_mul(1024).to_string(),
        ratio: user.vram_mb / required as f64 / 1024.0,
    })
}

fn check_cpu(user: &HardwareProfile, text: &str, table: &ScoreTable) -> Option<DimensionCheck> {
    let required = patterns::required_cpu(text)?;
    let ratio = f64::from(table.score_cpu(&user.cpu)) / f64::from(table.score_cpu(required));
    Some(DimensionCheck {
        dimension: Dimension::Cpu,
        measured: user.cpu.clone(),
        required: required.to_string(),
        ratio,
    })
}

fn check_gpu(user: &HardwareProfile, text: &str, table: &ScoreTable) -> Option<DimensionCheck> {
    let required = patterns::required_gpu(text)?;
    let ratio = f64::from(table.score_gpu(&user.gpu)) / f64::from(table.score_gpu(required));
    Some(DimensionCheck {
        dimension: Dimension::Gpu,
        measured: user.gpu.clone(),
        required: required.to_string(),
        ratio,
    })
}
