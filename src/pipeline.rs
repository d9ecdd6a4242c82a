//! End-to-end compatibility assessment for one game.
//!
//! Parses both requirement tiers, compares the user's hardware against
//! each, and estimates performance from the averaged score.

use serde::Serialize;
use tracing::debug;

use crate::compare::{compare, ComparisonResult};
use crate::estimate::{estimate, Estimate};
use crate::hardware::HardwareProfile;
use crate::requirements::{parse, RequirementBlock};
use crate::scoring::ScoreTable;
use crate::steam::RawRequirements;

/// Compatibility verdict for one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Parsed minimum requirements, if the store had any.
    pub minimum: Option<RequirementBlock>,
    /// Parsed recommended requirements, if the store had any.
    pub recommended: Option<RequirementBlock>,
    /// Comparison against the minimum tier (or recommended, if no minimum).
    pub minimum_result: ComparisonResult,
    /// Comparison against the recommended tier (or minimum, if none).
    pub recommended_result: ComparisonResult,
    /// Mean of both comparison scores, rounded down.
    pub score: u32,
    /// Tier and FPS for [`Report::score`].
    pub estimate: Estimate,
}

impl Report {
    /// Whether the minimum requirements are met.
    pub fn can_run(&self) -> bool {
        self.minimum_result.can_meet
    }

    /// Shortfalls against the minimum requirements.
    pub fn notes(&self) -> &[String] {
        &self.minimum_result.notes
    }
}

/// Outcome of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    /// The store provided no requirement data; nothing was compared.
    Unavailable,
    /// Requirements were compared.
    Available(Box<Report>),
}

/// Assess a hardware profile against a game's raw requirements.
///
/// A missing tier is substituted by the other one, so a game that only
/// publishes minimum requirements is compared against them twice.
pub fn assess(user: &HardwareProfile, raw: &RawRequirements, table: &ScoreTable) -> Assessment {
    let minimum = parse(raw.minimum.as_deref());
    let recommended = parse(raw.recommended.as_deref());

    if minimum.is_none() && recommended.is_none() {
        debug!("No requirement data to compare against");
        return Assessment::Unavailable;
    }

    let minimum_result = compare(user, minimum.as_ref().or(recommended.as_ref()), table);
    let recommended_result = compare(user, recommended.as_ref().or(minimum.as_ref()), table);

    let score = aggregate_score(minimum_result.score, recommended_result.score);
    let estimate = estimate(score);
    debug!(
        "Aggregate score {} -> {:?} at ~{} FPS",
        score, estimate.tier, estimate.fps
    );

    Assessment::Available(Box::new(Report {
        minimum,
        recommended,
        minimum_result,
        recommended_result,
        score,
        estimate,
    }))
}

/// Mean of two 0-100 scores, rounded down.
fn aggregate_score(minimum: f64, recommended: f64) -> u32 {
    // Both inputs are clamped to [0, 100], so the cast cannot truncate.
    ((minimum + recommended) / 2.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::PerformanceTier;

    fn gamer() -> HardwareProfile {
        HardwareProfile {
            cpu: "Intel Core i7-9700K".to_string(),
            gpu: "NVIDIA GeForce RTX 3070".to_string(),
            ram_gb: 16.0,
            vram_mb: 8192.0,
            ..Default::default()
        }
    }

    fn raw(minimum: Option<&str>, recommended: Option<&str>) -> RawRequirements {
        RawRequirements {
            minimum: minimum.map(str::to_string),
            recommended: recommended.map(str::to_string),
        }
    }

    const MINIMUM: &str = "<ul><li>Processor: Intel Core i5-4460</li>\
        <li>Memory: 8 GB RAM</li><li>Graphics: NVIDIA GTX 1060, 3 GB VRAM</li></ul>";
    const RECOMMENDED: &str = "<ul><li>Processor: Intel Core i9-9900K</li>\
        <li>Memory: 32 GB RAM</li><li>Graphics: NVIDIA RTX 3080, 10 GB VRAM</li></ul>";

    #[test]
    fn both_absent_is_unavailable() {
        let result = assess(&gamer(), &raw(None, None), ScoreTable::builtin());
        assert_eq!(result, Assessment::Unavailable);
    }

    #[test]
    fn blank_markup_is_unavailable() {
        let result = assess(&gamer(), &raw(Some(" "), Some("")), ScoreTable::builtin());
        assert_eq!(result, Assessment::Unavailable);
    }

    #[test]
    fn averages_both_tiers() {
        let Assessment::Available(report) =
            assess(&gamer(), &raw(Some(MINIMUM), Some(RECOMMENDED)), ScoreTable::builtin())
        else {
            panic!("expected a report");
        };

        assert!(report.can_run());
        assert!(report.notes().is_empty());
        assert_eq!(report.minimum_result.score, 100.0);
        assert!(!report.recommended_result.can_meet);

        // RAM 16/32, VRAM 8/10, CPU 70/90, GPU 90/95, each times 25.
        let rec = 12.5 + 20.0 + 70.0 / 90.0 * 25.0 + 90.0 / 95.0 * 25.0;
        assert!((report.recommended_result.score - rec).abs() < 1e-9);
        assert_eq!(report.score, ((100.0 + rec) / 2.0).floor() as u32);
        assert_eq!(report.estimate.tier, PerformanceTier::HighUltra);
        assert_eq!(report.estimate.fps, 90);
    }

    #[test]
    fn missing_recommended_reuses_minimum() {
        let Assessment::Available(report) =
            assess(&gamer(), &raw(Some(MINIMUM), None), ScoreTable::builtin())
        else {
            panic!("expected a report");
        };

        assert!(report.recommended.is_none());
        assert_eq!(report.minimum_result, report.recommended_result);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn missing_minimum_reuses_recommended() {
        let Assessment::Available(report) =
            assess(&gamer(), &raw(None, Some(RECOMMENDED)), ScoreTable::builtin())
        else {
            panic!("expected a report");
        };

        assert!(report.minimum.is_none());
        assert!(!report.can_run());
        assert_eq!(report.notes().len(), 4);
    }

    #[test]
    fn weak_machine_cannot_run() {
        let potato = HardwareProfile {
            cpu: "Intel Celeron N4000".to_string(),
            gpu: "Intel UHD Graphics 600".to_string(),
            ram_gb: 1.0,
            vram_mb: 0.0,
            ..Default::default()
        };
        let Assessment::Available(report) =
            assess(&potato, &raw(Some(MINIMUM), Some(RECOMMENDED)), ScoreTable::builtin())
        else {
            panic!("expected a report");
        };

        assert!(!report.can_run());
        assert_eq!(report.estimate.tier, PerformanceTier::CannotRun);
        assert_eq!(report.estimate.fps, 0);
    }

    #[test]
    fn aggregate_rounds_down() {
        assert_eq!(aggregate_score(100.0, 51.0), 75);
        assert_eq!(aggregate_score(0.0, 0.0), 0);
        assert_eq!(aggregate_score(100.0, 100.0), 100);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(Assessment::Unavailable).unwrap();
        assert_eq!(json["status"], "unavailable");
    }
}
