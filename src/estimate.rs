//! Graphics tier and FPS estimation from an aggregate score.

use serde::Serialize;

/// Coarse graphics quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceTier {
    CannotRun,
    Low,
    Medium,
    HighUltra,
}

impl PerformanceTier {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::CannotRun => "Cannot run",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::HighUltra => "High/Ultra",
        }
    }

    /// Label with an icon, for terminal output.
    pub fn badge(self) -> &'static str {
        match self {
            Self::CannotRun => "❌ Cannot Run",
            Self::Low => "🐢 Low",
            Self::Medium => "⚡ Medium",
            Self::HighUltra => "🚀 High/Ultra",
        }
    }
}

/// Estimated tier and indicative frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub tier: PerformanceTier,
    pub fps: u32,
}

/// FPS that fills the gauge completely.
pub const FPS_GAUGE_MAX: u32 = 120;

/// Map a 0-100 score to a tier and FPS.
///
/// Scores above 100 should not occur; they map to `Low`/40.
///
/// ```
/// use pixelbuddy::estimate::{estimate, PerformanceTier};
///
/// assert_eq!(estimate(25).tier, PerformanceTier::CannotRun);
/// assert_eq!(estimate(26).fps, 40);
/// assert_eq!(estimate(76).tier, PerformanceTier::HighUltra);
/// ```
pub fn estimate(score: u32) -> Estimate {
    let (tier, fps) = match score {
        0..=25 => (PerformanceTier::CannotRun, 0),
        26..=50 => (PerformanceTier::Low, 40),
        51..=75 => (PerformanceTier::Medium, 60),
        76..=100 => (PerformanceTier::HighUltra, 90),
        _ => (PerformanceTier::Low, 40),
    };
    Estimate { tier, fps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        let cases = [
            (0, PerformanceTier::CannotRun, 0),
            (25, PerformanceTier::CannotRun, 0),
            (26, PerformanceTier::Low, 40),
            (50, PerformanceTier::Low, 40),
            (51, PerformanceTier::Medium, 60),
            (75, PerformanceTier::Medium, 60),
            (76, PerformanceTier::HighUltra, 90),
            (100, PerformanceTier::HighUltra, 90),
        ];
        for (score, tier, fps) in cases {
            assert_eq!(estimate(score), Estimate { tier, fps }, "score {score}");
        }
    }

    #[test]
    fn whole_domain_is_consistent() {
        for score in 0..=100 {
            let e = estimate(score);
            let expected = match score {
                0..=25 => 0,
                26..=50 => 40,
                51..=75 => 60,
                _ => 90,
            };
            assert_eq!(e.fps, expected, "score {score}");
        }
    }

    #[test]
    fn out_of_range_falls_back_to_low() {
        assert_eq!(
            estimate(101),
            Estimate {
                tier: PerformanceTier::Low,
                fps: 40
            }
        );
        assert_eq!(estimate(u32::MAX).tier, PerformanceTier::Low);
    }

    #[test]
    fn badges_and_labels() {
        assert_eq!(PerformanceTier::CannotRun.label(), "Cannot run");
        assert_eq!(PerformanceTier::HighUltra.badge(), "🚀 High/Ultra");
    }
}
