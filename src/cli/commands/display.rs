//! Shared rendering for hardware profiles, search results and reports.

use crate::compare::DimensionCheck;
use crate::hardware::HardwareProfile;
use crate::pipeline::Report;
use crate::requirements::RequirementBlock;
use crate::steam::GameListing;
use crate::ui::{fps_gauge, Table, UserInterface};

/// Two-column table of the hardware profile.
pub fn specs_table(profile: &HardwareProfile) -> Table {
    let mut table = Table::new(vec!["Spec", "Value"]);
    for (label, value) in profile.entries() {
        table.add_row(vec![label.to_string(), value]);
    }
    table
}

/// Numbered table of search results.
pub fn results_table(listings: &[GameListing]) -> Table {
    let mut table = Table::new(vec!["#", "Title", "App ID"]);
    for (i, game) in listings.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            game.name.clone(),
            game.app_id.to_string(),
        ]);
    }
    table
}

/// Category/requirement table with only the filled categories.
pub fn requirements_table(block: &RequirementBlock) -> Table {
    let mut table = Table::new(vec!["Category", "Requirement"]);
    for (category, value) in block.filled() {
        table.add_row(vec![category.label(), value]);
    }
    table
}

/// Verdict line for the minimum requirements.
pub fn can_run_line(can_run: bool) -> String {
    format!("Can Run: {}", if can_run { "✅ Yes" } else { "❌ No" })
}

/// Estimated FPS with its gauge.
pub fn fps_line(fps: u32) -> String {
    format!("Estimated FPS: ~{} {}", fps, fps_gauge(fps))
}

/// One matched dimension with its ratio, e.g. `RAM: 16 vs 8 (ratio 2.00)`.
pub fn dimension_line(check: &DimensionCheck) -> String {
    format!(
        "{}: {} vs {} (ratio {:.2})",
        check.dimension.name(),
        check.measured,
        check.required,
        check.ratio
    )
}

/// Render a full compatibility report.
///
/// Verbose output adds every matched dimension of both tiers.
pub fn show_report(ui: &mut dyn UserInterface, report: &Report) {
    let badge = ui.theme().format_tier(report.estimate.tier);
    ui.data(&can_run_line(report.can_run()));
    ui.data(&format!("Graphics Quality: {}", badge));
    ui.data(&fps_line(report.estimate.fps));
    ui.data(&format!("Compatibility Score: {}/100", report.score));

    if ui.output_mode().shows_details() {
        for (tier, result) in [
            ("Minimum", &report.minimum_result),
            ("Recommended", &report.recommended_result),
        ] {
            for check in &result.checks {
                ui.message(&format!("{} {}", tier, dimension_line(check)));
            }
        }
    }

    for note in report.notes() {
        ui.warning(note);
    }

    for (title, block) in [
        ("Minimum Requirements", &report.minimum),
        ("Recommended Requirements", &report.recommended),
    ] {
        let Some(block) = block else {
            continue;
        };
        ui.data("");
        ui.data(title);
        ui.data(&requirements_table(block).render());
    }
}
