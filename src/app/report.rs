use crate::core::PressureReport;
use crate::utils::error::Result;
use std::fmt::Write;

/// PWM pins driving the indicator light.
pub const RED_PIN: &str = "GP13";
pub const GREEN_PIN: &str = "GP14";
pub const BLUE_PIN: &str = "GP15";

pub fn render_text(report: &PressureReport) -> String {
    let mut out = String::new();

    // 寫入 String 不會失敗
    let _ = writeln!(out, "Found {} lists:", report.available_lists.len());
    for (index, list) in report.available_lists.iter().enumerate() {
        let marker = if list.id == report.list.id { "--->" } else { "    " };
        let _ = writeln!(out, "{} [{}] {}", marker, index, list.name);
    }

    let _ = writeln!(
        out,
        "\nTracking list '{}' ({} cards)",
        report.list.name,
        report.card_count()
    );
    for card in &report.cards {
        let _ = writeln!(out, "  Card: {}", card.name);
        let _ = writeln!(
            out,
            "    Status: {} -> Pressure +{}",
            card.status.describe(),
            card.pressure
        );
    }

    let _ = writeln!(out, "\n{}", "=".repeat(40));
    let _ = writeln!(out, "Total pressure score: {}", report.score);

    let color = report.color;
    if report.is_empty_list() {
        let _ = writeln!(
            out,
            "List is empty: light set to blue (Red: {}, Green: {}, Blue: {})",
            color.red, color.green, color.blue
        );
    } else {
        if let Some(ratio) = report.ratio {
            let _ = writeln!(out, "Pressure ratio: {:.2}", ratio);
        }
        let _ = writeln!(out, "PWM output:");
        let _ = writeln!(out, "  -> {} (Red):   {}", RED_PIN, color.red);
        let _ = writeln!(out, "  -> {} (Green): {}", GREEN_PIN, color.green);
        let _ = writeln!(out, "  -> {} (Blue):  {}", BLUE_PIN, color.blue);
    }

    out
}

pub fn render_json(report: &PressureReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
