use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

use crate::prediction::{Impact, Priority, Severity};

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Probability cells follow the alerting bands consumers key on:
/// above 0.7 is red, above 0.4 amber, the rest green.
pub fn color_coded_probability_cell(probability: f64) -> Cell {
    let text = format!("{:.0}%", probability * 100.0);
    if probability > 0.7 {
        Cell::new(text).fg(TableColor::Red)
    } else if probability > 0.4 {
        Cell::new(text).fg(TableColor::Yellow)
    } else {
        Cell::new(text).fg(TableColor::Green)
    }
}

pub fn color_coded_confidence_cell(confidence: f64) -> Cell {
    let text = format!("{:.0}%", confidence * 100.0);
    if confidence >= 0.75 {
        Cell::new(text).fg(TableColor::Green)
    } else if confidence >= 0.4 {
        Cell::new(text).fg(TableColor::Yellow)
    } else {
        Cell::new(text).fg(TableColor::Red)
    }
}

pub fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::High => TableColor::Red,
        Severity::Medium => TableColor::Yellow,
        Severity::Low => TableColor::Green,
    };
    Cell::new(severity.to_string()).fg(color)
}

pub fn priority_cell(priority: Priority) -> Cell {
    let color = match priority {
        Priority::High => TableColor::Red,
        Priority::Medium => TableColor::Yellow,
        Priority::Low => TableColor::Green,
    };
    Cell::new(priority.to_string()).fg(color)
}

pub fn impact_cell(impact: Impact) -> Cell {
    let color = match impact {
        Impact::High => TableColor::Red,
        Impact::Medium => TableColor::Yellow,
        Impact::Low => TableColor::Green,
    };
    Cell::new(impact.to_string()).fg(color)
}
