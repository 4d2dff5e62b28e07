use std::fmt::Write;

use comfy_table::{Cell, Color as TableColor};

use crate::report::RiskReport;

use super::styling::{bright, bright_green, bright_red, bright_yellow, dim};
use super::tables::{
    color_coded_confidence_cell, color_coded_probability_cell, create_table, impact_cell,
    priority_cell, severity_cell,
};

/// Prints a human-readable risk summary to stdout.
///
/// Displays color-coded tables showing:
/// - Overview: pipeline counts, high-risk count, average failure risk
/// - Pipeline Risk: per-pipeline probability, confidence, and impact tier
/// - Risk Factors: every triggered factor with severity and weight
/// - Recommended Actions: preventive actions with priority and effort
///
/// Probability coloring follows the 0.4/0.7 alerting bands; severity,
/// priority, and impact use green/yellow/red for low/medium/high.
pub fn print_summary(report: &RiskReport) {
    println!("{}", render_summary(report));
}

// Helper functions

fn create_cyan_header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(*label).fg(TableColor::Cyan))
        .collect()
}

fn add_section_header(output: &mut String, emoji: &str, title: &str) {
    let _ = writeln!(output, "{} {}", bright(emoji), bright(title).underlined());
}

fn average_risk_display(average: f64) -> console::StyledObject<String> {
    let text = format!("{:.0}%", average * 100.0);
    if average > 0.7 {
        bright_red(text)
    } else if average > 0.4 {
        bright_yellow(text)
    } else {
        bright_green(text)
    }
}

#[allow(clippy::format_push_string)]
fn render_summary(report: &RiskReport) -> String {
    let mut output = String::new();

    // Overview section
    add_section_header(&mut output, "🔮", "Overview");

    output.push_str(&format!(
        "  {} {}\n  {} {}\n  {} {}\n  {} {}\n\n",
        dim("Pipelines assessed:"),
        bright_yellow(report.total_pipelines),
        dim("High risk (>70%):"),
        bright_red(report.high_risk_pipelines),
        dim("Average failure risk:"),
        average_risk_display(report.average_failure_probability),
        dim("Generated:"),
        dim(report.generated_at.format("%Y-%m-%d %H:%M UTC"))
    ));

    if report.predictions.is_empty() {
        output.push_str(&format!("{}\n", bright_yellow("No pipeline data found.")));
        return output;
    }

    // Pipeline Risk
    add_section_header(&mut output, "🚦", "Pipeline Risk");

    let mut risk_table = create_table();
    risk_table.set_header(create_cyan_header(&[
        "Pipeline",
        "Repository",
        "Branch",
        "Status",
        "Environment",
        "Failure Risk",
        "Confidence",
        "Impact",
    ]));

    for scored in &report.predictions {
        let pipeline = &scored.pipeline;
        let prediction = &scored.prediction;
        risk_table.add_row(vec![
            Cell::new(&pipeline.name),
            Cell::new(&pipeline.repository),
            Cell::new(&pipeline.branch),
            Cell::new(pipeline.status.to_string()),
            Cell::new(&pipeline.environment),
            color_coded_probability_cell(prediction.failure_probability),
            color_coded_confidence_cell(prediction.confidence),
            impact_cell(prediction.estimated_impact),
        ]);
    }

    output.push_str(&format!("{risk_table}\n\n"));

    // Risk Factors
    add_section_header(&mut output, "⚠️", "Risk Factors");

    let factor_rows: Vec<_> = report
        .predictions
        .iter()
        .flat_map(|scored| {
            scored
                .prediction
                .risk_factors
                .iter()
                .map(move |factor| (&scored.pipeline.name, factor))
        })
        .collect();

    if factor_rows.is_empty() {
        output.push_str(&format!(
            "  {}\n\n",
            bright_green("No risk factors triggered.")
        ));
    } else {
        let mut factors_table = create_table();
        factors_table.set_header(create_cyan_header(&[
            "Pipeline",
            "Factor",
            "Severity",
            "Weight",
            "Description",
        ]));

        for (pipeline_name, factor) in factor_rows {
            factors_table.add_row(vec![
                Cell::new(pipeline_name),
                Cell::new(&factor.name),
                severity_cell(factor.severity),
                Cell::new(format!("{:.3}", factor.weight)),
                Cell::new(&factor.description),
            ]);
        }

        output.push_str(&format!("{factors_table}\n\n"));
    }

    // Recommended Actions
    add_section_header(&mut output, "🛠️", "Recommended Actions");

    let action_rows: Vec<_> = report
        .predictions
        .iter()
        .flat_map(|scored| {
            scored
                .prediction
                .preventive_actions
                .iter()
                .map(move |action| (&scored.pipeline.name, action))
        })
        .collect();

    if action_rows.is_empty() {
        output.push_str(&format!("  {}\n", bright_green("Nothing to do.")));
    } else {
        let mut actions_table = create_table();
        actions_table.set_header(create_cyan_header(&[
            "Pipeline",
            "Action",
            "Priority",
            "Estimated Time",
            "Automated",
        ]));

        for (pipeline_name, action) in action_rows {
            actions_table.add_row(vec![
                Cell::new(pipeline_name),
                Cell::new(&action.title),
                priority_cell(action.priority),
                Cell::new(&action.estimated_time),
                Cell::new(if action.automated { "yes" } else { "no" }),
            ]);
        }

        output.push_str(&format!("{actions_table}\n"));
    }

    output
}
