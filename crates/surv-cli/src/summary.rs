use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::AnalysisResult;

pub fn print_summary(result: &AnalysisResult) {
    let report = &result.outcome.report;
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.json_path {
        println!("JSON: {}", path.display());
    }
    if let Some(path) = &result.curves_csv_path {
        println!("Curves CSV: {}", path.display());
    }
    println!(
        "Rows: {}  usable: {}  filtered: {}  excluded: {} missing date, {} negative, {} clamped",
        report.input_rows,
        report.usable_records,
        report.filtered_records,
        report.excluded.missing_date,
        report.excluded.negative_time,
        report.excluded.clamped_time,
    );

    if report.is_empty_cohort() {
        eprintln!("No data available under the current filters.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Records"),
        header_cell("Events"),
        header_cell("Points"),
        header_cell("S(end)"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for idx in 1..5 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_records = 0usize;
    let mut total_events = 0usize;
    for (summary, curve) in report.groups.iter().zip(&result.outcome.curves) {
        total_records += summary.records;
        total_events += summary.events;
        table.add_row(vec![
            Cell::new(&summary.label),
            Cell::new(summary.records),
            Cell::new(summary.events),
            Cell::new(summary.curve_points),
            Cell::new(format!("{:.3}", curve.final_survival())),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        Cell::new(total_events).add_attribute(Attribute::Bold),
        Cell::new("-"),
        Cell::new("-"),
    ]);
    println!("{table}");

    if !report.empty_groups.is_empty() {
        eprintln!("Groups with nothing to estimate:");
        for label in &report.empty_groups {
            eprintln!("- {label}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
