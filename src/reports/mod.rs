use crate::gwa::RoundSummary;
use crate::subject::{EntryMode, Subject};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub const RULE: &str = "--------------------------------------------------";

/// Results block printed right after a weighted subject is entered.
pub fn render_subject_result(subject: &Subject) -> String {
    let mut out = format!("\n{} Results:\n", subject.name());
    if let Some(pct) = subject.weighted_percentage() {
        out.push_str(&format!("Final Grade: {:.2}%\n", pct));
    }
    out.push_str(&format!("Grade Point: {:.2}", subject.grade_point()));
    out
}

/// Overall GWA line, plus the per-subject breakdown table for weighted rounds.
pub fn render_summary(summary: &RoundSummary) -> String {
    let mut out = format!("\nOverall GWA: {:.2}", summary.gwa);

    if summary.mode == EntryMode::Weighted {
        out.push_str("\n\nSubject Breakdown:\n");
        out.push_str(&breakdown_table(summary).to_string());
    }

    out.push('\n');
    out.push_str(RULE);
    out
}

fn breakdown_table(summary: &RoundSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Subject").add_attribute(Attribute::Bold),
        Cell::new("Units"),
        Cell::new("Final%"),
        Cell::new("Point"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for s in &summary.subjects {
        let pct = s
            .weighted_percentage
            .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p));
        table.add_row(vec![
            Cell::new(&s.name),
            Cell::new(s.units),
            Cell::new(pct),
            Cell::new(format!("{:.2}", s.grade_point)),
        ]);
    }
    table
}
