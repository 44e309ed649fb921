use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contacts_cli::pipeline::CleanResult;

pub fn print_summary(result: &CleanResult) {
    for line in summary_lines(result) {
        println!("{line}");
    }
    if result.stages.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Before"),
        header_cell("Removed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stage in &result.stages {
        table.add_row(vec![
            Cell::new(stage.filter),
            Cell::new(stage.before),
            removed_cell(stage.removed),
        ]);
    }
    println!("{table}");
}

/// Counts followed by one line per removal note.
pub fn summary_lines(result: &CleanResult) -> Vec<String> {
    let output = result.output.as_ref().map_or_else(
        || "not written (dry run)".to_string(),
        |path| path.display().to_string(),
    );
    let mut lines = vec![
        format!("Input: {}", result.input.display()),
        format!("Output: {output}"),
        format!("Original records: {}", result.original_count),
        format!("Final records: {}", result.final_count),
        format!(
            "Removed: {} ({:.1}%)",
            result.removed_count(),
            result.removed_percent()
        ),
    ];
    lines.extend(result.notes.iter().map(ToString::to_string));
    lines
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn removed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_model::RemovalNote;
    use std::path::PathBuf;

    fn result(original: usize, kept: usize, notes: Vec<RemovalNote>) -> CleanResult {
        CleanResult {
            input: PathBuf::from("leads.csv"),
            output: Some(PathBuf::from("leads_email_only_20240309_140507.csv")),
            original_count: original,
            final_count: kept,
            notes,
            stages: Vec::new(),
        }
    }

    #[test]
    fn lines_report_counts_and_notes() {
        let lines = summary_lines(&result(
            3,
            1,
            vec![
                RemovalNote::new(1, "Removed 1 rows with invalid/missing email"),
                RemovalNote::new(1, "Removed 1 duplicate email entries"),
            ],
        ));
        assert_eq!(
            lines,
            vec![
                "Input: leads.csv",
                "Output: leads_email_only_20240309_140507.csv",
                "Original records: 3",
                "Final records: 1",
                "Removed: 2 (66.7%)",
                "Removed 1 rows with invalid/missing email",
                "Removed 1 duplicate email entries",
            ]
        );
    }

    #[test]
    fn empty_input_reports_zero_percent() {
        let lines = summary_lines(&result(0, 0, Vec::new()));
        assert_eq!(lines[4], "Removed: 0 (0.0%)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn dry_run_has_no_output_path() {
        let mut dry = result(1, 1, Vec::new());
        dry.output = None;
        assert_eq!(summary_lines(&dry)[1], "Output: not written (dry run)");
    }
}
