use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::commands::ImportSummary;

/// Print the import outcome: a one-line verdict, then one table row per
/// field error.
pub fn print_summary(summary: &ImportSummary) {
    let report = &summary.report;
    if let Some(code) = &report.error {
        println!("import failed: {code}");
        return;
    }

    let rows = report.records.as_ref().map_or(0, Vec::len);
    if report.success {
        println!("imported {rows} row(s) from '{}' with no errors", report.sheet_name);
    } else {
        println!(
            "imported {rows} row(s) from '{}' with {} error(s)",
            report.sheet_name,
            summary.errors.len()
        );
    }

    if !summary.errors.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Cell", "Field", "Message"]);
        for error in &summary.errors {
            table.add_row(vec![
                error.cell.as_str(),
                error.field.as_str(),
                error.message.as_str(),
            ]);
        }
        println!("{table}");
    }

    if let Some(path) = &summary.annotated {
        println!("annotated workbook written to {}", path.display());
    }
}
