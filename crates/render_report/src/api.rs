// crates/render_report/src/api.rs

use group_by_assignee::Report;

use crate::factory::{create_formatter, ReportStyle};

/// Renders every section of `report` in first-seen order: a heading, a blank
/// line, then one entry per record.
pub fn render_report(report: &Report, style: ReportStyle) -> String {
    let formatter = create_formatter(style);
    let mut output = String::new();
    for (assignee, records) in report.sections() {
        output.push_str(&formatter.format_header(assignee));
        for record in records {
            output.push_str(&formatter.format_entry(record));
        }
    }
    output
}
