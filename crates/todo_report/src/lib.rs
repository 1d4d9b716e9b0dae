// crates/todo_report/src/lib.rs

pub mod config;
pub mod error;
pub mod input;

use group_by_assignee::group_by_assignee;
use render_report::{render_report, ReportStyle};
use todo_record::parse_records;

pub use config::ReportConfig;
pub use error::ReportError;
pub use input::read_inputs;

/// Turns the scanner's JSON output into the rendered report.
///
/// The whole input is parsed and validated before anything is rendered, so an
/// error never comes with a partial report.
pub fn generate_report(input: &str, style: ReportStyle) -> Result<String, ReportError> {
    let records = parse_records(input)?;
    let report = group_by_assignee(records);
    log::info!(
        "rendering {} record(s) for {} assignee(s) as {}",
        report.record_count(),
        report.len(),
        style
    );
    Ok(render_report(&report, style))
}

/// Reads the configured inputs and renders them.
pub fn run(config: &ReportConfig) -> Result<String, ReportError> {
    let input = read_inputs(&config.inputs)?;
    generate_report(&input, config.style)
}
