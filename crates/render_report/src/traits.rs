// crates/render_report/src/traits.rs

use todo_record::TodoRecord;

/// Renders the pieces of a TODO report in one markup style.
pub trait EntryFormatter {
    /// Heading indicator placed before each assignee name.
    fn section_marker(&self) -> &'static str;

    /// Renders one record as a block of lines, each terminated by `\n`.
    fn format_entry(&self, record: &TodoRecord) -> String;

    /// Renders a section heading followed by a blank line.
    fn format_header(&self, assignee: &str) -> String {
        format!("{} {}\n\n", self.section_marker(), assignee)
    }
}
