// crates/render_report/src/plain.rs

use todo_record::TodoRecord;

use crate::traits::EntryFormatter;

/// Tab-delimited layout with the context folded onto a single line.
pub struct PlainFormatter;

/// Placed between trimmed context lines.
pub const CONTEXT_SEPARATOR: &str = "\t\t";

impl EntryFormatter for PlainFormatter {
    fn section_marker(&self) -> &'static str {
        "###"
    }

    fn format_entry(&self, record: &TodoRecord) -> String {
        format!(
            "- prio:\t\t{}\n  assignee:\t{}\n  body:\t\t{}\n  context:\t{}\n  file:\t\t{}\n  line:\t\t{}\n",
            record.priority,
            record.assignee,
            record.body,
            record.trimmed_context().join(CONTEXT_SEPARATOR),
            record.file,
            record.line
        )
    }
}
