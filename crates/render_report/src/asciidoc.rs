// crates/render_report/src/asciidoc.rs

use todo_record::TodoRecord;

use crate::traits::EntryFormatter;

/// AsciiDoc layout: inline-code values with ` +` hard line breaks and the
/// context in a tab-indented fenced block.
pub struct AsciiDocFormatter;

impl EntryFormatter for AsciiDocFormatter {
    fn section_marker(&self) -> &'static str {
        "==="
    }

    fn format_entry(&self, record: &TodoRecord) -> String {
        format!(
            "- prio: `{}` +\n  assignee: `{}` +\n  body: `{}` +\n  context: \n\t```\n\t{}\n\t``` +\n  file: `{}` +\n  line: `{}`\n",
            record.priority,
            record.assignee,
            record.body,
            record.trimmed_context().join("\n\t"),
            record.file,
            record.line
        )
    }
}
