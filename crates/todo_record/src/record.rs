// crates/todo_record/src/record.rs

use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// Every key a TODO record must carry, in the order the report prints them.
pub const REQUIRED_FIELDS: [&str; 6] = ["priority", "assignee", "body", "context", "file", "line"];

/// One TODO comment extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub priority: Priority,
    pub assignee: String,
    pub body: String,
    /// Source lines surrounding the comment, as captured (newlines included).
    pub context: Vec<String>,
    pub file: String,
    pub line: u64,
}

impl TodoRecord {
    /// The context lines with surrounding whitespace and newlines removed,
    /// in their original order.
    pub fn trimmed_context(&self) -> Vec<&str> {
        self.context.iter().map(|line| line.trim()).collect()
    }
}
