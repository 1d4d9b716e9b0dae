// crates/todo_record/src/lib.rs

//! Typed TODO records as produced by the source scanner, and the one-shot
//! parser that validates a JSON array of them.

mod error;
mod priority;
mod record;
mod validate;

pub use error::{IssueKind, RecordError, RecordIssue, ValidationReport};
pub use priority::Priority;
pub use record::{TodoRecord, REQUIRED_FIELDS};

use serde_json::Value;

/// Parses `input` as a JSON array of TODO records.
///
/// All elements are validated before any is converted, so a single call
/// reports every missing or malformed field in the input at once. Nothing is
/// returned unless the whole input is valid.
pub fn parse_records(input: &str) -> Result<Vec<TodoRecord>, RecordError> {
    let value: Value = serde_json::from_str(input)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(RecordError::NotAnArray(validate::json_kind(&other))),
    };

    let issues = validate::validate_records(&items);
    if !issues.is_empty() {
        log::debug!("rejecting input: {} validation issue(s)", issues.len());
        return Err(RecordError::Validation(ValidationReport::new(issues)));
    }

    let records = convert_records(items)?;
    log::debug!("parsed {} TODO record(s)", records.len());
    Ok(records)
}

/// Converts already-validated elements; a conversion failure is reported as a
/// record issue, not as malformed JSON.
fn convert_records(items: Vec<Value>) -> Result<Vec<TodoRecord>, RecordError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<TodoRecord>(item).map_err(|err| {
                RecordError::Validation(ValidationReport::new(vec![RecordIssue {
                    index,
                    kind: IssueKind::Unconvertible(err.to_string()),
                }]))
            })
        })
        .collect()
}
