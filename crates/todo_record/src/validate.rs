// crates/todo_record/src/validate.rs

use serde_json::{Map, Value};

use crate::error::{IssueKind, RecordIssue};
use crate::record::REQUIRED_FIELDS;

/// Checks every element of the input array and collects all issues rather than
/// stopping at the first one.
pub fn validate_records(items: &[Value]) -> Vec<RecordIssue> {
    let mut issues = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(object) => validate_object(index, object, &mut issues),
            None => issues.push(RecordIssue {
                index,
                kind: IssueKind::NotAnObject,
            }),
        }
    }
    issues
}

fn validate_object(index: usize, object: &Map<String, Value>, issues: &mut Vec<RecordIssue>) {
    for field in REQUIRED_FIELDS {
        let kind = match object.get(field) {
            None => Some(IssueKind::MissingField(field)),
            Some(value) => expected_shape(field, value).map(|expected| IssueKind::WrongShape { field, expected }),
        };
        if let Some(kind) = kind {
            issues.push(RecordIssue { index, kind });
        }
    }
}

/// Returns a description of the expected shape if `value` does not fit `field`.
fn expected_shape(field: &str, value: &Value) -> Option<&'static str> {
    let ok = match field {
        "priority" => value.is_number() || value.is_string(),
        "context" => value
            .as_array()
            .map(|lines| lines.iter().all(Value::is_string))
            .unwrap_or(false),
        "line" => value.is_u64(),
        _ => value.is_string(),
    };
    if ok {
        return None;
    }
    Some(match field {
        "priority" => "a number or a string",
        "context" => "an array of strings",
        "line" => "a non-negative integer",
        _ => "a string",
    })
}

/// Short name of a JSON value's kind, used in diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> Value {
        json!({
            "priority": 1,
            "assignee": "alice",
            "body": "fix x",
            "context": ["// fix\n"],
            "file": "a.rs",
            "line": 10
        })
    }

    #[test]
    fn test_complete_record_has_no_issues() {
        assert!(validate_records(&[complete()]).is_empty());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut record = complete();
        record["column"] = json!(4);
        assert!(validate_records(&[record]).is_empty());
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let issues = validate_records(&[json!({ "assignee": "bob", "body": "b" })]);
        let missing: Vec<_> = issues
            .iter()
            .filter_map(|i| match i.kind {
                IssueKind::MissingField(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(missing, vec!["priority", "context", "file", "line"]);
    }

    #[test]
    fn test_issues_span_records() {
        let mut second = complete();
        second.as_object_mut().unwrap().remove("priority");
        let issues = validate_records(&[complete(), second, json!("nope")]);
        assert_eq!(
            issues,
            vec![
                RecordIssue {
                    index: 1,
                    kind: IssueKind::MissingField("priority")
                },
                RecordIssue {
                    index: 2,
                    kind: IssueKind::NotAnObject
                },
            ]
        );
    }

    #[test]
    fn test_wrong_shapes() {
        let record = json!({
            "priority": null,
            "assignee": 7,
            "body": "b",
            "context": ["ok", 3],
            "file": "f",
            "line": -1
        });
        let fields: Vec<_> = validate_records(&[record])
            .into_iter()
            .map(|i| match i.kind {
                IssueKind::WrongShape { field, .. } => field,
                other => panic!("unexpected issue {:?}", other),
            })
            .collect();
        assert_eq!(fields, vec!["priority", "assignee", "context", "line"]);
    }

    #[test]
    fn test_fractional_line_is_rejected() {
        let mut record = complete();
        record["line"] = json!(1.5);
        assert_eq!(validate_records(&[record]).len(), 1);
    }

    #[test]
    fn test_string_priority_is_accepted() {
        let mut record = complete();
        record["priority"] = json!("min");
        assert!(validate_records(&[record]).is_empty());
    }
}
