// crates/todo_record/src/error.rs

use std::fmt;
use thiserror::Error;

/// What is wrong with a single element of the input array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    NotAnObject,
    MissingField(&'static str),
    WrongShape {
        field: &'static str,
        expected: &'static str,
    },
    /// Passed the field checks but could not be converted into a record.
    Unconvertible(String),
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::NotAnObject => f.write_str("is not a JSON object"),
            IssueKind::MissingField(field) => write!(f, "missing required field `{}`", field),
            IssueKind::WrongShape { field, expected } => {
                write!(f, "field `{}` must be {}", field, expected)
            }
            IssueKind::Unconvertible(reason) => write!(f, "could not be converted: {}", reason),
        }
    }
}

/// An issue located at `index` in the input array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    pub index: usize,
    pub kind: IssueKind,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {} {}", self.index, self.kind)
    }
}

/// Every issue found while validating the input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<RecordIssue>,
}

impl ValidationReport {
    pub(crate) fn new(issues: Vec<RecordIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[RecordIssue] {
        &self.issues
    }

    /// `(index, field)` pairs for every missing required field.
    pub fn missing_fields(&self) -> Vec<(usize, &'static str)> {
        self.issues
            .iter()
            .filter_map(|issue| match issue.kind {
                IssueKind::MissingField(field) => Some((issue.index, field)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issue(s): ", self.issues.len())?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("input is not well-formed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("input must be a JSON array of TODO records, found {0}")]
    NotAnArray(&'static str),
    #[error("invalid TODO records, {0}")]
    Validation(ValidationReport),
}
