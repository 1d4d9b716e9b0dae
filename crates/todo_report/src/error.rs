// crates/todo_report/src/error.rs

use std::io;
use thiserror::Error;
use todo_record::RecordError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read input {source_name}: {source}")]
    InputRead {
        source_name: String,
        source: io::Error,
    },
    #[error(transparent)]
    Record(#[from] RecordError),
}
