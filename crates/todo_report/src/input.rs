// crates/todo_report/src/input.rs

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// The path that stands for standard input.
pub const STDIN_MARKER: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}

fn read_stdin() -> Result<String, ReportError> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|source| ReportError::InputRead {
            source_name: "<stdin>".to_string(),
            source,
        })?;
    Ok(content)
}

/// Reads and concatenates every input in order.
///
/// An empty list reads all of standard input. Any unreadable source fails the
/// whole read.
pub fn read_inputs(inputs: &[PathBuf]) -> Result<String, ReportError> {
    if inputs.is_empty() {
        return read_stdin();
    }

    let mut content = String::new();
    for path in inputs {
        let chunk = if is_stdin(path) {
            read_stdin()?
        } else {
            fs::read_to_string(path).map_err(|source| ReportError::InputRead {
                source_name: path.display().to_string(),
                source,
            })?
        };
        log::debug!("read {} byte(s) from {}", chunk.len(), path.display());
        content.push_str(&chunk);
    }
    Ok(content)
}
