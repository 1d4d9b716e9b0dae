// crates/todo_report/src/config.rs

use std::path::PathBuf;

use render_report::ReportStyle;

/// Runtime configuration composed once from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Files to concatenate, in order. Empty means standard input; `-` names it explicitly.
    pub inputs: Vec<PathBuf>,
    pub style: ReportStyle,
    pub verbose: bool,
}

impl ReportConfig {
    pub fn new(inputs: Vec<PathBuf>, style: ReportStyle, verbose: bool) -> Self {
        Self {
            inputs,
            style,
            verbose,
        }
    }
}
