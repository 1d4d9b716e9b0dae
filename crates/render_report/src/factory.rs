// crates/render_report/src/factory.rs

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::asciidoc::AsciiDocFormatter;
use crate::plain::PlainFormatter;
use crate::traits::EntryFormatter;

/// Supported report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    #[default]
    AsciiDoc,
    Plain,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown report style `{0}` (expected `asciidoc` or `plain`)")]
pub struct UnknownStyleError(pub String);

impl FromStr for ReportStyle {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asciidoc" | "adoc" | "a" => Ok(ReportStyle::AsciiDoc),
            "plain" | "text" | "b" => Ok(ReportStyle::Plain),
            _ => Err(UnknownStyleError(s.to_string())),
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportStyle::AsciiDoc => "asciidoc",
            ReportStyle::Plain => "plain",
        })
    }
}

/// Returns the formatter for the given style.
pub fn create_formatter(style: ReportStyle) -> Box<dyn EntryFormatter> {
    match style {
        ReportStyle::AsciiDoc => Box::new(AsciiDocFormatter),
        ReportStyle::Plain => Box::new(PlainFormatter),
    }
}
