// crates/render_report/src/lib.rs

pub mod api;
pub mod asciidoc;
pub mod factory;
pub mod plain;
pub mod traits;

pub use api::render_report;
pub use factory::{create_formatter, ReportStyle, UnknownStyleError};
pub use traits::EntryFormatter;
