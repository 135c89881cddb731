//! Output rendering (text and JSON diff reports)

pub mod report;

pub use report::{render_json_report, render_text_report};
