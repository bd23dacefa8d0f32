//! Output rendering (plain text and JSON)

pub mod classification;
pub mod report;

pub use classification::{render_classification, render_classification_json};
pub use report::{render_report, render_report_json};
