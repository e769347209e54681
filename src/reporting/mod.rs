//! Reporting
//!
//! This module writes the full text report of a comparison
//! and holds the structured logging helpers for the application.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use report::{render_report, write_report};
