//! Plain text report with every entry of every category.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::constants::report;
use crate::core::error::Result;
use crate::core::types::{Category, Comparison};

/// Render the full report.
///
/// Each category gets a header framed by `=` rules followed by its entries,
/// each entry closed by a `-` rule.
pub fn render_report(comparison: &Comparison) -> String {
    let rule = "=".repeat(report::FILE_RULE_WIDTH);
    let entry_rule = "-".repeat(report::FILE_ENTRY_RULE_WIDTH);
    let mut out = String::new();

    for category in Category::ALL {
        // Writing into a String cannot fail
        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{}: {}", category.header(), comparison.count(category));
        let _ = writeln!(out, "{rule}");

        for entry in comparison.entries(category) {
            for line in entry.labeled_lines() {
                let _ = writeln!(out, "{line}");
            }
            let _ = writeln!(out, "{entry_rule}");
        }
    }

    out
}

/// Write the full report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(comparison: &Comparison, path: P) -> Result<()> {
    fs::write(path, render_report(comparison))?;
    Ok(())
}
