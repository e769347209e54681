//! Console output for sitecmp

use serde::Serialize;
use std::fmt::Write as _;

use crate::config::Config;
use crate::core::constants::{display, output_formats, report};
use crate::core::error::Result;
use crate::core::types::{Category, Comparison, Summary};
use crate::ui::color::{Colors, colorize, emphasize};

/// Display the comparison in the configured output format.
///
/// `report_file` names the text report if one was written.
pub fn display_results(
    comparison: &Comparison,
    config: &Config,
    quiet: bool,
    report_file: Option<&str>,
) -> Result<()> {
    match config.output_format() {
        output_formats::JSON => println!("{}", render_json(comparison, report_file)?),
        output_formats::MINIMAL => print!("{}", render_minimal(comparison)),
        _ => {
            if !quiet {
                print!(
                    "{}",
                    render_text(comparison, config.preview_limit(), report_file)
                );
            }
        }
    }

    if let Some(threshold) = config.min_match
        && !quiet
        && config.output_format() == output_formats::TEXT
    {
        print!("{}", render_min_match(&comparison.summary(), threshold));
    }

    Ok(())
}

/// Banner, truncated category previews, report location and summary
pub fn render_text(comparison: &Comparison, preview_limit: usize, report_file: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(&render_banner("COMPARISON RESULTS"));
    out.push_str(&render_preview(comparison, preview_limit));

    if let Some(path) = report_file {
        let _ = writeln!(
            out,
            "\n{} Full results saved to file: {}",
            display::FILE_EMOJI,
            colorize(path, Colors::BRIGHT_WHITE)
        );
    }

    out.push_str(&render_summary(&comparison.summary()));
    out
}

fn render_banner(title: &str) -> String {
    let rule = "=".repeat(report::CONSOLE_RULE_WIDTH);
    format!(
        "\n{rule}\n{}\n{rule}\n",
        emphasize(&format!("{title}:"), Colors::BRIGHT_CYAN)
    )
}

/// First `preview_limit` entries of every category
pub fn render_preview(comparison: &Comparison, preview_limit: usize) -> String {
    let entry_rule = "-".repeat(report::CONSOLE_ENTRY_RULE_WIDTH);
    let mut out = String::new();

    for category in Category::ALL {
        let entries = comparison.entries(category);
        let _ = writeln!(
            out,
            "\n{}: {}",
            colorize(category.header(), category_color(category)),
            entries.len()
        );

        for entry in entries.iter().take(preview_limit) {
            for line in entry.labeled_lines() {
                let _ = writeln!(out, "  {line}");
            }
            let _ = writeln!(out, "  {entry_rule}");
        }

        if entries.len() > preview_limit {
            let _ = writeln!(
                out,
                "  {}",
                colorize(
                    &format!("... and {} more URL(s)", entries.len() - preview_limit),
                    Colors::DIM
                )
            );
        }
    }

    out
}

fn category_color(category: Category) -> &'static str {
    match category {
        Category::Same => Colors::BRIGHT_GREEN,
        Category::OldOnly => Colors::BRIGHT_YELLOW,
        Category::NewOnly => Colors::CYAN,
        Category::Broken => Colors::BRIGHT_RED,
    }
}

/// Totals, per-category counts and match percentage
pub fn render_summary(summary: &Summary) -> String {
    let mut out = render_banner("SUMMARY");

    let _ = writeln!(out, "Total URLs on old site: {}", summary.total_old);
    let _ = writeln!(out, "Total URLs on new site: {}", summary.total_new);
    let _ = writeln!(out, "{}: {}", report::SAME_HEADER, summary.same);
    let _ = writeln!(out, "Unique to old site: {}", summary.only_in_old);
    let _ = writeln!(out, "Unique to new site: {}", summary.only_in_new);
    let _ = writeln!(out, "{}: {}", report::BROKEN_HEADER, summary.broken);
    let _ = writeln!(out, "Match: {} (of old site)", format_percentage(summary.match_percentage));

    out
}

/// `42.5%`, or `n/a` for an empty old site
pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(value) => format!("{value:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Verdict line for a configured minimum match
pub fn render_min_match(summary: &Summary, threshold: f64) -> String {
    let actual = format_percentage(summary.match_percentage);

    if summary.meets_threshold(threshold) {
        format!(
            "\n{} Match {actual} meets the minimum of {threshold:.1}% ({}/{} URLs kept their path)\n",
            colorize(display::SUCCESS_EMOJI, Colors::BRIGHT_GREEN),
            summary.same,
            summary.total_old
        )
    } else {
        format!(
            "\n{} Match {actual} is below the minimum of {threshold:.1}% ({}/{} URLs kept their path)\n",
            colorize(display::ERROR_EMOJI, Colors::BRIGHT_RED),
            summary.same,
            summary.total_old
        )
    }
}

/// One tab-separated line per entry: category, path (`-` if none), URL
pub fn render_minimal(comparison: &Comparison) -> String {
    let mut out = String::new();

    for category in Category::ALL {
        for entry in comparison.entries(category) {
            let _ = writeln!(
                out,
                "{}\t{}\t{}",
                category.slug(),
                entry.path().unwrap_or("-"),
                entry.url()
            );
        }
    }

    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    generated_at: String,
    report_file: Option<&'a str>,
    summary: Summary,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

/// Full comparison with summary, pretty-printed
pub fn render_json(comparison: &Comparison, report_file: Option<&str>) -> Result<String> {
    let output = JsonOutput {
        generated_at: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        report_file,
        summary: comparison.summary(),
        comparison,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
