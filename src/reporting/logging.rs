use crate::config::Config;
use crate::core::error::SiteCmpError;
use crate::core::types::{Site, Summary};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    // try_init: a second initialization (tests, library callers) is not an error
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Skipped URLs are warnings, so they stay visible unless `quiet` is set
fn level_for(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let report = config.report_path().unwrap_or("<disabled>");
    let exclude_count = config.exclude_patterns.as_ref().map_or(0, Vec::len);

    info!(
        "Configuration: format={}, preview_limit={}, report={report}",
        config.output_format(),
        config.preview_limit()
    );
    info!(
        "Filtering: exclude_patterns={exclude_count}, min_match={:?}",
        config.min_match
    );
}

/// Log where a URL list was read from
pub fn log_input_loaded<P: AsRef<Path>>(site: Site, path: P, url_count: usize) {
    info!(
        "Loaded {url_count} URL(s) for the {site} site from {}",
        path.as_ref().display()
    );
}

/// Log the outcome of indexing one site
pub fn log_site_indexed(site: Site, paths: usize, total: usize, rejected: usize) {
    debug!("Indexed {site} site: {paths} distinct path(s) from {total} URL(s), {rejected} skipped");
}

/// Log a URL that could not be turned into a path
pub fn log_skipped_url(site: Site, err: &SiteCmpError) {
    warn!("Skipping URL on the {site} site: {err}");
}

/// Log a URL whose path matched an exclude pattern
pub fn log_excluded_path(site: Site, url: &str, path: &str) {
    debug!("Excluding {url} ({path}) on the {site} site");
}

/// Log a path that is listed under more than one URL
pub fn log_duplicate_path(site: Site, path: &str, previous: &str, replacement: &str) {
    debug!("Duplicate path {path} on the {site} site: {previous} replaced by {replacement}");
}

/// Log the final summary
pub fn log_summary(summary: &Summary) {
    match summary.match_percentage {
        Some(percentage) => info!(
            "Comparison complete: {} same, {} old-only, {} new-only, {} broken ({percentage:.1}% match)",
            summary.same, summary.only_in_old, summary.only_in_new, summary.broken
        ),
        None => info!(
            "Comparison complete: old site is empty, {} new-only, {} broken",
            summary.only_in_new, summary.broken
        ),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
