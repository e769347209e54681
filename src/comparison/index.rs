//! Per-site lookup tables between original URLs and their paths.

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::comparison::path::extract_path;
use crate::core::error::SiteCmpError;
use crate::core::types::{RejectedUrl, Site};
use crate::reporting::logging;

/// Bidirectional URL <-> path mapping for one site.
///
/// The path -> URL side keeps the last URL seen for a path, so the index is a
/// lossy bijection when a site lists several URLs with the same path.
#[derive(Debug, Clone)]
pub struct SiteIndex {
    site: Site,
    url_to_path: FxHashMap<String, String>,
    path_to_url: FxHashMap<String, String>,
    rejected: Vec<RejectedUrl>,
    excluded: usize,
    total_input: usize,
}

impl SiteIndex {
    /// Index every URL of `urls`, logging and skipping the ones without a usable path.
    pub fn build<I, S>(site: Site, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(site, urls, &[])
    }

    /// Like [`SiteIndex::build`], but drops URLs whose path matches any of `exclude`.
    pub fn build_with<I, S>(site: Site, urls: I, exclude: &[Regex]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = SiteIndex {
            site,
            url_to_path: FxHashMap::default(),
            path_to_url: FxHashMap::default(),
            rejected: Vec::new(),
            excluded: 0,
            total_input: 0,
        };

        for url in urls {
            index.total_input += 1;
            index.insert(url.as_ref(), exclude);
        }

        logging::log_site_indexed(
            site,
            index.path_to_url.len(),
            index.total_input,
            index.rejected.len(),
        );
        index
    }

    fn insert(&mut self, url: &str, exclude: &[Regex]) {
        let path = match extract_path(url) {
            Ok(path) => path,
            Err(err) => {
                logging::log_skipped_url(self.site, &err);
                self.rejected.push(RejectedUrl {
                    url: url.to_string(),
                    site: self.site,
                    reason: rejection_reason(&err),
                });
                return;
            }
        };

        if exclude.iter().any(|pattern| pattern.is_match(&path)) {
            logging::log_excluded_path(self.site, url, &path);
            self.excluded += 1;
            return;
        }

        if let Some(previous) = self.path_to_url.get(&path)
            && previous != url
        {
            logging::log_duplicate_path(self.site, &path, previous, url);
        }

        self.url_to_path.insert(url.to_string(), path.clone());
        self.path_to_url.insert(path, url.to_string());
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn url_to_path(&self) -> &FxHashMap<String, String> {
        &self.url_to_path
    }

    pub fn path_to_url(&self) -> &FxHashMap<String, String> {
        &self.path_to_url
    }

    /// URL the site uses for `path`, the last one listed if there were several
    pub fn url_for(&self, path: &str) -> Option<&str> {
        self.path_to_url.get(path).map(String::as_str)
    }

    /// Normalized path recorded for `url`
    pub fn path_for(&self, url: &str) -> Option<&str> {
        self.url_to_path.get(url).map(String::as_str)
    }

    /// Distinct normalized paths, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.path_to_url.keys().map(String::as_str)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.path_to_url.contains_key(path)
    }

    /// URLs that failed path extraction, in input order
    pub fn rejected(&self) -> &[RejectedUrl] {
        &self.rejected
    }

    /// Number of URLs dropped by exclude patterns
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Number of URLs handed to the index, malformed and excluded ones included
    pub fn total_input(&self) -> usize {
        self.total_input
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.path_to_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path_to_url.is_empty()
    }
}

/// Parser reason without the URL, which the report already prints next to it.
fn rejection_reason(err: &SiteCmpError) -> String {
    match err {
        SiteCmpError::UrlParse { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_records_both_directions() {
        let index = SiteIndex::build(
            Site::Old,
            ["https://old.test/", "https://old.test/catalog"],
        );

        assert_eq!(index.len(), 2);
        assert_eq!(index.path_for("https://old.test/catalog"), Some("/catalog"));
        assert_eq!(index.url_for("/catalog"), Some("https://old.test/catalog"));
        assert_eq!(index.url_for("/"), Some("https://old.test/"));
        assert_eq!(index.site(), Site::Old);
    }

    #[test]
    fn test_last_url_wins_for_duplicate_paths() {
        let index = SiteIndex::build(
            Site::New,
            [
                "https://www.new.test/about",
                "http://new.test/about?ref=nav",
                "https://new.test/about",
            ],
        );

        assert_eq!(index.len(), 1);
        assert_eq!(index.url_to_path().len(), 3);
        assert_eq!(index.url_for("/about"), Some("https://new.test/about"));
        assert_eq!(index.total_input(), 3);
    }

    #[test]
    fn test_every_path_maps_back_to_a_url_with_that_path() {
        let index = SiteIndex::build(
            Site::Old,
            [
                "https://a.test/x",
                "https://b.test/x",
                "https://a.test/y",
                "https://a.test/",
            ],
        );

        for (path, url) in index.path_to_url() {
            assert_eq!(index.url_to_path().get(url), Some(path));
        }
    }

    #[test]
    fn test_malformed_urls_are_skipped_and_recorded() {
        let index = SiteIndex::build(
            Site::Old,
            ["https://old.test/ok", "http://[::1", "https://old.test/also-ok"],
        );

        assert_eq!(index.len(), 2);
        assert_eq!(index.total_input(), 3);
        assert_eq!(index.rejected().len(), 1);

        let rejected = &index.rejected()[0];
        assert_eq!(rejected.url, "http://[::1");
        assert_eq!(rejected.site, Site::Old);
        assert_eq!(rejected.reason, "invalid IPv6 address");
        assert!(index.path_for("http://[::1").is_none());
    }

    #[test]
    fn test_exclude_patterns_drop_matching_paths() {
        let exclude = vec![Regex::new("^/admin").unwrap()];
        let index = SiteIndex::build_with(
            Site::Old,
            ["https://old.test/admin/login", "https://old.test/about"],
            &exclude,
        );

        assert_eq!(index.len(), 1);
        assert_eq!(index.excluded(), 1);
        assert!(index.rejected().is_empty());
        assert!(!index.contains_path("/admin/login"));
        assert!(index.contains_path("/about"));
    }

    #[test]
    fn test_empty_input() {
        let index = SiteIndex::build(Site::New, Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.total_input(), 0);
        assert_eq!(index.paths().count(), 0);
    }
}
