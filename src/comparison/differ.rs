//! Set comparison of two site indexes.

use regex::Regex;
use std::collections::BTreeSet;

use crate::comparison::index::SiteIndex;
use crate::core::types::{Comparison, PathEntry, SamePair, Site};

/// Knobs for [`compare_sites_with`].
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Paths matching any of these are left out of the comparison entirely
    pub exclude_patterns: Vec<Regex>,
}

/// Compare the URL lists of an old and a new site by normalized path.
pub fn compare_sites<O, N>(old_urls: O, new_urls: N) -> Comparison
where
    O: IntoIterator,
    O::Item: AsRef<str>,
    N: IntoIterator,
    N::Item: AsRef<str>,
{
    compare_sites_with(old_urls, new_urls, &CompareOptions::default())
}

pub fn compare_sites_with<O, N>(old_urls: O, new_urls: N, options: &CompareOptions) -> Comparison
where
    O: IntoIterator,
    O::Item: AsRef<str>,
    N: IntoIterator,
    N::Item: AsRef<str>,
{
    let old = SiteIndex::build_with(Site::Old, old_urls, &options.exclude_patterns);
    let new = SiteIndex::build_with(Site::New, new_urls, &options.exclude_patterns);
    compare_indexes(&old, &new)
}

/// Compare two already built indexes.
///
/// Every category is sorted by path; broken URLs keep input order, old site first.
pub fn compare_indexes(old: &SiteIndex, new: &SiteIndex) -> Comparison {
    let old_paths: BTreeSet<&str> = old.paths().collect();
    let new_paths: BTreeSet<&str> = new.paths().collect();

    let same = old_paths
        .intersection(&new_paths)
        .filter_map(|&path| {
            Some(SamePair {
                path: path.to_string(),
                old_url: old.url_for(path)?.to_string(),
                new_url: new.url_for(path)?.to_string(),
            })
        })
        .collect();

    let only_in_old = one_sided(old, old_paths.difference(&new_paths).copied());
    let only_in_new = one_sided(new, new_paths.difference(&old_paths).copied());

    let broken = old
        .rejected()
        .iter()
        .chain(new.rejected())
        .cloned()
        .collect();

    Comparison {
        same,
        only_in_old,
        only_in_new,
        broken,
        total_old: old.total_input(),
        total_new: new.total_input(),
    }
}

fn one_sided<'a>(index: &SiteIndex, paths: impl Iterator<Item = &'a str>) -> Vec<PathEntry> {
    paths
        .filter_map(|path| {
            Some(PathEntry {
                url: index.url_for(path)?.to_string(),
                path: path.to_string(),
            })
        })
        .collect()
}
