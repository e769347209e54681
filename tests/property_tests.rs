//! Property-based tests for sitecmp using proptest
//!
//! These tests generate random URL inventories to check the comparison
//! invariants across a wide range of inputs.

use proptest::prelude::*;
use sitecmp::comparison::{SiteIndex, compare_sites, extract_path};
use sitecmp::core::types::Site;
use std::collections::BTreeSet;

/// Generate valid URLs
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Bare hosts
        prop::collection::vec("[a-z]{3,10}", 1..4)
            .prop_map(|parts| format!("https://{}.com", parts.join("."))),
        // URLs with ports
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{}:{}", domain, port)),
        // URLs with paths
        (r"[a-z]{3,8}", prop::collection::vec(r"[a-z0-9-]{1,8}", 0..5)).prop_map(
            |(domain, path_parts)| format!("https://{}.com/{}", domain, path_parts.join("/"))
        ),
        // URLs with query parameters and fragments
        (r"[a-z]{3,8}", r"[a-z]{1,8}", r"[a-z]{1,8}").prop_map(|(domain, key, value)| {
            format!("https://{}.com/search?{}={}#top", domain, key, value)
        }),
        prop_oneof![
            Just("http://localhost".to_string()),
            Just("https://127.0.0.1/".to_string()),
            Just("ftp://example.com/pub".to_string()),
            Just("https://[::1]/status".to_string()),
        ]
    ]
}

/// Generate URLs whose authority cannot be parsed
fn malformed_url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Unclosed IPv6 host
        r"https?://\[::[0-9a-f]{1,4}",
        // Space inside the host
        (r"[a-z]{3,8}", r"[a-z]{3,8}")
            .prop_map(|(left, right)| format!("https://{left} {right}.com/")),
        // Non-numeric port
        (r"[a-z]{3,8}", r"[a-z]{2,5}")
            .prop_map(|(domain, port)| format!("http://{domain}.com:{port}/")),
        Just("http://".to_string()),
    ]
}

/// Generate paths written without scheme or host
fn bare_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(r"[a-z0-9._-]{1,8}", 0..5).prop_map(|parts| parts.join("/"))
}

/// Paths shared by the generated sites, so intersections are not always empty
fn site_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        r"[a-z]{3,8}",
        prop::collection::vec(prop::sample::select(vec!["", "a", "b", "c/d", "e/", "f"]), 0..8),
    )
        .prop_map(|(host, paths)| {
            paths
                .into_iter()
                .map(|path| format!("https://{host}.test/{path}"))
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_extracted_path_starts_with_slash(url in url_strategy()) {
        let path = extract_path(&url).unwrap();
        prop_assert!(path.starts_with('/'), "{url} -> {path}");
    }

    #[test]
    fn test_path_text_is_kept_verbatim(host in r"[a-z]{3,8}", path in r"(/[a-zа-я0-9.%-]{0,6}){0,4}") {
        let expected = if path.is_empty() { "/".to_string() } else { path.clone() };
        prop_assert_eq!(extract_path(&format!("https://{host}.com{path}")).unwrap(), expected);
    }

    #[test]
    fn test_bare_paths_get_a_leading_slash(path in bare_path_strategy()) {
        let extracted = extract_path(&path).unwrap();
        prop_assert!(extracted.starts_with('/'));
        prop_assert_eq!(extracted.trim_start_matches('/'), path.trim_start_matches('/'));
    }

    #[test]
    fn test_malformed_urls_are_errors(input in malformed_url_strategy()) {
        prop_assert!(extract_path(&input).is_err());
    }

    #[test]
    fn test_index_round_trip(urls in prop::collection::vec(url_strategy(), 0..20)) {
        let index = SiteIndex::build(Site::Old, &urls);

        for (path, url) in index.path_to_url() {
            prop_assert_eq!(index.url_to_path().get(url), Some(path));
        }
        prop_assert_eq!(index.total_input(), urls.len());
    }

    #[test]
    fn test_comparing_a_site_with_itself(urls in site_strategy()) {
        let comparison = compare_sites(&urls, &urls);

        prop_assert!(comparison.only_in_old.is_empty());
        prop_assert!(comparison.only_in_new.is_empty());
        if !urls.is_empty() {
            let distinct: BTreeSet<&String> = urls.iter().collect();
            prop_assert_eq!(comparison.same.len(), distinct.len());
        }
    }

    #[test]
    fn test_categories_partition_paths(old in site_strategy(), new in site_strategy()) {
        let comparison = compare_sites(&old, &new);

        let old_paths: BTreeSet<String> = old.iter().map(|url| extract_path(url).unwrap()).collect();
        let new_paths: BTreeSet<String> = new.iter().map(|url| extract_path(url).unwrap()).collect();

        let same: BTreeSet<String> = comparison.same.iter().map(|p| p.path.clone()).collect();
        let old_only: BTreeSet<String> = comparison.only_in_old.iter().map(|e| e.path.clone()).collect();
        let new_only: BTreeSet<String> = comparison.only_in_new.iter().map(|e| e.path.clone()).collect();

        prop_assert_eq!(&same, &old_paths.intersection(&new_paths).cloned().collect::<BTreeSet<String>>());
        prop_assert_eq!(&old_only, &old_paths.difference(&new_paths).cloned().collect::<BTreeSet<String>>());
        prop_assert_eq!(&new_only, &new_paths.difference(&old_paths).cloned().collect::<BTreeSet<String>>());
        prop_assert!(comparison.broken.is_empty());
    }

    #[test]
    fn test_malformed_urls_never_abort(
        valid in prop::collection::vec(url_strategy(), 0..10),
        malformed in prop::collection::vec(malformed_url_strategy(), 1..5),
    ) {
        let mut old = valid.clone();
        old.extend(malformed.iter().cloned());

        let comparison = compare_sites(&old, &valid);
        prop_assert_eq!(comparison.broken.len(), malformed.len());
        prop_assert_eq!(comparison.total_old, old.len());
        prop_assert!(comparison.only_in_old.is_empty());
    }
}
