use std::fs;
use std::path::Path;

use crate::core::error::{Result, SiteCmpError};

/// Read a URL list: one URL per line, blank lines and `#` comments ignored.
pub fn load_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SiteCmpError::FileNotFound(path.display().to_string()));
    }
    if path.is_dir() {
        return Err(SiteCmpError::InvalidArgument(format!(
            "'{}' is a directory. Expected a text file with one URL per line.",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    Ok(parse_url_list(&content))
}

/// Split file content into URLs.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Built-in example inventories used by `--demo`.
pub fn demo_urls() -> (Vec<String>, Vec<String>) {
    let old_site = [
        "https://old-site.ru/",
        "https://old-site.ru/catalog",
        "https://old-site.ru/about",
        "https://old-site.ru/contact",
        "https://old-site.ru/blog/article-1",
        "https://old-site.ru/invalid-url",
    ];
    let new_site = [
        "https://new-site.com/",
        "https://new-site.com/catalog",
        "https://new-site.com/about-us",
        "https://new-site.com/contact",
        "https://new-site.com/blog/new-article",
        "https://new-site.com/services",
    ];

    (
        old_site.iter().map(|url| url.to_string()).collect(),
        new_site.iter().map(|url| url.to_string()).collect(),
    )
}
