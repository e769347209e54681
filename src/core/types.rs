use serde::Serialize;
use std::fmt;

use crate::core::constants::report;

/// Which of the two compared sites an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Old,
    New,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Old => "old",
            Site::New => "new",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result buckets of a comparison, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Same,
    OldOnly,
    NewOnly,
    Broken,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Same,
        Category::OldOnly,
        Category::NewOnly,
        Category::Broken,
    ];

    /// Section header used on the console and in the report file
    pub fn header(&self) -> &'static str {
        match self {
            Category::Same => report::SAME_HEADER,
            Category::OldOnly => report::OLD_ONLY_HEADER,
            Category::NewOnly => report::NEW_ONLY_HEADER,
            Category::Broken => report::BROKEN_HEADER,
        }
    }

    /// Short machine-friendly name, used by the minimal output format
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Same => "same",
            Category::OldOnly => "old-only",
            Category::NewOnly => "new-only",
            Category::Broken => "broken",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A path present on both sites together with the URL each site used for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamePair {
    pub path: String,
    pub old_url: String,
    pub new_url: String,
}

/// A URL and its normalized path, present on one site only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub url: String,
    pub path: String,
}

/// An input URL that could not be turned into a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedUrl {
    pub url: String,
    pub site: Site,
    pub reason: String,
}

/// A single rendered line pair of a category, independent of its shape.
///
/// Lets the console preview, the minimal output and the report file walk
/// every category the same way.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Same(&'a SamePair),
    OneSided(&'a PathEntry),
    Broken(&'a RejectedUrl),
}

impl Entry<'_> {
    /// Labeled lines as they appear in the report, without indentation
    pub fn labeled_lines(&self) -> Vec<String> {
        match self {
            Entry::Same(pair) => vec![
                format!("{}{}", report::OLD_LABEL, pair.old_url),
                format!("{}{}", report::NEW_LABEL, pair.new_url),
            ],
            Entry::OneSided(entry) => vec![
                format!("{}{}", report::URL_LABEL, entry.url),
                format!("{}{}", report::PATH_LABEL, entry.path),
            ],
            Entry::Broken(rejected) => vec![
                format!("{}{}", report::URL_LABEL, rejected.url),
                format!("{}{}", report::SITE_LABEL, rejected.site),
                format!("{}{}", report::ERROR_LABEL, rejected.reason),
            ],
        }
    }

    /// Normalized path, if the entry has one
    pub fn path(&self) -> Option<&str> {
        match self {
            Entry::Same(pair) => Some(&pair.path),
            Entry::OneSided(entry) => Some(&entry.path),
            Entry::Broken(_) => None,
        }
    }

    /// The URL that best identifies the entry (the new URL for matched paths)
    pub fn url(&self) -> &str {
        match self {
            Entry::Same(pair) => &pair.new_url,
            Entry::OneSided(entry) => &entry.url,
            Entry::Broken(rejected) => &rejected.url,
        }
    }
}

/// Outcome of comparing an old and a new site.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comparison {
    pub same: Vec<SamePair>,
    pub only_in_old: Vec<PathEntry>,
    pub only_in_new: Vec<PathEntry>,
    pub broken: Vec<RejectedUrl>,
    /// Number of URLs supplied for the old site, malformed ones included
    pub total_old: usize,
    /// Number of URLs supplied for the new site, malformed ones included
    pub total_new: usize,
}

impl Comparison {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Same => self.same.len(),
            Category::OldOnly => self.only_in_old.len(),
            Category::NewOnly => self.only_in_new.len(),
            Category::Broken => self.broken.len(),
        }
    }

    pub fn entries(&self, category: Category) -> Vec<Entry<'_>> {
        match category {
            Category::Same => self.same.iter().map(Entry::Same).collect(),
            Category::OldOnly => self.only_in_old.iter().map(Entry::OneSided).collect(),
            Category::NewOnly => self.only_in_new.iter().map(Entry::OneSided).collect(),
            Category::Broken => self.broken.iter().map(Entry::Broken).collect(),
        }
    }

    /// True when both sites expose exactly the same set of paths
    pub fn is_identical(&self) -> bool {
        self.only_in_old.is_empty() && self.only_in_new.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let match_percentage = if self.total_old == 0 {
            None
        } else {
            Some(self.same.len() as f64 / self.total_old as f64 * 100.0)
        };

        Summary {
            total_old: self.total_old,
            total_new: self.total_new,
            same: self.same.len(),
            only_in_old: self.only_in_old.len(),
            only_in_new: self.only_in_new.len(),
            broken: self.broken.len(),
            match_percentage,
        }
    }
}

/// Aggregate counts of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_old: usize,
    pub total_new: usize,
    pub same: usize,
    pub only_in_old: usize,
    pub only_in_new: usize,
    pub broken: usize,
    /// Share of old-site URLs whose path survives, `None` for an empty old site
    pub match_percentage: Option<f64>,
}

impl Summary {
    /// Whether the match percentage reaches `threshold` (an empty old site never does)
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.match_percentage
            .is_some_and(|percentage| percentage + 1e-10 >= threshold)
    }
}
