//! Site comparison pipeline
//!
//! URLs are reduced to paths, indexed per site and compared as path sets.

pub mod differ;
pub mod index;
pub mod path;

// Re-export commonly used items
pub use differ::{CompareOptions, compare_indexes, compare_sites, compare_sites_with};
pub use index::SiteIndex;
pub use path::extract_path;
