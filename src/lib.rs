//! Compare the URL path inventories of two websites.
//!
//! Both sites' URLs are reduced to their paths, indexed, and compared as
//! path sets to find the paths that survive a migration, the ones that were
//! dropped and the ones that were added.
//!
//! ```
//! use sitecmp::comparison::compare_sites;
//!
//! let comparison = compare_sites(
//!     ["https://old.example/", "https://old.example/about"],
//!     ["https://new.example/", "https://new.example/about-us"],
//! );
//! assert_eq!(comparison.same.len(), 1);
//! assert_eq!(comparison.only_in_old[0].path, "/about");
//! assert_eq!(comparison.only_in_new[0].path, "/about-us");
//! ```

pub mod comparison;
pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use crate::comparison::{SiteIndex, compare_sites, extract_path};
pub use crate::core::{Category, Comparison, Result, SiteCmpError, Summary};
