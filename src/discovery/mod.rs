//! URL list loading
//!
//! This module reads the URL inventories of both sites from text files
//! and provides the built-in demo inventories.

pub mod input;

// Re-export commonly used items
pub use input::{demo_urls, load_urls, parse_url_list};
