//! Core types and foundational components
//!
//! This module contains the comparison data types, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{Result, SiteCmpError};
pub use types::{Category, Comparison, Entry, PathEntry, RejectedUrl, SamePair, Site, Summary};
