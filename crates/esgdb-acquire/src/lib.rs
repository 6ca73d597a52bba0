//! Content acquisition for esgdb.
//!
//! Resolves a company's public sustainability disclosure into raw text by
//! probing a fixed set of candidate URLs, and defines the collaborator
//! boundary for regulatory-filing retrieval. Acquisition misses are routine:
//! a company with no reachable sustainability page yields empty content, not
//! an error.

pub mod error;
pub mod filings;
pub mod page;
pub mod types;

pub use error::AcquireError;
pub use filings::{FilingSource, PlaceholderFilings};
pub use page::{PageFetcher, PAGE_CONTENT_MAX_CHARS};
pub use types::{ContentSource, PageContent};
