//! # listwatch-core
//!
//! Core functionality for listwatch - a change-detection crawler for listing
//! pages. It fetches a single page, extracts hyperlinks matching configurable
//! substring filters, derives a stable identifier per link, and reports only
//! identifiers not previously seen, persisting them across runs.
//!
//! ## Architecture
//!
//! - **Seen-Set Store** ([`store`]): durable key-presence set in a single
//!   SQLite file, the only state shared between runs.
//! - **Identifier Normalizer** ([`normalizer`]): pure mapping from a raw href
//!   plus base URL to the canonical deduplication key.
//! - **Link Filter** ([`filter`]): inclusion/exclusion substring criteria.
//! - **Scanner** ([`scanner`]): the explicit per-link loop tying filter,
//!   normalizer, and store together.
//! - **Fetcher** ([`fetcher`]) / **Parser** ([`parser`]): the HTTP and HTML
//!   collaborators feeding raw links into the scanner.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. No error is retried
//! automatically: failures either degrade to a clean early exit (missing
//! configuration) or terminate the run.

/// Run configuration resolved once at startup
pub mod config;
/// Error types and result aliases
pub mod error;
/// HTTP fetching with a fixed request deadline
pub mod fetcher;
/// Link inclusion/exclusion criteria
pub mod filter;
/// Identifier derivation from raw hrefs
pub mod normalizer;
/// Anchor extraction from HTML
pub mod parser;
/// The per-link filter/normalize/dedupe loop
pub mod scanner;
/// Durable seen-set store
pub mod store;

pub use config::{Config, DEFAULT_DB_PATH};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use filter::{FilterCriteria, NewListing};
pub use normalizer::{normalize, IdPolicy};
pub use parser::extract_links;
pub use scanner::scan_links;
pub use store::SeenStore;
