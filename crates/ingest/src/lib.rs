//! Caller-side ingest layer for Caseproof.
//!
//! The evidence matcher only sees already extracted page text. This crate
//! sits in front of it:
//! - [`PageTextSource`]: anything that yields per-page plain text
//! - [`extract_pages`]: extraction with per-page failures turned into `""`
//! - [`DocumentStore`]: named documents, extracted on first search and
//!   bounded by [`InputLimits`](caseproof_core::InputLimits)

pub mod error;
pub mod source;
pub mod store;

pub use error::{ExtractError, Result};
pub use source::{document_name, extract_pages, FormFeedTextSource, InMemorySource, PageTextSource, FORM_FEED};
pub use store::DocumentStore;
