//! Core types for Caseproof.
//!
//! This crate defines the data model shared by every other crate:
//! - [`Document`] and [`PageTexts`]: named documents and their page texts
//! - [`Match`]: one scored, cited candidate sentence
//! - [`AppConfig`]: start-of-run configuration passed to components
//! - Error types for configuration and document-set operations

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod evidence;

pub use config::{AppConfig, AuthConfig, InputLimits, LlmConfig, SearchConfig, DEFAULT_TOP_K};
pub use document::{Document, PageTexts};
pub use error::{ConfigError, DocumentError, Result};
pub use evidence::{format_evidence, Match};
