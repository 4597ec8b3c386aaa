//! Public types for the Caseproof API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Document model
// ============================================================================

pub use caseproof_core::{Document, PageTexts};

// Search results
pub use caseproof_core::Match;
pub use caseproof_search::{SearchOutcome, SearchStatus};

// ============================================================================
// Configuration
// ============================================================================

pub use caseproof_core::{AppConfig, AuthConfig, InputLimits, LlmConfig, SearchConfig};

// ============================================================================
// Errors
// ============================================================================

pub use caseproof_core::{ConfigError, DocumentError};
pub use caseproof_ingest::ExtractError;
