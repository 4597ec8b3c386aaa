//! Evidence Workflow Test Suite
//!
//! End-to-end checks through the `caseproof` facade: a session loads an
//! assessment and its referrals, then asks grounding questions.
//!
//! ## Test Groups
//!
//! - **matching**: ranking, early exits and substring semantics
//! - **session**: store-backed searches over file and in-memory sources
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test evidence_workflow
//! ```

mod test_utils;

mod matching;
mod session;
