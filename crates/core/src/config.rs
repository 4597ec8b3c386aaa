//! Start-of-run configuration.
//!
//! [`AppConfig`] is built once (defaults, then an optional TOML file, then
//! environment overrides), validated, and passed by reference into the
//! components that need it. Nothing reads the process environment after
//! startup.
//!
//! ```
//! use caseproof_core::AppConfig;
//!
//! let cfg = AppConfig::from_toml_str("[search]\ntop_k = 3\n").unwrap();
//! assert_eq!(cfg.search.top_k, 3);
//! assert_eq!(cfg.llm.model, "gpt-5");
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Number of matches returned when the caller does not say otherwise.
pub const DEFAULT_TOP_K: usize = 5;

const DEFAULT_MODEL: &str = "gpt-5";
const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_PASSWORD_SALT: &str = "qa_ai_default_salt_change_this";

/// Hosted language-model settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key for the hosted model. Never printed by `Debug`.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

/// Account storage settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Path of the user store.
    pub users_file: String,
    /// Salt mixed into password hashes. Never printed by `Debug`.
    pub password_salt: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users_file: DEFAULT_USERS_FILE.to_string(),
            password_salt: DEFAULT_PASSWORD_SALT.to_string(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("users_file", &self.users_file)
            .field("password_salt", &"<redacted>")
            .finish()
    }
}

/// Evidence search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default bound on returned matches. Must be at least 1.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Input-size bounds applied by callers before invoking the matcher.
///
/// The matcher itself has no timeout, so these are how latency is bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Pages beyond this index are not searched.
    pub max_pages_per_document: Option<usize>,
    /// Page text beyond this many characters is not searched.
    pub max_chars_per_page: Option<usize>,
}

impl InputLimits {
    /// No bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Set the per-document page bound.
    pub fn max_pages_per_document(mut self, pages: usize) -> Self {
        self.max_pages_per_document = Some(pages);
        self
    }

    /// Set the per-page character bound.
    pub fn max_chars_per_page(mut self, chars: usize) -> Self {
        self.max_chars_per_page = Some(chars);
        self
    }

    /// Apply the character bound to one page, cutting on a char boundary.
    pub fn clip_page<'a>(&self, text: &'a str) -> &'a str {
        match self.max_chars_per_page {
            Some(max) => match text.char_indices().nth(max) {
                Some((byte_idx, _)) => &text[..byte_idx],
                None => text,
            },
            None => text,
        }
    }

    /// Number of pages to search out of `page_count`.
    pub fn page_bound(&self, page_count: usize) -> usize {
        self.max_pages_per_document
            .map_or(page_count, |max| page_count.min(max))
    }
}

/// Process-wide configuration, fixed after startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hosted model settings.
    pub llm: LlmConfig,
    /// Account storage settings.
    pub auth: AuthConfig,
    /// Evidence search settings.
    pub search: SearchConfig,
    /// Input-size bounds.
    pub limits: InputLimits,
}

impl AppConfig {
    /// Parse and validate a TOML document. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Recognized keys: `OPENAI_API_KEY`, `OPENAI_MODEL`, `USERS_FILE`,
    /// `PASSWORD_SALT`. Empty values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(key) = get("OPENAI_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = get("OPENAI_MODEL") {
            self.llm.model = model;
        }
        if let Some(path) = get("USERS_FILE") {
            self.auth.users_file = path;
        }
        if let Some(salt) = get("PASSWORD_SALT") {
            self.auth.password_salt = salt;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.search.top_k == 0 {
            return Err(invalid("search.top_k", "must be at least 1"));
        }
        if self.limits.max_pages_per_document == Some(0) {
            return Err(invalid(
                "limits.max_pages_per_document",
                "must be at least 1 when set",
            ));
        }
        if self.limits.max_chars_per_page == Some(0) {
            return Err(invalid(
                "limits.max_chars_per_page",
                "must be at least 1 when set",
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(invalid("llm.model", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
