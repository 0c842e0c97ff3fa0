//! Provider settings supplied by the host application.
//!
//! These are the raw, caller-owned configuration bundles that feed
//! credential resolution. Nothing here reads the process environment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// API keys entered by the user, keyed by provider name (e.g. `"GLHF"`).
pub type ApiKeys = HashMap<String, String>;

/// Server-side defaults, keyed by environment variable name
/// (e.g. `"GLHF_API_KEY"`).
pub type ServerEnv = HashMap<String, String>;

/// Per-provider settings stored by the host.
///
/// Deserializes from the host's JSON shape:
/// `{"enabled": true, "baseUrl": "https://..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    /// Whether the user has enabled this provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Overriding base URL for the provider's API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderSettings {
    /// Settings carrying only a base URL override.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            enabled: None,
            base_url: Some(base_url.into()),
        }
    }

    /// Check if a usable (non-blank) base URL override is present.
    pub fn has_base_url(&self) -> bool {
        self.base_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}
