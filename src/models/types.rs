//! Core model type definitions.

use serde::{Deserialize, Serialize};

/// Metadata for one invocable model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model ID sent to the API
    pub id: String,
    /// Human-readable name shown in pickers
    pub label: String,
    /// Name of the owning provider
    pub provider: String,
    /// Maximum tokens allowed per request
    pub max_tokens: u32,
}

impl ModelDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        provider: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            provider: provider.into(),
            max_tokens,
        }
    }
}
