//! Request and error types shared by provider implementations.

use std::collections::HashMap;

use thiserror::Error;

use crate::config::{ApiKeys, ProviderSettings, ServerEnv};

/// Errors that can occur while building a model handle.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Missing configuration for {provider} provider")]
    MissingConfiguration { provider: String },
}

/// Inputs for [`super::Provider::get_model_instance`].
#[derive(Debug, Clone, Copy)]
pub struct ModelInstanceRequest<'a> {
    /// Model ID to bind the handle to
    pub model: &'a str,
    pub server_env: &'a ServerEnv,
    pub api_keys: Option<&'a ApiKeys>,
    /// Settings for every provider, keyed by provider name
    pub provider_settings: Option<&'a HashMap<String, ProviderSettings>>,
}

impl<'a> ModelInstanceRequest<'a> {
    pub fn new(model: &'a str, server_env: &'a ServerEnv) -> Self {
        Self {
            model,
            server_env,
            api_keys: None,
            provider_settings: None,
        }
    }
}
