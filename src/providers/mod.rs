//! Provider adapters.
//!
//! Every remote model service implements [`Provider`], so the host
//! registry can list models and build handles without knowing which
//! service it is talking to.
//!
//! ## Providers
//!
//! - [`GlhfProvider`] - GLHF (`glhf.chat`), OpenAI-compatible

use std::collections::HashSet;

use async_trait::async_trait;

use crate::config::{ApiKeys, ProviderIdentity, ProviderSettings, ServerEnv};
use crate::models::{ModelDescriptor, ModelDiscovery};

pub mod factory;
pub mod glhf;
mod types;

pub use factory::{ModelFactory, ModelHandle, OpenAiLikeFactory};
pub use glhf::{GlhfProvider, GLHF_BASE_URL, GLHF_IDENTITY};
pub use types::{ModelInstanceRequest, ProviderError};

/// Uniform contract exposed to the provider registry.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Static identity: name, env var keys, default base URL.
    fn identity(&self) -> &ProviderIdentity;

    fn name(&self) -> &str {
        self.identity().name
    }

    fn api_key_link(&self) -> Option<&str> {
        self.identity().api_key_link
    }

    /// Models compiled into the adapter.
    fn static_models(&self) -> Vec<ModelDescriptor>;

    /// Query the remote service for its live model list.
    async fn discover_models(
        &self,
        api_keys: Option<&ApiKeys>,
        settings: Option<&ProviderSettings>,
        server_env: &ServerEnv,
    ) -> ModelDiscovery;

    /// Live models, or an empty list when discovery is not possible.
    async fn get_dynamic_models(
        &self,
        api_keys: Option<&ApiKeys>,
        settings: Option<&ProviderSettings>,
        server_env: &ServerEnv,
    ) -> Vec<ModelDescriptor> {
        self.discover_models(api_keys, settings, server_env)
            .await
            .into_models()
    }

    /// Static models followed by any discovered models not already listed.
    async fn all_models(
        &self,
        api_keys: Option<&ApiKeys>,
        settings: Option<&ProviderSettings>,
        server_env: &ServerEnv,
    ) -> Vec<ModelDescriptor> {
        let mut models = self.static_models();
        let mut seen: HashSet<String> = models.iter().map(|m| m.id.clone()).collect();

        for model in self.get_dynamic_models(api_keys, settings, server_env).await {
            if seen.insert(model.id.clone()) {
                models.push(model);
            }
        }
        models
    }

    /// Build a handle bound to `request.model`.
    ///
    /// Fails with [`ProviderError::MissingConfiguration`] rather than
    /// returning a handle that cannot reach the service.
    fn get_model_instance(
        &self,
        request: ModelInstanceRequest<'_>,
    ) -> Result<ModelHandle, ProviderError>;
}
