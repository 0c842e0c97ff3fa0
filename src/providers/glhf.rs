//! GLHF provider.
//!
//! GLHF serves Hugging Face models behind an OpenAI-compatible API.
//! Model IDs carry an `hf:` prefix, e.g. `hf:Qwen/Qwen2.5-Coder-32B-Instruct`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::{ApiKeys, CredentialSources, ProviderIdentity, ProviderSettings, ServerEnv};
use crate::models::{catalog, discover_models, ModelDescriptor, ModelDiscovery};

use super::factory::{ModelFactory, ModelHandle, OpenAiLikeFactory};
use super::types::{ModelInstanceRequest, ProviderError};
use super::Provider;

/// GLHF OpenAI-compatible API endpoint
pub const GLHF_BASE_URL: &str = "https://glhf.chat/api/openai/v1";

pub const GLHF_IDENTITY: ProviderIdentity = ProviderIdentity {
    name: "GLHF",
    base_url_key: "GLHF_API_BASE_URL",
    api_token_key: "GLHF_API_KEY",
    default_base_url: Some(GLHF_BASE_URL),
    api_key_link: None,
};

/// Provider adapter for GLHF.
#[derive(Clone)]
pub struct GlhfProvider {
    identity: ProviderIdentity,
    factory: Arc<dyn ModelFactory>,
    client: reqwest::Client,
}

impl std::fmt::Debug for GlhfProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlhfProvider")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl Default for GlhfProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GlhfProvider {
    /// Create a provider with the default identity and an OpenAI-compatible factory.
    pub fn new() -> Self {
        Self {
            identity: GLHF_IDENTITY,
            factory: Arc::new(OpenAiLikeFactory),
            client: reqwest::Client::new(),
        }
    }

    /// Use a different model handle factory.
    pub fn with_factory(mut self, factory: Arc<dyn ModelFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Override the identity (e.g. a self-hosted deployment without a default URL).
    pub fn with_identity(mut self, identity: ProviderIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Share an existing HTTP client for model discovery.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Provider for GlhfProvider {
    fn identity(&self) -> &ProviderIdentity {
        &self.identity
    }

    fn static_models(&self) -> Vec<ModelDescriptor> {
        catalog::static_models(self.identity.name)
    }

    async fn discover_models(
        &self,
        api_keys: Option<&ApiKeys>,
        settings: Option<&ProviderSettings>,
        server_env: &ServerEnv,
    ) -> ModelDiscovery {
        let sources = CredentialSources {
            api_keys,
            provider_settings: settings,
            server_env,
        };
        discover_models(&self.identity, &sources, &self.client).await
    }

    fn get_model_instance(
        &self,
        request: ModelInstanceRequest<'_>,
    ) -> Result<ModelHandle, ProviderError> {
        debug!(
            provider = %self.identity.name,
            model = %request.model,
            "get_model_instance called"
        );

        let sources = CredentialSources {
            api_keys: request.api_keys,
            provider_settings: request
                .provider_settings
                .and_then(|all| all.get(self.identity.name)),
            server_env: request.server_env,
        };
        let credentials = self.identity.resolve_credentials(&sources);

        let Some((base_url, api_key)) = credentials.pair() else {
            warn!(
                provider = %self.identity.name,
                has_base_url = credentials.base_url.is_some(),
                has_api_key = credentials.api_key.is_some(),
                "Missing provider configuration"
            );
            return Err(ProviderError::MissingConfiguration {
                provider: self.identity.name.to_string(),
            });
        };

        let model = self.factory.create(base_url, api_key, request.model);

        info!(
            provider = %self.identity.name,
            model = %request.model,
            endpoint = %base_url,
            "Model ready"
        );
        Ok(model)
    }
}
