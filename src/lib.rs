//! Stockpot GLHF provider
//!
//! Connects Stockpot to GLHF's OpenAI-compatible API.
//!
//! ## Main Components
//!
//! - [`config`] - Layered credential resolution (settings, API keys, server env)
//! - [`models`] - Static model catalog and live model discovery
//! - [`providers`] - The `Provider` contract and the GLHF implementation
//!
//! ## Quick Start
//!
//! ```ignore
//! use stockpot_glhf::{ApiKeys, GlhfProvider, ModelInstanceRequest, Provider, ServerEnv};
//!
//! let provider = GlhfProvider::new();
//! let env = ServerEnv::new();
//! let keys = ApiKeys::from([("GLHF".to_string(), api_key)]);
//!
//! let models = provider.all_models(Some(&keys), None, &env).await;
//! let model = provider.get_model_instance(ModelInstanceRequest {
//!     api_keys: Some(&keys),
//!     ..ModelInstanceRequest::new(&models[0].id, &env)
//! })?;
//! ```

pub mod config;
pub mod models;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ApiKeys, CredentialSources, EffectiveCredentials, ProviderIdentity, ProviderSettings,
    ServerEnv,
};
pub use models::{FallbackReason, ModelDescriptor, ModelDiscovery};
pub use providers::{
    GlhfProvider, ModelFactory, ModelHandle, ModelInstanceRequest, OpenAiLikeFactory, Provider,
    ProviderError, GLHF_BASE_URL, GLHF_IDENTITY,
};
