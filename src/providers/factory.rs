//! Model handle construction.
//!
//! [`ModelFactory`] turns resolved credentials into an invocable serdesAI
//! model. The default [`OpenAiLikeFactory`] targets any OpenAI-compatible
//! endpoint.

use std::sync::Arc;

use serdes_ai_models::{openai::OpenAIChatModel, Model};

/// An invocable model bound to one model ID and set of credentials.
pub type ModelHandle = Arc<dyn Model>;

/// Builds model handles from (base URL, API key, model ID).
pub trait ModelFactory: Send + Sync {
    fn create(&self, base_url: &str, api_key: &str, model_id: &str) -> ModelHandle;
}

/// Factory for OpenAI-compatible chat completion endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiLikeFactory;

impl ModelFactory for OpenAiLikeFactory {
    fn create(&self, base_url: &str, api_key: &str, model_id: &str) -> ModelHandle {
        let model = OpenAIChatModel::new(model_id, api_key.to_string()).with_base_url(base_url);
        Arc::new(model)
    }
}
