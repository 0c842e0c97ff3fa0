//! Dynamic model discovery from an OpenAI-compatible `/models` endpoint.
//!
//! Discovery is best-effort. Any failure produces
//! [`ModelDiscovery::UseStatic`] so callers fall back to the static
//! catalog instead of surfacing an error.

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{CredentialSources, ProviderIdentity};

use super::types::ModelDescriptor;

/// Token limit assigned to discovered models.
///
/// The listing endpoint does not report context windows, so every
/// discovered model gets the same approximation.
pub const DYNAMIC_MODEL_MAX_TOKENS: u32 = 8000;

/// `/models` response structure
#[derive(Debug, Deserialize)]
struct ModelListing {
    data: Vec<RemoteModel>,
}

#[derive(Debug, Deserialize)]
struct RemoteModel {
    id: String,
}

/// Why discovery fell back to the static catalog.
#[derive(Debug, Error)]
pub enum FallbackReason {
    /// Base URL or API key did not resolve; no request was made.
    #[error("missing base URL or API key")]
    MissingCredentials,
    /// The request, status check, or body parse failed.
    #[error("{0:#}")]
    RequestFailed(anyhow::Error),
}

/// Outcome of a discovery attempt.
#[derive(Debug)]
pub enum ModelDiscovery {
    /// The remote service returned a model listing.
    Discovered(Vec<ModelDescriptor>),
    /// Use the static catalog instead.
    UseStatic(FallbackReason),
}

impl ModelDiscovery {
    /// Discovered models, or an empty list on fallback.
    pub fn into_models(self) -> Vec<ModelDescriptor> {
        match self {
            ModelDiscovery::Discovered(models) => models,
            ModelDiscovery::UseStatic(_) => Vec::new(),
        }
    }
}

/// Fetch and parse `{base_url}/models`.
async fn fetch_model_listing(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
) -> Result<ModelListing> {
    let url = format!("{}/models", base_url);
    let response = client
        .get(&url)
        .bearer_auth(api_key)
        .send()
        .await
        .with_context(|| format!("Failed to fetch models from {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Model listing returned status {}", response.status());
    }

    response
        .json::<ModelListing>()
        .await
        .context("Failed to parse model listing response")
}

/// Query the provider for its live model list.
///
/// Resolves credentials first and skips the request entirely when either
/// the base URL or API key is missing. Never returns an error.
pub async fn discover_models(
    identity: &ProviderIdentity,
    sources: &CredentialSources<'_>,
    client: &reqwest::Client,
) -> ModelDiscovery {
    let credentials = identity.resolve_credentials(sources);
    let Some((base_url, api_key)) = credentials.pair() else {
        debug!(
            provider = %identity.name,
            has_base_url = credentials.base_url.is_some(),
            has_api_key = credentials.api_key.is_some(),
            "Skipping model discovery"
        );
        return ModelDiscovery::UseStatic(FallbackReason::MissingCredentials);
    };

    match fetch_model_listing(client, base_url, api_key).await {
        Ok(listing) => {
            let models: Vec<ModelDescriptor> = listing
                .data
                .into_iter()
                .map(|remote| {
                    ModelDescriptor::new(
                        remote.id.clone(),
                        remote.id,
                        identity.name,
                        DYNAMIC_MODEL_MAX_TOKENS,
                    )
                })
                .collect();
            debug!(
                provider = %identity.name,
                count = models.len(),
                "Discovered models"
            );
            ModelDiscovery::Discovered(models)
        }
        Err(e) => {
            let error = format!("{:#}", e);
            warn!(
                provider = %identity.name,
                base_url = %base_url,
                error = %error,
                "Error getting models, falling back to static catalog"
            );
            ModelDiscovery::UseStatic(FallbackReason::RequestFailed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKeys, ProviderSettings, ServerEnv};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_IDENTITY: ProviderIdentity = ProviderIdentity {
        name: "GLHF",
        base_url_key: "GLHF_API_BASE_URL",
        api_token_key: "GLHF_API_KEY",
        default_base_url: None,
        api_key_link: None,
    };

    fn keys() -> ApiKeys {
        ApiKeys::from([("GLHF".to_string(), "k1".to_string())])
    }

    async fn discover_at(base_url: &str, api_keys: Option<&ApiKeys>) -> ModelDiscovery {
        let env = ServerEnv::new();
        let settings = ProviderSettings::with_base_url(base_url);
        let sources = CredentialSources {
            api_keys,
            provider_settings: Some(&settings),
            server_env: &env,
        };
        discover_models(&TEST_IDENTITY, &sources, &reqwest::Client::new()).await
    }

    #[tokio::test]
    async fn test_valid_listing_maps_descriptors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header("authorization", "Bearer k1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "model-x" }, { "id": "model-y" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let discovery = discover_at(&server.uri(), Some(&keys())).await;
        assert!(matches!(discovery, ModelDiscovery::Discovered(_)));

        let models = discovery.into_models();
        assert_eq!(
            models,
            vec![
                ModelDescriptor::new("model-x", "model-x", "GLHF", DYNAMIC_MODEL_MAX_TOKENS),
                ModelDescriptor::new("model-y", "model-y", "GLHF", DYNAMIC_MODEL_MAX_TOKENS),
            ]
        );
    }

    #[tokio::test]
    async fn test_extra_fields_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [{ "id": "hf:org/model", "object": "model", "owned_by": "org" }]
            })))
            .mount(&server)
            .await;

        let models = discover_at(&server.uri(), Some(&keys())).await.into_models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "hf:org/model");
    }

    #[tokio::test]
    async fn test_empty_listing_is_still_discovered() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let discovery = discover_at(&server.uri(), Some(&keys())).await;
        assert!(matches!(discovery, ModelDiscovery::Discovered(_)));
        assert!(discovery.into_models().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(0)
            .mount(&server)
            .await;

        let discovery = discover_at(&server.uri(), None).await;
        assert!(matches!(
            discovery,
            ModelDiscovery::UseStatic(FallbackReason::MissingCredentials)
        ));
    }

    #[tokio::test]
    async fn test_nothing_resolved_returns_empty() {
        let env = ServerEnv::new();
        let discovery = discover_models(
            &TEST_IDENTITY,
            &CredentialSources::new(&env),
            &reqwest::Client::new(),
        )
        .await;
        assert!(matches!(
            discovery,
            ModelDiscovery::UseStatic(FallbackReason::MissingCredentials)
        ));
        assert!(discovery.into_models().is_empty());
    }

    #[tokio::test]
    async fn test_connection_refused_returns_empty() {
        // Nothing listens on port 1
        let discovery = discover_at("http://127.0.0.1:1", Some(&keys())).await;
        assert!(matches!(
            discovery,
            ModelDiscovery::UseStatic(FallbackReason::RequestFailed(_))
        ));
        assert!(discovery.into_models().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let discovery = discover_at(&server.uri(), Some(&keys())).await;
        assert!(matches!(discovery, ModelDiscovery::UseStatic(_)));
        assert!(discovery.into_models().is_empty());
    }

    #[tokio::test]
    async fn test_missing_data_field_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "list" })))
            .mount(&server)
            .await;

        let discovery = discover_at(&server.uri(), Some(&keys())).await;
        match discovery {
            ModelDiscovery::UseStatic(reason @ FallbackReason::RequestFailed(_)) => {
                assert!(reason.to_string().contains("parse"));
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "data": [{ "id": "should-not-appear" }]
            })))
            .mount(&server)
            .await;

        let discovery = discover_at(&server.uri(), Some(&keys())).await;
        match discovery {
            ModelDiscovery::UseStatic(reason @ FallbackReason::RequestFailed(_)) => {
                assert!(reason.to_string().contains("401"));
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_reason_display() {
        assert_eq!(
            FallbackReason::MissingCredentials.to_string(),
            "missing base URL or API key"
        );
        let err = anyhow::anyhow!("inner").context("outer");
        let reason = FallbackReason::RequestFailed(err);
        assert_eq!(reason.to_string(), "outer: inner");

        let as_error: &dyn std::error::Error = &reason;
        assert!(as_error.source().is_none());
    }

    #[tokio::test]
    async fn test_slashes_on_base_url_do_not_double_up() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "model-x" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = format!("{}/v1//", server.uri());
        let models = discover_at(&base_url, Some(&keys())).await.into_models();
        assert_eq!(models.len(), 1);
    }
}
