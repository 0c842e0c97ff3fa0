//! Credential resolution across layered configuration sources.
//!
//! Precedence, applied independently per field:
//!
//! | Field      | 1st                          | 2nd                          | 3rd                  |
//! |------------|------------------------------|------------------------------|----------------------|
//! | `base_url` | `provider_settings.base_url` | `server_env[base_url_key]`   | `default_base_url`   |
//! | `api_key`  | `api_keys[provider name]`    | `server_env[api_token_key]`  | absent               |
//!
//! Blank values count as absent at every level.

use super::settings::{ApiKeys, ProviderSettings, ServerEnv};

/// Static description of a provider, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderIdentity {
    /// Provider name, also the key into `ApiKeys` and the provider settings map
    pub name: &'static str,
    /// Server environment variable holding a base URL override
    pub base_url_key: &'static str,
    /// Server environment variable holding the API key
    pub api_token_key: &'static str,
    /// Base URL used when no source overrides it
    pub default_base_url: Option<&'static str>,
    /// Where users can obtain an API key, if the provider publishes one
    pub api_key_link: Option<&'static str>,
}

/// Borrowed configuration sources for a single resolution.
#[derive(Debug, Clone, Copy)]
pub struct CredentialSources<'a> {
    pub api_keys: Option<&'a ApiKeys>,
    pub provider_settings: Option<&'a ProviderSettings>,
    pub server_env: &'a ServerEnv,
}

impl<'a> CredentialSources<'a> {
    /// Sources with only server defaults; add the rest with struct update syntax.
    pub fn new(server_env: &'a ServerEnv) -> Self {
        Self {
            api_keys: None,
            provider_settings: None,
            server_env,
        }
    }
}

/// The resolved (base URL, API key) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveCredentials {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl EffectiveCredentials {
    /// Borrow both values, or `None` if either is missing.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.base_url.as_deref()?, self.api_key.as_deref()?))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

impl ProviderIdentity {
    /// Resolve the effective base URL and API key for this provider.
    ///
    /// Pure: never fails and never touches the process environment.
    /// Missing values come back as `None` so the caller decides whether
    /// that is fatal.
    pub fn resolve_credentials(&self, sources: &CredentialSources<'_>) -> EffectiveCredentials {
        let base_url = sources
            .provider_settings
            .and_then(|s| non_blank(s.base_url.as_deref()))
            .map(|url| ("provider_settings", url))
            .or_else(|| {
                non_blank(sources.server_env.get(self.base_url_key).map(String::as_str))
                    .map(|url| ("server_env", url))
            })
            .or_else(|| non_blank(self.default_base_url).map(|url| ("default", url)));

        let api_key = sources
            .api_keys
            .and_then(|keys| non_blank(keys.get(self.name).map(String::as_str)))
            .map(|key| ("api_keys", key))
            .or_else(|| {
                non_blank(sources.server_env.get(self.api_token_key).map(String::as_str))
                    .map(|key| ("server_env", key))
            });

        tracing::trace!(
            provider = %self.name,
            base_url_source = base_url.map(|(source, _)| source).unwrap_or("none"),
            api_key_source = api_key.map(|(source, _)| source).unwrap_or("none"),
            "Resolved provider credentials"
        );

        EffectiveCredentials {
            base_url: base_url.map(|(_, url)| normalize_base_url(url)),
            api_key: api_key.map(|(_, key)| key.to_string()),
        }
    }
}
