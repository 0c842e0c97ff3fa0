//! Configuration sources and credential resolution.

mod credentials;
mod settings;

pub use credentials::{CredentialSources, EffectiveCredentials, ProviderIdentity};
pub use settings::{ApiKeys, ProviderSettings, ServerEnv};
