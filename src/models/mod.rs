//! Model catalog and discovery.
//!
//! This module handles:
//! - Model descriptor types
//! - The static, compiled-in model catalog
//! - Best-effort discovery of live models from the provider's API

pub mod catalog;
pub mod discovery;
mod types;

pub use catalog::{static_models, STATIC_MODEL_MAX_TOKENS};
pub use discovery::{discover_models, FallbackReason, ModelDiscovery, DYNAMIC_MODEL_MAX_TOKENS};
pub use types::ModelDescriptor;
