//! Static GLHF model catalog.
//!
//! Known-good models with empirically chosen token limits. This list is
//! compiled in so it is available when the network is not.

use super::types::ModelDescriptor;

/// Token limit applied to every catalog entry.
pub const STATIC_MODEL_MAX_TOKENS: u32 = 8000;

/// Model IDs and labels served by GLHF.
///
/// Format: `("hf:org/model", "Display Label")`
const GLHF_MODELS: &[(&str, &str)] = &[
    ("hf:Qwen/Qwen2.5-Coder-32B-Instruct", "Qwen 2.5 Coder 32B Instruct"),
    ("hf:meta-llama/Llama-3.1-405B-Instruct", "Llama 3.1 405B Instruct"),
    ("hf:meta-llama/Llama-3.1-70B-Instruct", "Llama 3.1 70B Instruct"),
    ("hf:meta-llama/Llama-3.1-8B-Instruct", "Llama 3.1 8B Instruct"),
    ("hf:meta-llama/Llama-3.2-3B-Instruct", "Llama 3.2 3B Instruct"),
    (
        "hf:meta-llama/Llama-3.2-11B-Vision-Instruct",
        "Llama 3.2 11B Vision Instruct",
    ),
    (
        "hf:meta-llama/Llama-3.2-90B-Vision-Instruct",
        "Llama 3.2 90B Vision Instruct",
    ),
    ("hf:Qwen/Qwen2.5-72B-Instruct", "Qwen 2.5 72B Instruct"),
    ("hf:meta-llama/Llama-3.3-70B-Instruct", "Llama 3.3 70B Instruct"),
    ("hf:google/gemma-2-9b-it", "Gemma 2 9B IT"),
    ("hf:google/gemma-2-27b-it", "Gemma 2 27B IT"),
    ("hf:mistralai/Mistral-7B-Instruct-v0.3", "Mistral 7B Instruct v0.3"),
    ("hf:mistralai/Mixtral-8x7B-Instruct-v0.1", "Mixtral 8x7B Instruct v0.1"),
    ("hf:mistralai/Mixtral-8x22B-Instruct-v0.1", "Mixtral 8x22B Instruct v0.1"),
    (
        "hf:NousResearch/Nous-Hermes-2-Mixtral-8x7B-DPO",
        "Nous Hermes 2 Mixtral 8x7B DPO",
    ),
    ("hf:Qwen/Qwen2.5-7B-Instruct", "Qwen 2.5 7B Instruct"),
    ("hf:upstage/SOLAR-10.7B-Instruct-v1.0", "SOLAR 10.7B Instruct v1.0"),
    (
        "hf:nvidia/Llama-3.1-Nemotron-70B-Instruct-HF",
        "Llama 3.1 Nemotron 70B Instruct",
    ),
];

/// Build the static catalog, tagging each entry with `provider`.
pub fn static_models(provider: &str) -> Vec<ModelDescriptor> {
    GLHF_MODELS
        .iter()
        .map(|&(id, label)| ModelDescriptor::new(id, label, provider, STATIC_MODEL_MAX_TOKENS))
        .collect()
}
