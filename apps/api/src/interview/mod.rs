// Interview question generation: input validation, prompt construction,
// the single provider call, and normalization of whatever comes back.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod validation;
