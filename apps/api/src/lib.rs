//! Interview question generator: one HTTP endpoint in front of a chat-completion
//! provider, plus the form client that drives it.

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod interview;
pub mod llm_client;
pub mod routes;
pub mod state;
