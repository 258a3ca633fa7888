// Newsletter name generation.
// Implements: request validation, prompt construction, one LLM call, reply parsing.
// All LLM calls go through llm_client; nothing here talks HTTP to the provider.

pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod reply_parser;
