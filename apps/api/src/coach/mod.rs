// Career coaching core: prompt building, concurrent generation, response parsing.
// All LLM calls go through llm_client; no direct Anthropic API calls here.

pub mod advisor;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
