// Framework generation: catalog of framework shapes, prompt construction,
// completion orchestration, and response normalization.
// All completion calls go through llm_client — no direct API calls here.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
