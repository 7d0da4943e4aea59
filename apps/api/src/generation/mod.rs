// Opener generation pipeline: lead normalization, prompt assembly, the LLM
// call, and opener extraction.
// All LLM calls go through llm_client — no direct completions-API calls here.

pub mod generator;
pub mod handlers;
pub mod lead;
pub mod openers;
pub mod prompts;
