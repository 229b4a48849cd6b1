// Interview endpoints: question generation and answer evaluation.
// All LLM calls go through the completion module — no direct provider calls here.

pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod questions;

#[cfg(test)]
pub mod test_support;
