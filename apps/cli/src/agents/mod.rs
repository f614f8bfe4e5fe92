// Agent implementations for the menu tools.
// Only the Email Generator is implemented; the router reports the remaining
// menu entries as not yet implemented. All LLM calls go through llm_client.

pub mod email;
pub mod prompts;
