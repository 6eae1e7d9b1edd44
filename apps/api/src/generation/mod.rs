// Marketing copy generation service (the external side of the content contract).
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
