// LLM prompt constants for the agent implementations.
// Each agent that calls the LLM keeps its prompts here.

/// System prompt for the Email Generator — final email body only.
pub const EMAIL_SYSTEM: &str = "You are an expert email writer. \
    Given a short description of the email a user wants to send, \
    write a clear, concise, and well-formatted email. \
    Do not include any explanations, only the final email body.";
