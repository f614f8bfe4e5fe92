//! Routing — runs the handler for a normalized tool selection.
//!
//! The router is stateless: free functions over `AppState`, no process-global
//! workflow object. Placeholder tools report "not yet implemented" instead of
//! silently ending the workflow.

use tracing::debug;

use crate::agents::email;
use crate::dispatch::{normalize, ToolId};
use crate::errors::AppError;
use crate::menu;
use crate::state::AppState;

/// Normalizes `selection` and runs the matching handler to completion.
///
/// Returns the handler's result message, if it produced one. Collaborator and
/// filesystem failures propagate unhandled; they are fatal to the invocation.
pub async fn run(state: &AppState, selection: &str) -> Result<Option<String>, AppError> {
    let tool = normalize(selection);
    debug!("Normalized selection {:?} to {}", selection, tool.as_str());

    match tool {
        ToolId::EmailGenerator => run_email_generator(state).await.map(Some),
        ToolId::Exit => {
            println!("Exiting...");
            Ok(None)
        }
        ToolId::Unknown => {
            println!("Invalid choice. Please try again.");
            Ok(None)
        }
        other => {
            println!("{} is not yet implemented.", other.display_name());
            Ok(None)
        }
    }
}

/// Runs the Email Generator agent end-to-end: prompt for a description,
/// draft through the LLM, persist, report the saved path.
async fn run_email_generator(state: &AppState) -> Result<String, AppError> {
    println!("Running Email Generator...");
    let description =
        menu::prompt_line("Describe the email you want to write (purpose, tone, key points):\n> ")?;

    let output_path =
        email::generate_email(&description, state.llm.as_ref(), &state.config.output_dir).await?;

    let result = format!("Email generated and saved to: {}", output_path.display());
    println!("{result}");
    Ok(result)
}
