use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state handed to the dispatcher and agent handlers.
///
/// Built fresh in `main` for each invocation; there is no process-global
/// workflow object and no teardown beyond process exit.
#[derive(Clone)]
pub struct AppState {
    /// LLM collaborator behind the `TextGenerator` seam so agents stay
    /// testable without the network.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
