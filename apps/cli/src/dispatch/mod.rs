//! Tool dispatch — maps a raw menu selection to a canonical tool identifier.
//!
//! The alias table is declarative: each tool enumerates the literal selection
//! strings it accepts (menu position, lower-case display name, numbered label
//! form) and normalization evaluates the table uniformly. There is no fuzzy
//! or partial matching; anything else is `ToolId::Unknown`.

pub mod router;

/// Canonical identifier for a menu tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    ResumeAnalyzer,
    EmailGenerator,
    ReadmeGenerator,
    ExplainCodebase,
    CodeReview,
    CodeSummarizer,
    WebSearch,
    JobSearch,
    ChatWithLlm,
    Exit,
    /// Selection matched no alias. Never shown in the menu.
    Unknown,
}

/// Every tool reachable from the menu, in menu order (positions 1–10).
pub const TOOLS: [ToolId; 10] = [
    ToolId::ResumeAnalyzer,
    ToolId::EmailGenerator,
    ToolId::ReadmeGenerator,
    ToolId::ExplainCodebase,
    ToolId::CodeReview,
    ToolId::CodeSummarizer,
    ToolId::WebSearch,
    ToolId::JobSearch,
    ToolId::ChatWithLlm,
    ToolId::Exit,
];

impl ToolId {
    /// The canonical tag for this tool.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::ResumeAnalyzer => "resume_analyzer",
            ToolId::EmailGenerator => "email_generator",
            ToolId::ReadmeGenerator => "readme_generator",
            ToolId::ExplainCodebase => "explain_codebase",
            ToolId::CodeReview => "code_review",
            ToolId::CodeSummarizer => "code_summarizer",
            ToolId::WebSearch => "web_search",
            ToolId::JobSearch => "job_search",
            ToolId::ChatWithLlm => "chat_with_llm",
            ToolId::Exit => "exit",
            ToolId::Unknown => "unknown",
        }
    }

    /// Human-readable name used in status messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolId::ResumeAnalyzer => "Resume Analyzer",
            ToolId::EmailGenerator => "Email Generator",
            ToolId::ReadmeGenerator => "Readme Generator",
            ToolId::ExplainCodebase => "Explain the codebase",
            ToolId::CodeReview => "Code Review",
            ToolId::CodeSummarizer => "Code Summarizer",
            ToolId::WebSearch => "Web search",
            ToolId::JobSearch => "Job search",
            ToolId::ChatWithLlm => "Chat with a LLM",
            ToolId::Exit => "Exit",
            ToolId::Unknown => "Unknown",
        }
    }

    /// The exact line shown for this tool in the numbered menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            ToolId::ResumeAnalyzer => "Resume Analyzer.",
            ToolId::EmailGenerator => "Email Generator.",
            ToolId::ReadmeGenerator => "Readme Generator.",
            ToolId::ExplainCodebase => "Explain the codebase.",
            ToolId::CodeReview => "Code Review.",
            ToolId::CodeSummarizer => "Code Summarizer.",
            ToolId::WebSearch => "Web search for a single query.",
            ToolId::JobSearch => "Job search from S&P 500 companies based on your resume.",
            ToolId::ChatWithLlm => "Chat with a LLM.",
            ToolId::Exit => "Exit",
            ToolId::Unknown => "",
        }
    }

    /// The fixed selection strings accepted for this tool: its menu position,
    /// its lower-case display name, and its numbered label form.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ToolId::ResumeAnalyzer => &["1", "resume analyzer", "1. resume_analyzer"],
            ToolId::EmailGenerator => &["2", "email generator", "2. email_generator"],
            ToolId::ReadmeGenerator => &["3", "readme generator", "3. readme_generator"],
            ToolId::ExplainCodebase => &["4", "explain the codebase", "4. explain_codebase"],
            ToolId::CodeReview => &["5", "code review", "5. code_review"],
            ToolId::CodeSummarizer => &["6", "code summarizer", "6. code_summarizer"],
            ToolId::WebSearch => &["7", "web search", "7. web_search"],
            ToolId::JobSearch => &["8", "job search", "8. job_search"],
            ToolId::ChatWithLlm => &["9", "chat with a llm", "9. chat_with_llm"],
            ToolId::Exit => &["10", "exit", "10. exit"],
            ToolId::Unknown => &[],
        }
    }
}

/// Normalizes a raw menu selection into a canonical tool identifier.
///
/// Surrounding whitespace is trimmed and the selection is lower-cased before
/// matching against each tool's alias set.
pub fn normalize(selection: &str) -> ToolId {
    let normalized = selection.trim().to_lowercase();
    TOOLS
        .iter()
        .copied()
        .find(|tool| tool.aliases().contains(&normalized.as_str()))
        .unwrap_or(ToolId::Unknown)
}
