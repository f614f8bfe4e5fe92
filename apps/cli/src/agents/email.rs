//! Email Generator agent.
//!
//! Takes a free-text description of the email the user wants to send, drafts
//! it through the LLM collaborator, and persists the draft under the output
//! directory as the next file in the `email_one.txt`, `email_two.txt`, ...
//! sequence.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::agents::prompts::EMAIL_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Word suffixes for the first twelve drafts. Index 13 onward falls back to
/// the decimal numeral (`email_13.txt`).
const NUMBER_WORDS: [&str; 12] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve",
];

/// Drafts an email from `description` and writes it verbatim to the next
/// sequential path under `output_dir`. Returns the path written.
///
/// The description is passed through to the collaborator unvalidated, empty
/// strings included. The output path is resolved after the response arrives,
/// immediately before the write, and is never cached across calls.
pub async fn generate_email(
    description: &str,
    llm: &dyn TextGenerator,
    output_dir: &Path,
) -> Result<PathBuf, AppError> {
    let email_text = llm.generate(description, EMAIL_SYSTEM).await?;

    let output_path = next_output_path(output_dir)?;
    fs::write(&output_path, &email_text)?;

    info!("Email draft written to {}", output_path.display());
    Ok(output_path)
}

/// Resolves the next draft path: `email_<suffix>.txt`, where the 1-based
/// index is the count of existing drafts plus one.
///
/// Creates `output_dir` recursively if absent. The count-then-write sequence
/// is not atomic: two concurrent callers can observe the same count and
/// resolve the same path. Callers run one at a time.
pub fn next_output_path(output_dir: &Path) -> Result<PathBuf, AppError> {
    fs::create_dir_all(output_dir)?;

    let count = fs::read_dir(output_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|entry| is_email_draft(&entry.file_name()))
        .count();

    let suffix = index_suffix(count + 1);
    Ok(output_dir.join(format!("email_{suffix}.txt")))
}

/// Converts a 1-based index to its filename suffix: `one`..`twelve` for
/// 1 through 12, the decimal numeral for 13 and above.
fn index_suffix(index: usize) -> String {
    match index {
        1..=12 => NUMBER_WORDS[index - 1].to_string(),
        _ => index.to_string(),
    }
}

/// Whether `name` matches the draft pattern `email_<word-or-number>.txt`.
fn is_email_draft(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    name.strip_prefix("email_")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .is_some_and(|stem| !stem.is_empty() && stem.chars().all(|c| c.is_ascii_alphanumeric()))
}
