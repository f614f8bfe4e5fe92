//! Interactive menu rendering and line input.

use std::io::{self, Write};

use crate::dispatch::TOOLS;
use crate::errors::AppError;

/// Prints the numbered tool menu.
pub fn print_menu() {
    println!("Hello from toolhub!");
    println!("Use any of the following tools:");
    for (position, tool) in TOOLS.iter().enumerate() {
        println!("{}. {}", position + 1, tool.menu_label());
    }
}

/// Prints `prompt` without a trailing newline and reads one line from stdin.
/// The returned string has its trailing line break stripped.
pub fn prompt_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
