// src/core/diagnostics.rs
//! Pretty, colored, column-underlined solver errors.

use colored::Colorize;

use crate::core::dispatch::message_for;
use crate::core::error::SolveError;

/// Renders `err` against the equation text. Format errors with a known column
/// get the input echoed with a caret under the offending character.
pub fn render_error(source: &str, err: &SolveError) -> String {
    let mut out = format!("{} {}\n", "error:".bright_red().bold(), message_for(err).bright_white());
    if let Some(col) = err.column() {
        let gutter = "|".dimmed();
        let underline = " ".repeat(col.saturating_sub(1)) + "^";
        out.push_str(&format!(" {} {}\n", gutter, source));
        out.push_str(&format!(" {} {}\n", gutter, underline.bright_red()));
    }
    out
}

pub fn print_error(source: &str, err: &SolveError) {
    eprint!("{}", render_error(source, err));
}
