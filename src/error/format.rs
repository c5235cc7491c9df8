use crate::error::{DiscoError, ErrorContext};
use colored::Colorize;

pub fn format_error_chain(error: &DiscoError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}

/// Renders the error with a red header and the suggestion as cyan bullets.
///
/// `use_color` is applied through `colored`'s override so callers can force
/// plain output for pipes and tests.
pub fn format_error_with_color(error: &DiscoError, use_color: bool) -> String {
    colored::control::set_override(use_color);

    let context = ErrorContext::new(error);
    let mut output = format!("{} {error}\n", "Error:".red().bold());

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
        for line in suggestion.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(&format!("{}\n", format!("• {line}").cyan()));
        }
    }

    colored::control::unset_override();
    output
}
