//! Output formatting utilities for the CLI.
//!
//! Keys are always masked on per-line output; the unmasked list is printed
//! only in the final summary, mirroring the output file contents.

use console::style;

use crate::domain::models::{mask_key, ValidationResult};

/// Width of the banner and separator rules.
const RULE_WIDTH: usize = 50;

/// Format one per-key status line with a colored marker.
pub fn status_line(result: &ValidationResult) -> String {
    let masked = mask_key(&result.key);
    if result.is_valid() {
        format!(
            "{} {}: {}",
            style("[VALID]").green().bold(),
            masked,
            result.status
        )
    } else {
        format!(
            "{} {}: {}",
            style("[FAIL]").red().bold(),
            masked,
            result.status
        )
    }
}

/// Format the skip notice for a rejected input line.
///
/// Long lines are masked in case the rejected value is still a secret;
/// short ones are shown verbatim.
pub fn rejected_line(line: &str) -> String {
    let shown = if line.chars().count() > 12 {
        mask_key(line)
    } else {
        line.to_string()
    };
    format!("Skipping invalid key format: {}", shown)
}

/// The interactive banner shown before collection starts.
pub fn banner() -> String {
    format!(
        "\nOpenAI API Key Checker\n{}\n\nPaste your API keys (one per line)\nPress Enter twice when done (i.e., leave a blank line)\n{}",
        "=".repeat(RULE_WIDTH),
        "-".repeat(RULE_WIDTH)
    )
}

/// Horizontal rule separating report sections.
pub fn separator() -> String {
    "-".repeat(RULE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::KeyStatus;

    #[test]
    fn test_status_line_masks_key() {
        let result = ValidationResult::new("sk-proj-abcdefghijklmnop1234", KeyStatus::Valid);
        let line = status_line(&result);
        assert!(line.contains("sk-proj-...1234"));
        assert!(!line.contains("abcdefghijklmnop"));
        assert!(line.contains("[VALID]"));
        assert!(line.ends_with("Valid"));
    }

    #[test]
    fn test_status_line_failure_label() {
        let result = ValidationResult::new("sk-proj-abcdefghijklmnop1234", KeyStatus::RateLimited);
        let line = status_line(&result);
        assert!(line.contains("[FAIL]"));
        assert!(line.ends_with("Rate limited"));
    }

    #[test]
    fn test_rejected_line_masks_long_values() {
        let line = rejected_line("definitely-not-an-sk-key-but-long");
        assert!(line.contains("definite...long"));
        assert!(!line.contains("definitely-not"));
    }

    #[test]
    fn test_rejected_line_shows_short_values() {
        let line = rejected_line("not-a-key");
        assert!(line.ends_with("not-a-key"));
    }
}
