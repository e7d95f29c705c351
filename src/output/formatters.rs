//! Formatting utilities for terminal output

use crate::core::Feedback;
use indicatif::{ProgressBar, ProgressStyle};

/// Format feedback as pegs: `●` exact, `○` wrong position, `·` for the rest
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let wrong = usize::from(feedback.wrong());
    let rest = code_length.saturating_sub(exact + wrong);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(wrong), "·".repeat(rest))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one cell of the round table as `05.25`
///
/// `None` marks a table without any cracked code.
#[must_use]
pub fn round_cell(percentage: Option<f64>) -> String {
    match percentage {
        None => "  -  ".to_string(),
        Some(p) if p >= 99.995 => "100.0".to_string(),
        Some(p) => format!("{p:05.2}"),
    }
}

/// Terminal progress bar for long runs, hidden when `visible` is false
#[must_use]
pub fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_fill_the_code_length() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 3), "···");
        assert_eq!(feedback_pegs(Feedback::new(3, 0), 3), "●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn round_cells() {
        assert_eq!(round_cell(Some(5.25)), "05.25");
        assert_eq!(round_cell(Some(42.0)), "42.00");
        assert_eq!(round_cell(Some(100.0)), "100.0");
        assert_eq!(round_cell(None), "  -  ");
    }
}
