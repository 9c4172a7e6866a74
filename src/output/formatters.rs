//! Formatting utilities for terminal output

use crate::core::Score;

/// Render a score as pegs: one `●` per hit followed by one `○` per blow
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let mut result = String::with_capacity(score.total() * 3);
    result.extend(std::iter::repeat_n('●', score.hits));
    result.extend(std::iter::repeat_n('○', score.blows));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
