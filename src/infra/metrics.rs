// ============================================================
// Layer 6 — Score Trend and Numeric Helpers
// ============================================================
// Early stopping watches the dev loss recorded once per epoch.
// If the best loss of the last `window` epochs is no better than
// the best loss before them, training has stalled.
//
//   scores = [3.1, 2.8, 2.9, 2.95],  window = 2
//   recent best  = 2.9
//   earlier best = 2.8          → has not decreased → stop
//
// Boundary behaviour:
//   - a tie counts as decreased
//   - if the history is no longer than the window (including
//     an empty history, or window 0) there is nothing to compare
//     against, so the answer is "still decreasing"
//
// truncate() chops digits toward zero; it never rounds up.
// Digit counts past f64 precision leave the value unchanged.
//
// Reference: Prechelt (1998) Early Stopping — But When?

use serde::{Deserialize, Serialize};

/// Largest power of ten that is still a finite f64
const MAX_DIGITS: u32 = 308;

/// True if the lowest of the last `window` scores is at most the
/// lowest score before them.
pub fn has_decreased(scores: &[f64], window: usize) -> bool {
    if window == 0 || scores.len() <= window {
        return true;
    }

    let (earlier, recent) = scores.split_at(scores.len() - window);
    let recent_best  = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let earlier_best = earlier.iter().copied().fold(f64::INFINITY, f64::min);
    recent_best <= earlier_best
}

/// Truncate `value` to `digits` decimal places, toward zero.
///
///   truncate(98.6, 0)     → 98.0
///   truncate(1.234567, 3) → 1.234
///   truncate(-2.71, 1)    → -2.7
pub fn truncate(value: f64, digits: u32) -> f64 {
    let scale  = 10f64.powi(digits.min(MAX_DIGITS) as i32);
    let scaled = value * scale;
    // Beyond f64 precision there is nothing left to chop
    if !scaled.is_finite() {
        return value;
    }
    scaled.trunc() / scale
}

// ─── ScoreHistory ─────────────────────────────────────────────────────────────
/// Per-epoch evaluation scores (lower is better).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistory {
    scores: Vec<f64>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for the epoch that just finished
    pub fn push(&mut self, score: f64) {
        tracing::debug!("Epoch {} score: {:.4}", self.scores.len() + 1, score);
        self.scores.push(score);
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Lowest score so far
    pub fn best(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::min)
    }

    pub fn has_decreased(&self, window: usize) -> bool {
        has_decreased(&self.scores, window)
    }

    /// True once `patience` epochs have passed without improvement
    pub fn should_stop(&self, patience: usize) -> bool {
        !self.has_decreased(patience)
    }
}

impl From<Vec<f64>> for ScoreHistory {
    fn from(scores: Vec<f64>) -> Self {
        Self { scores }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_decreased() {
        fn check(scores: &[f64], window: usize, expected: bool) {
            assert_eq!(has_decreased(scores, window), expected, "{scores:?} / {window}");
        }

        check(&[2.0, 1.0], 1, true);
        check(&[2.0, 1.0], 2, true);
        check(&[1.0, 2.0], 2, true);
        check(&[1.0, 2.0], 1, false);
        check(&[], 1, true);
        check(&[1.0, 2.0, 1.0, 4.0], 3, true);
    }

    #[test]
    fn test_window_zero_looks_at_whole_history() {
        assert!(has_decreased(&[1.0, 2.0, 3.0], 0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(98.6, 0), 98.0);
        assert_eq!(truncate(1.234567, 3), 1.234);
        assert_eq!(truncate(-2.71, 1), -2.7);
    }

    #[test]
    fn test_truncate_huge_digit_counts() {
        assert_eq!(truncate(1.5, 400), 1.5);
        assert_eq!(truncate(1.5, u32::MAX), 1.5);
        assert_eq!(truncate(1e300, 20), 1e300);
        assert!(!truncate(0.123, 309).is_nan());
    }

    #[test]
    fn test_score_history_early_stopping() {
        let mut history = ScoreHistory::new();
        for score in [3.1, 2.8, 2.9, 2.95] {
            history.push(score);
        }
        assert_eq!(history.best(), Some(2.8));
        assert!(history.should_stop(2));
        assert!(!history.should_stop(3));

        history.push(2.5);
        assert!(!history.should_stop(2));
    }

    #[test]
    fn test_empty_history() {
        let history = ScoreHistory::new();
        assert_eq!(history.best(), None);
        assert!(!history.should_stop(1));
    }
}
