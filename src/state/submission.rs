//! Submission controller state
//!
//! The submission is simulated: a fixed delay stands in for network
//! latency and always completes successfully. The state here anchors
//! the in-progress window to an `Instant` so the draw loop can animate
//! the spinner without any extra bookkeeping.

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Delay used when the config does not override it
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Spinner frames shown on the submit button while in progress
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Proof of a completed submission, shown in the confirmation dialog.
/// Nothing is persisted; this exists only for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Short reference for display (first uuid group)
    pub fn short_reference(&self) -> String {
        self.reference
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the simulated submission
#[derive(Debug, Clone, Default)]
pub enum Submission {
    #[default]
    Idle,
    InProgress {
        started_at: Instant,
    },
}

impl Submission {
    /// Mark the submission as started now
    pub fn begin(&mut self) {
        *self = Submission::InProgress {
            started_at: Instant::now(),
        };
    }

    /// Clear the in-progress window and mint a receipt
    pub fn finish(&mut self) -> Receipt {
        *self = Submission::Idle;
        Receipt::new()
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Submission::InProgress { .. })
    }

    /// Current spinner frame, derived from elapsed time
    pub fn spinner_frame(&self) -> &'static str {
        match self {
            Submission::Idle => "",
            Submission::InProgress { started_at } => {
                let ticks = started_at.elapsed().as_millis() / 80;
                SPINNER_FRAMES[(ticks as usize) % SPINNER_FRAMES.len()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let submission = Submission::default();
        assert!(!submission.is_in_progress());
        assert_eq!(submission.spinner_frame(), "");
    }

    #[test]
    fn test_begin_marks_in_progress() {
        let mut submission = Submission::default();
        submission.begin();
        assert!(submission.is_in_progress());
    }

    #[test]
    fn test_finish_returns_to_idle_with_receipt() {
        let mut submission = Submission::default();
        submission.begin();
        let receipt = submission.finish();
        assert!(!submission.is_in_progress());
        assert!(!receipt.short_reference().is_empty());
    }

    #[test]
    fn test_receipts_are_distinct() {
        let a = Receipt::new();
        let b = Receipt::new();
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn test_short_reference_is_eight_chars() {
        let receipt = Receipt::new();
        assert_eq!(receipt.short_reference().len(), 8);
    }

    #[test]
    fn test_spinner_frame_while_in_progress() {
        let mut submission = Submission::default();
        submission.begin();
        assert!(SPINNER_FRAMES.contains(&submission.spinner_frame()));
    }
}
