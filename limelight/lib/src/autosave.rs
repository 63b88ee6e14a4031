//! Debounced persistence state for an editing session.
//!
//! Edits accumulate, a quiet period elapses, then the latest content is
//! persisted. This type tracks that lifecycle without owning a clock or
//! a storage backend: callers pass `now` and do the actual write when
//! [`AutosaveBuffer::take_due`] hands them content.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Persistence state reported to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    /// Nothing pending and no recent save.
    Idle,
    /// Edits are pending their quiet period.
    Saving,
    /// A save completed within the hold window.
    Saved,
}

/// Debounce buffer for edit persistence.
///
/// ## Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use limelight_lib::autosave::{AutosaveBuffer, SaveStatus};
///
/// let mut buffer = AutosaveBuffer::default();
/// let start = Instant::now();
///
/// buffer.record_edit("<p>draft</p>", start);
/// assert_eq!(buffer.status(start), SaveStatus::Saving);
///
/// let due = start + AutosaveBuffer::DEFAULT_DEBOUNCE;
/// assert_eq!(buffer.take_due(due), Some("<p>draft</p>".to_string()));
/// assert_eq!(buffer.status(due), SaveStatus::Saved);
/// ```
#[derive(Debug, Clone)]
pub struct AutosaveBuffer {
    debounce: Duration,
    hold: Duration,
    pending: Option<PendingEdit>,
    saved_at: Option<Instant>,
}

#[derive(Debug, Clone)]
struct PendingEdit {
    content: String,
    edited_at: Instant,
}

impl AutosaveBuffer {
    /// Quiet period before a pending edit becomes due.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

    /// How long a completed save keeps reporting [`SaveStatus::Saved`].
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(2000);

    pub fn new(debounce: Duration, hold: Duration) -> Self {
        Self {
            debounce,
            hold,
            pending: None,
            saved_at: None,
        }
    }

    /// Records the full content after an edit, restarting the quiet period.
    pub fn record_edit(&mut self, content: impl Into<String>, now: Instant) {
        self.pending = Some(PendingEdit {
            content: content.into(),
            edited_at: now,
        });
    }

    /// Takes the pending content once its quiet period has elapsed.
    ///
    /// Returns `None` while edits are still settling or nothing is
    /// pending. Taking content marks the save as completed at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|edit| now.duration_since(edit.edited_at) >= self.debounce);
        if !due {
            return None;
        }
        let edit = self.pending.take()?;
        self.saved_at = Some(now);
        Some(edit.content)
    }

    /// Current status for the display layer.
    pub fn status(&self, now: Instant) -> SaveStatus {
        if self.pending.is_some() {
            return SaveStatus::Saving;
        }
        match self.saved_at {
            Some(saved_at) if now.duration_since(saved_at) < self.hold => SaveStatus::Saved,
            _ => SaveStatus::Idle,
        }
    }
}

impl Default for AutosaveBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEBOUNCE, Self::DEFAULT_HOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fresh_buffer_is_idle() {
        let buffer = AutosaveBuffer::default();
        assert_eq!(buffer.status(Instant::now()), SaveStatus::Idle);
    }

    #[test]
    fn test_nothing_is_due_before_the_quiet_period() {
        let start = Instant::now();
        let mut buffer = AutosaveBuffer::default();
        buffer.record_edit("draft", start);
        assert_eq!(buffer.take_due(start + millis(999)), None);
        assert_eq!(buffer.status(start + millis(999)), SaveStatus::Saving);
    }

    #[test]
    fn test_content_is_taken_after_the_quiet_period() {
        let start = Instant::now();
        let mut buffer = AutosaveBuffer::default();
        buffer.record_edit("draft", start);
        let due = start + millis(1000);
        assert_eq!(buffer.take_due(due), Some("draft".to_string()));
        assert_eq!(buffer.take_due(due), None);
        assert_eq!(buffer.status(due), SaveStatus::Saved);
    }

    #[test]
    fn test_saved_expires_into_idle() {
        let start = Instant::now();
        let mut buffer = AutosaveBuffer::default();
        buffer.record_edit("draft", start);
        let saved = start + millis(1000);
        buffer.take_due(saved);
        assert_eq!(buffer.status(saved + millis(1999)), SaveStatus::Saved);
        assert_eq!(buffer.status(saved + millis(2000)), SaveStatus::Idle);
    }

    #[test]
    fn test_later_edits_coalesce_and_restart_the_clock() {
        let start = Instant::now();
        let mut buffer = AutosaveBuffer::default();
        buffer.record_edit("first", start);
        buffer.record_edit("second", start + millis(600));
        // The first edit's deadline has passed, the second's has not.
        assert_eq!(buffer.take_due(start + millis(1200)), None);
        assert_eq!(buffer.take_due(start + millis(1600)), Some("second".to_string()));
    }

    #[test]
    fn test_editing_while_saved_reports_saving_again() {
        let start = Instant::now();
        let mut buffer = AutosaveBuffer::default();
        buffer.record_edit("draft", start);
        buffer.take_due(start + millis(1000));
        buffer.record_edit("more", start + millis(1100));
        assert_eq!(buffer.status(start + millis(1100)), SaveStatus::Saving);
    }

    #[test]
    fn test_custom_windows_are_honored() {
        let start = Instant::now();
        let mut buffer = AutosaveBuffer::new(millis(50), millis(100));
        buffer.record_edit("draft", start);
        assert_eq!(buffer.take_due(start + millis(49)), None);
        assert_eq!(buffer.take_due(start + millis(50)), Some("draft".to_string()));
        let saved = start + millis(50);
        assert_eq!(buffer.status(saved + millis(99)), SaveStatus::Saved);
        assert_eq!(buffer.status(saved + millis(100)), SaveStatus::Idle);
    }
}
