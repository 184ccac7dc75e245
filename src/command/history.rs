// CommandHistory - Bounded, cursor-based command log

use crate::command::trait_def::Command;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered log of executed commands with a single cursor
///
/// Entries up to and including the cursor are applied. The `cancelled`
/// entries after the cursor have been undone but are kept for redo.
///
/// ```text
///   [A, B, C, D, E]      cancelled = 2
///          ^ cursor      active    = 3
/// ```
///
/// The cursor is derived from the counts (`active - 1`), so it can never
/// point at an evicted entry.
///
/// # Capacity
/// Once `max_size` entries are stored, adding evicts the oldest one. A
/// pending redo branch is discarded *before* eviction is considered, so a
/// partially undone history never loses the entry under the cursor to make
/// room for a command that replaces the undone tail.
pub struct CommandHistory {
    commands: VecDeque<Box<dyn Command>>,
    max_size: usize,
    cancelled: usize,
}

/// Read-only copy of the history state for debug views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Descriptions of all retained commands, oldest first
    pub entries: Vec<String>,
    /// Index of the last applied entry
    pub cursor: Option<usize>,
    pub count: usize,
    pub active_count: usize,
    pub cancelled_count: usize,
    pub max_size: usize,
    pub taken_at: DateTime<Utc>,
}

impl CommandHistory {
    /// Create an empty history holding at most `max_size` commands
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_size: usize) -> Self {
        if max_size == 0 {
            log::warn!("history: max_size of 0 requested, using 1");
        }
        let max_size = max_size.max(1);

        Self {
            commands: VecDeque::with_capacity(max_size),
            max_size,
            cancelled: 0,
        }
    }

    /// Record a command as the newest applied entry
    ///
    /// Drops any undone entries after the cursor, then evicts the oldest
    /// entry if the log is full.
    pub fn add(&mut self, command: Box<dyn Command>) {
        if self.cancelled > 0 {
            let active = self.active_count();
            log::debug!("history: discarding {} undone command(s)", self.cancelled);
            self.commands.truncate(active);
            self.cancelled = 0;
        }

        while self.commands.len() >= self.max_size {
            if let Some(evicted) = self.commands.pop_front() {
                log::debug!("history: evicted '{}'", evicted.description());
            }
        }

        self.commands.push_back(command);
    }

    /// Step the cursor back one entry
    ///
    /// Returns the command the cursor just left, or None when nothing is
    /// applied.
    pub fn cancel(&mut self) -> Option<&mut (dyn Command + 'static)> {
        let cursor = self.cursor()?;
        self.cancelled += 1;
        self.commands.get_mut(cursor).map(|command| &mut **command)
    }

    /// Step the cursor forward one entry
    ///
    /// Returns the command that became applied again, or None when there is
    /// nothing to redo.
    pub fn restore(&mut self) -> Option<&mut (dyn Command + 'static)> {
        if self.cancelled == 0 {
            return None;
        }
        let next = self.active_count();
        self.cancelled -= 1;
        self.commands.get_mut(next).map(|command| &mut **command)
    }

    /// Index of the last applied entry
    pub fn cursor(&self) -> Option<usize> {
        self.active_count().checked_sub(1)
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Number of applied entries (count - cancelled)
    pub fn active_count(&self) -> usize {
        self.commands.len() - self.cancelled
    }

    /// Number of undone entries still available for redo
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The command an undo would revert
    pub fn peek_undo(&self) -> Option<&dyn Command> {
        self.cursor()
            .and_then(|cursor| self.commands.get(cursor))
            .map(|command| &**command)
    }

    /// The command a redo would re-apply
    pub fn peek_redo(&self) -> Option<&dyn Command> {
        if self.cancelled == 0 {
            return None;
        }
        self.commands
            .get(self.active_count())
            .map(|command| &**command)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.cancelled = 0;
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            entries: self.commands.iter().map(|c| c.description()).collect(),
            cursor: self.cursor(),
            count: self.count(),
            active_count: self.active_count(),
            cancelled_count: self.cancelled,
            max_size: self.max_size,
            taken_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::trait_def::CommandResult;
    use crate::scene::SceneBackend;

    struct Marker(&'static str);

    impl Command for Marker {
        fn execute(&mut self, _scene: &mut dyn SceneBackend) -> CommandResult<()> {
            Ok(())
        }

        fn undo(&mut self, _scene: &mut dyn SceneBackend) -> CommandResult<()> {
            Ok(())
        }

        fn description(&self) -> String {
            self.0.to_string()
        }
    }

    fn history_with(max_size: usize, names: &[&'static str]) -> CommandHistory {
        let mut history = CommandHistory::new(max_size);
        for name in names {
            history.add(Box::new(Marker(name)));
        }
        history
    }

    fn entries(history: &CommandHistory) -> Vec<String> {
        history.snapshot().entries
    }

    #[test]
    fn test_empty_history() {
        let mut history = CommandHistory::new(10);

        assert_eq!(history.count(), 0);
        assert_eq!(history.cursor(), None);
        assert!(history.cancel().is_none());
        assert!(history.restore().is_none());
        assert_eq!(history.count(), 0);
        assert_eq!(history.cancelled_count(), 0);
    }

    #[test]
    fn test_add_moves_cursor() {
        let history = history_with(10, &["A", "B"]);

        assert_eq!(history.count(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.peek_undo().unwrap().description(), "B");
        assert!(history.peek_redo().is_none());
    }

    #[test]
    fn test_cancel_returns_command_left_by_cursor() {
        let mut history = history_with(10, &["A", "B", "C"]);

        assert_eq!(history.cancel().unwrap().description(), "C");
        assert_eq!(history.cancel().unwrap().description(), "B");
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.cancelled_count(), 2);
        assert_eq!(history.active_count(), 1);
        assert_eq!(history.peek_redo().unwrap().description(), "B");
    }

    #[test]
    fn test_cancel_past_first_entry_is_noop() {
        let mut history = history_with(10, &["A"]);

        assert!(history.cancel().is_some());
        assert_eq!(history.cursor(), None);
        assert!(history.cancel().is_none());
        assert_eq!(history.cancelled_count(), 1);
        assert_eq!(history.count(), 1);
    }

    #[test]
    fn test_redo_round_trip() {
        let mut history = history_with(10, &["A"]);

        history.cancel();
        let restored = history.restore().unwrap().description();

        assert_eq!(restored, "A");
        assert_eq!(history.cancelled_count(), 0);
        assert_eq!(history.active_count(), 1);
        assert!(history.restore().is_none());
    }

    #[test]
    fn test_add_discards_redo_branch() {
        let mut history = history_with(10, &["A", "B", "C"]);
        history.cancel();
        history.cancel();

        history.add(Box::new(Marker("D")));

        assert_eq!(entries(&history), vec!["A", "D"]);
        assert_eq!(history.cancelled_count(), 0);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_bounded_eviction_keeps_newest() {
        let history = history_with(3, &["A", "B", "C", "D", "E"]);

        assert_eq!(history.count(), 3);
        assert_eq!(entries(&history), vec!["C", "D", "E"]);
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn test_full_history_partially_undone_keeps_cursor_entry() {
        // Branch is dropped first, so "A" under the cursor survives
        let mut history = history_with(3, &["A", "B", "C"]);
        history.cancel();
        history.cancel();

        history.add(Box::new(Marker("D")));

        assert_eq!(entries(&history), vec!["A", "D"]);
        assert_eq!(history.peek_undo().unwrap().description(), "D");
    }

    #[test]
    fn test_fully_undone_history_then_refill() {
        let mut history = history_with(3, &["A", "B", "C"]);
        while history.cancel().is_some() {}
        assert_eq!(history.cancelled_count(), 3);

        for name in ["D", "E", "F", "G"] {
            history.add(Box::new(Marker(name)));
        }

        assert_eq!(entries(&history), vec!["E", "F", "G"]);
        assert_eq!(history.cancelled_count(), 0);
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let history = history_with(0, &["A", "B"]);

        assert_eq!(history.max_size(), 1);
        assert_eq!(entries(&history), vec!["B"]);
    }

    #[test]
    fn test_snapshot_reports_counts() {
        let mut history = history_with(5, &["A", "B", "C"]);
        history.cancel();

        let snapshot = history.snapshot();
        assert_eq!(snapshot.entries, vec!["A", "B", "C"]);
        assert_eq!(snapshot.cursor, Some(1));
        assert_eq!(snapshot.count, 3);
        assert_eq!(snapshot.active_count, 2);
        assert_eq!(snapshot.cancelled_count, 1);
        assert_eq!(snapshot.max_size, 5);
    }

    #[test]
    fn test_clear() {
        let mut history = history_with(5, &["A", "B"]);
        history.cancel();
        history.clear();

        assert_eq!(history.count(), 0);
        assert_eq!(history.cancelled_count(), 0);
        assert_eq!(history.cursor(), None);
    }
}
