// History notifications for undo/redo button state and debug views

use chrono::Utc;

/// What happened to the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEventKind {
    /// A command was executed or redone
    Executed,
    /// A command was undone
    Undone,
}

/// Notification with timestamp and the resulting undo/redo availability
#[derive(Debug, Clone)]
pub struct HistoryNotification {
    pub kind: HistoryEventKind,
    /// Description of the affected command
    pub description: String,
    pub can_undo: bool,
    pub can_redo: bool,
    pub timestamp: i64, // Unix timestamp in milliseconds
}

impl HistoryNotification {
    /// Create a notification stamped with the current time
    pub fn new(kind: HistoryEventKind, description: String, can_undo: bool, can_redo: bool) -> Self {
        Self {
            kind,
            description,
            can_undo,
            can_redo,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Check whether the notification is younger than `max_age_ms`
    pub fn is_recent(&self, max_age_ms: i64) -> bool {
        let now = Utc::now().timestamp_millis();
        now.saturating_sub(self.timestamp) < max_age_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let notif = HistoryNotification::new(
            HistoryEventKind::Undone,
            "Apply marble".to_string(),
            false,
            true,
        );

        assert_eq!(notif.kind, HistoryEventKind::Undone);
        assert_eq!(notif.description, "Apply marble");
        assert!(!notif.can_undo);
        assert!(notif.can_redo);
        assert!(notif.timestamp > 0);
    }

    #[test]
    fn test_notification_is_recent() {
        let notif = HistoryNotification::new(HistoryEventKind::Executed, "Test".into(), true, false);

        assert!(notif.is_recent(10_000));
    }
}
