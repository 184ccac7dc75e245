// History listeners - Observers for executed/undone events

use crate::command::history::CommandHistory;
use crate::command::trait_def::Command;
use crate::messaging::channels::NotificationProducer;
use crate::messaging::notification::{HistoryEventKind, HistoryNotification};
use ringbuf::traits::Producer;

/// Observer notified after the manager changes the history
///
/// `history` is already updated when the callbacks run, so listeners can
/// read the new undo/redo availability from it.
pub trait HistoryListener: Send {
    /// A command was executed for the first time or redone
    fn on_executed(&mut self, _command: &dyn Command, _history: &CommandHistory) {}

    /// A command was undone
    fn on_undone(&mut self, _command: &dyn Command, _history: &CommandHistory) {}
}

impl<F> HistoryListener for F
where
    F: FnMut(HistoryEventKind, &dyn Command) + Send,
{
    fn on_executed(&mut self, command: &dyn Command, _history: &CommandHistory) {
        self(HistoryEventKind::Executed, command)
    }

    fn on_undone(&mut self, command: &dyn Command, _history: &CommandHistory) {
        self(HistoryEventKind::Undone, command)
    }
}

/// Forwards history events into the lock-free notification channel
pub struct ChannelListener {
    sender: NotificationProducer,
}

impl ChannelListener {
    pub fn new(sender: NotificationProducer) -> Self {
        Self { sender }
    }

    fn send(&mut self, kind: HistoryEventKind, command: &dyn Command, history: &CommandHistory) {
        let notification = HistoryNotification::new(
            kind,
            command.description(),
            history.active_count() > 0,
            history.cancelled_count() > 0,
        );
        if self.sender.try_push(notification).is_err() {
            log::warn!("notification channel full, dropping {:?} event", kind);
        }
    }
}

impl HistoryListener for ChannelListener {
    fn on_executed(&mut self, command: &dyn Command, history: &CommandHistory) {
        self.send(HistoryEventKind::Executed, command, history);
    }

    fn on_undone(&mut self, command: &dyn Command, history: &CommandHistory) {
        self.send(HistoryEventKind::Undone, command, history);
    }
}
