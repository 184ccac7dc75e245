// CommandManager - Runs commands and keeps the undo/redo history

use crate::command::history::{CommandHistory, HistorySnapshot};
use crate::command::listener::HistoryListener;
use crate::command::trait_def::{Command, CommandResult};
use crate::messaging::notification::HistoryEventKind;
use crate::scene::SceneBackend;

/// Default maximum number of commands to keep in history
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Manages command execution and undo/redo functionality
///
/// The manager owns exactly one [`CommandHistory`]. Effects are delegated
/// to the commands themselves; the manager only sequences them and keeps
/// the bookkeeping.
///
/// # Failure semantics
/// - `execute_command`: the effect runs first; a failing effect is not
///   recorded.
/// - `undo_command` / `redo_command`: the cursor moves first, then the
///   effect runs. A failing effect is returned to the caller and the
///   cursor stays where it moved.
pub struct CommandManager {
    history: CommandHistory,
    listeners: Vec<Box<dyn HistoryListener>>,
}

impl CommandManager {
    /// Create a new CommandManager with default settings
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new CommandManager with a custom history limit
    pub fn with_capacity(max_history: usize) -> Self {
        Self {
            history: CommandHistory::new(max_history),
            listeners: Vec::new(),
        }
    }

    /// Register an observer for executed/undone events
    pub fn add_listener(&mut self, listener: Box<dyn HistoryListener>) {
        self.listeners.push(listener);
    }

    /// Execute a command and record it
    ///
    /// Discards anything that was undone, and evicts the oldest entry when
    /// the history is full.
    ///
    /// # Errors
    /// Returns the command's error if its effect fails; nothing is recorded.
    pub fn execute_command(
        &mut self,
        mut command: Box<dyn Command>,
        scene: &mut dyn SceneBackend,
    ) -> CommandResult<()> {
        command.execute(scene)?;
        log::debug!("history: executed '{}'", command.description());

        self.history.add(command);
        self.notify(HistoryEventKind::Executed);

        Ok(())
    }

    /// Undo the last applied command
    ///
    /// Returns the description of the undone command, or `None` when there
    /// is nothing to undo.
    pub fn undo_command(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<Option<String>> {
        if self.history.active_count() == 0 {
            return Ok(None);
        }
        let Some(command) = self.history.cancel() else {
            return Ok(None);
        };

        let description = command.description();
        command.undo(scene)?;
        log::debug!("history: undone '{}'", description);

        self.notify(HistoryEventKind::Undone);
        Ok(Some(description))
    }

    /// Re-apply the most recently undone command
    ///
    /// Returns the description of the redone command, or `None` when there
    /// is nothing to redo.
    pub fn redo_command(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<Option<String>> {
        if self.history.cancelled_count() == 0 {
            return Ok(None);
        }
        let Some(command) = self.history.restore() else {
            return Ok(None);
        };

        let description = command.description();
        command.execute(scene)?;
        log::debug!("history: redone '{}'", description);

        self.notify(HistoryEventKind::Executed);
        Ok(Some(description))
    }

    fn notify(&mut self, kind: HistoryEventKind) {
        let command = match kind {
            HistoryEventKind::Executed => self.history.peek_undo(),
            HistoryEventKind::Undone => self.history.peek_redo(),
        };
        let Some(command) = command else {
            return;
        };

        for listener in &mut self.listeners {
            match kind {
                HistoryEventKind::Executed => listener.on_executed(command, &self.history),
                HistoryEventKind::Undone => listener.on_undone(command, &self.history),
            }
        }
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        self.history.active_count() > 0
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        self.history.cancelled_count() > 0
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.history.peek_undo().map(|cmd| cmd.description())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.history.peek_redo().map(|cmd| cmd.description())
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    /// Clear all command history
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CommandManager {
    fn drop(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::trait_def::CommandError;
    use crate::scene::SceneGraph;
    use std::sync::{Arc, Mutex};

    // Mock command writing into a shared log
    struct MockCommand {
        value: i32,
        log: Arc<Mutex<Vec<String>>>,
        fail_undo: bool,
    }

    impl MockCommand {
        fn new(value: i32, log: &Arc<Mutex<Vec<String>>>) -> Box<Self> {
            Box::new(Self {
                value,
                log: log.clone(),
                fail_undo: false,
            })
        }
    }

    impl Command for MockCommand {
        fn execute(&mut self, _scene: &mut dyn SceneBackend) -> CommandResult<()> {
            if self.value < 0 {
                return Err(CommandError::ExecutionFailed("negative value".into()));
            }
            self.log.lock().unwrap().push(format!("do {}", self.value));
            Ok(())
        }

        fn undo(&mut self, _scene: &mut dyn SceneBackend) -> CommandResult<()> {
            if self.fail_undo {
                return Err(CommandError::UndoFailed("mock".into()));
            }
            self.log.lock().unwrap().push(format!("undo {}", self.value));
            Ok(())
        }

        fn description(&self) -> String {
            format!("Set value to {}", self.value)
        }
    }

    fn effects(log: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn test_execute_command() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        manager
            .execute_command(MockCommand::new(42, &log), &mut scene)
            .unwrap();

        assert_eq!(effects(&log), vec!["do 42"]);
        assert_eq!(manager.history().count(), 1);
        assert!(manager.can_undo());
        assert!(!manager.can_redo());
    }

    #[test]
    fn test_failed_execute_is_not_recorded() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let result = manager.execute_command(MockCommand::new(-1, &log), &mut scene);

        assert!(result.is_err());
        assert_eq!(manager.history().count(), 0);
    }

    #[test]
    fn test_undo_and_redo() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        manager
            .execute_command(MockCommand::new(42, &log), &mut scene)
            .unwrap();

        let undone = manager.undo_command(&mut scene).unwrap();
        assert_eq!(undone.as_deref(), Some("Set value to 42"));
        assert!(!manager.can_undo());
        assert!(manager.can_redo());

        let redone = manager.redo_command(&mut scene).unwrap();
        assert_eq!(redone.as_deref(), Some("Set value to 42"));
        assert_eq!(effects(&log), vec!["do 42", "undo 42", "do 42"]);
        assert_eq!(manager.history().active_count(), 1);
        assert_eq!(manager.history().cancelled_count(), 0);
    }

    #[test]
    fn test_undo_redo_on_empty_history_are_noops() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();

        assert_eq!(manager.undo_command(&mut scene).unwrap(), None);
        assert_eq!(manager.redo_command(&mut scene).unwrap(), None);
        assert_eq!(manager.history().count(), 0);
    }

    #[test]
    fn test_new_command_discards_redo_branch() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        manager
            .execute_command(MockCommand::new(1, &log), &mut scene)
            .unwrap();
        manager.undo_command(&mut scene).unwrap();
        manager
            .execute_command(MockCommand::new(2, &log), &mut scene)
            .unwrap();

        assert!(!manager.can_redo());
        assert_eq!(manager.snapshot().entries, vec!["Set value to 2"]);
    }

    #[test]
    fn test_history_limit() {
        let mut manager = CommandManager::with_capacity(3);
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            manager
                .execute_command(MockCommand::new(i, &log), &mut scene)
                .unwrap();
        }

        assert_eq!(manager.history().count(), 3);
        assert_eq!(manager.undo_description().as_deref(), Some("Set value to 4"));
    }

    #[test]
    fn test_failed_undo_keeps_moved_cursor() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let mut command = MockCommand::new(7, &log);
        command.fail_undo = true;
        manager.execute_command(command, &mut scene).unwrap();

        assert!(manager.undo_command(&mut scene).is_err());
        assert_eq!(manager.history().cancelled_count(), 1);
        assert_eq!(manager.redo_description().as_deref(), Some("Set value to 7"));
    }

    #[test]
    fn test_listeners_receive_affected_command() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let events = Arc::new(Mutex::new(Vec::new()));

        let sink = events.clone();
        manager.add_listener(Box::new(move |kind: HistoryEventKind, command: &dyn Command| {
            sink.lock()
                .unwrap()
                .push(format!("{:?}: {}", kind, command.description()));
        }));

        manager
            .execute_command(MockCommand::new(1, &log), &mut scene)
            .unwrap();
        manager.undo_command(&mut scene).unwrap();
        manager.redo_command(&mut scene).unwrap();
        manager.redo_command(&mut scene).unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "Executed: Set value to 1",
                "Undone: Set value to 1",
                "Executed: Set value to 1",
            ]
        );
    }
}
