// Command Pattern for Undo/Redo functionality
//
// Every reversible scene edit (spawn, destroy, material, transform) goes
// through a Command so it can be undone and redone.
//
// Architecture:
// - Command trait: execute(), undo(), description()
// - CommandHistory: bounded, cursor-based log with redo-branch truncation
// - CommandManager: owns one history, runs effects, notifies listeners
// - Concrete commands: SpawnObjectCommand, ApplyMaterialCommand, etc.
//
// Effects are only ever applied through the SceneBackend passed in by the
// caller; the manager never touches the scene itself.

pub mod commands;
pub mod history;
pub mod listener;
pub mod manager;
pub mod trait_def;

pub use history::{CommandHistory, HistorySnapshot};
pub use listener::{ChannelListener, HistoryListener};
pub use manager::CommandManager;
pub use trait_def::{Command, CommandError, CommandResult};
