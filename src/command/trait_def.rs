// Command trait definition

use crate::scene::{SceneBackend, SceneError};

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while applying a command's effect
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Undo operation failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// Invalid state for this operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The scene rejected the effect
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Trait for one reversible user action
///
/// A command keeps whatever it needs to replay or revert its effect
/// (instance handles, previous material, previous transform). It is
/// handed to the history once and never replaced afterwards.
///
/// # Example
/// ```no_run
/// use mybuild_ar::command::{Command, CommandResult};
/// use mybuild_ar::scene::{InstanceId, SceneBackend};
///
/// struct PaintCommand {
///     target: InstanceId,
///     material: String,
///     previous: Option<String>,
/// }
///
/// impl Command for PaintCommand {
///     fn execute(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
///         self.previous = scene.set_material(self.target, Some(self.material.clone()))?;
///         Ok(())
///     }
///
///     fn undo(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
///         scene.set_material(self.target, self.previous.clone())?;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         format!("Paint {}", self.material)
///     }
/// }
/// ```
pub trait Command: Send {
    /// Apply the forward effect
    ///
    /// Called once when the command is first executed and again on every redo.
    fn execute(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()>;

    /// Revert the effect of the last execute()
    fn undo(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()>;

    /// Human-readable description (e.g., "Undo: Spawn chair")
    fn description(&self) -> String;
}
