// Async task primitive
//
// Animations are plain state machines stepped by a TaskScheduler once per
// frame. Whoever started a task keeps a TaskHandle and polls it until it
// reports a terminal state. Tasks cannot be cancelled and have no timeout:
// a task that never completes keeps its handle pending forever.

pub mod handle;
pub mod scheduler;

pub use handle::{TaskHandle, TaskStatus, all_terminal};
pub use scheduler::{AnimationTask, TaskScheduler};
