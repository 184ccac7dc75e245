// Task handles - Shared status of an in-flight task

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending = 0,
    Running = 1,
    Completed = 2,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl From<u8> for TaskStatus {
    fn from(value: u8) -> Self {
        match value {
            1 => TaskStatus::Running,
            2 => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

/// Cloneable view on a task's status
///
/// The scheduler (or container) owning the task writes the status; any
/// number of holders may poll it.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    inner: Arc<AtomicU8>,
}

impl TaskHandle {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(status as u8)),
        }
    }

    /// Handle for work that finished synchronously
    pub fn completed() -> Self {
        Self::new(TaskStatus::Completed)
    }

    pub fn status(&self) -> TaskStatus {
        TaskStatus::from(self.inner.load(Ordering::Acquire))
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    pub(crate) fn set(&self, status: TaskStatus) {
        self.inner.store(status as u8, Ordering::Release);
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new(TaskStatus::Pending)
    }
}

/// Join: true once every handle is terminal (vacuously true when empty)
pub fn all_terminal(handles: &[TaskHandle]) -> bool {
    handles.iter().all(TaskHandle::is_terminal)
}
