// TaskScheduler - Per-frame stepping of in-flight tasks

use super::handle::{TaskHandle, TaskStatus};

/// A unit of work advanced once per scheduler tick
pub trait AnimationTask: Send {
    /// Advance by `dt` seconds
    ///
    /// Returns `Completed` once the task has reached its end state; it will
    /// not be stepped again afterwards.
    fn step(&mut self, dt: f32) -> TaskStatus;
}

/// Cooperative, single-threaded runner for animation tasks
///
/// `tick` steps every in-flight task exactly once, in spawn order. Tasks
/// spawned during a tick are first stepped on the next one.
#[derive(Default)]
pub struct TaskScheduler {
    tasks: Vec<(TaskHandle, Box<dyn AnimationTask>)>,
    ticks: u64,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a task; it is first stepped on the next tick
    pub fn spawn(&mut self, task: Box<dyn AnimationTask>) -> TaskHandle {
        let handle = TaskHandle::new(TaskStatus::Running);
        self.tasks.push((handle.clone(), task));
        handle
    }

    pub fn tick(&mut self, dt: f32) {
        self.ticks += 1;
        self.tasks.retain_mut(|(handle, task)| match task.step(dt) {
            TaskStatus::Completed => {
                handle.set(TaskStatus::Completed);
                false
            }
            _ => true,
        });
    }

    /// Number of tasks not yet completed
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Ticks run since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
