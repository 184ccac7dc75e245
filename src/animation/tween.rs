// Tween tasks

use super::easing::Easing;
use crate::task::{AnimationTask, TaskStatus};

/// Callback receiving eased progress in [0, 1]
pub type ProgressFn = Box<dyn FnMut(f32) + Send>;

/// Time-based animation from 0 to 1 over `duration` seconds
pub struct Tween {
    duration: f32,
    elapsed: f32,
    easing: Easing,
    on_progress: Option<ProgressFn>,
}

impl Tween {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::Linear,
            on_progress: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Receive the eased progress after every step
    pub fn on_progress(mut self, callback: ProgressFn) -> Self {
        self.on_progress = Some(callback);
        self
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }
}

impl AnimationTask for Tween {
    fn step(&mut self, dt: f32) -> TaskStatus {
        self.elapsed += dt.max(0.0);
        let t = self.progress();

        if let Some(callback) = &mut self.on_progress {
            callback(self.easing.apply(t));
        }

        if t >= 1.0 {
            TaskStatus::Completed
        } else {
            TaskStatus::Running
        }
    }
}

/// Task that completes on its first step
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl AnimationTask for Immediate {
    fn step(&mut self, _dt: f32) -> TaskStatus {
        TaskStatus::Completed
    }
}
