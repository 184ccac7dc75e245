// Default transition strategies

use super::easing::Easing;
use super::tween::Tween;
use crate::config::AnimationConfig;
use crate::navigation::{BackdropAnimation, TransitionAnimation};
use crate::task::AnimationTask;

/// Page/modal strategy with one duration per transition state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub push_enter: f32,
    pub push_exit: f32,
    pub pop_enter: f32,
    pub pop_exit: f32,
    pub easing: Easing,
}

impl SlideTransition {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            push_enter: config.push_enter,
            push_exit: config.push_exit,
            pop_enter: config.pop_enter,
            pop_exit: config.pop_exit,
            easing: config.easing,
        }
    }

    fn tween(&self, duration: f32) -> Box<dyn AnimationTask> {
        Box::new(Tween::new(duration).with_easing(self.easing))
    }
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl TransitionAnimation for SlideTransition {
    fn push_enter(&mut self) -> Box<dyn AnimationTask> {
        self.tween(self.push_enter)
    }

    fn push_exit(&mut self) -> Box<dyn AnimationTask> {
        self.tween(self.push_exit)
    }

    fn pop_enter(&mut self) -> Box<dyn AnimationTask> {
        self.tween(self.pop_enter)
    }

    fn pop_exit(&mut self) -> Box<dyn AnimationTask> {
        self.tween(self.pop_exit)
    }
}

/// Backdrop fading in and out over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeBackdrop {
    pub duration: f32,
}

impl FadeBackdrop {
    pub fn new(duration: f32) -> Self {
        Self { duration }
    }
}

impl BackdropAnimation for FadeBackdrop {
    fn enter(&mut self) -> Box<dyn AnimationTask> {
        Box::new(Tween::new(self.duration).with_easing(Easing::Linear))
    }

    fn exit(&mut self) -> Box<dyn AnimationTask> {
        Box::new(Tween::new(self.duration).with_easing(Easing::Linear))
    }
}
