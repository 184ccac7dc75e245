// View - A registered page or modal and its transition strategy

use crate::task::AnimationTask;
use std::collections::BTreeMap;

/// Where a view is in its current transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    None,
    PushEnter,
    PushExit,
    PopEnter,
    PopExit,
}

impl TransitionState {
    pub fn entering(push: bool) -> Self {
        if push {
            TransitionState::PushEnter
        } else {
            TransitionState::PopEnter
        }
    }

    pub fn exiting(push: bool) -> Self {
        if push {
            TransitionState::PushExit
        } else {
            TransitionState::PopExit
        }
    }
}

/// Enter/exit animation strategy of a view
///
/// Modal containers only ever ask for `push_enter` and `pop_exit`.
pub trait TransitionAnimation: Send {
    fn push_enter(&mut self) -> Box<dyn AnimationTask>;
    fn push_exit(&mut self) -> Box<dyn AnimationTask>;
    fn pop_enter(&mut self) -> Box<dyn AnimationTask>;
    fn pop_exit(&mut self) -> Box<dyn AnimationTask>;
}

/// Optional hooks around a view's transitions
///
/// `partner` is the id of the view transitioning the other way, if any.
pub trait ViewLifecycle: Send {
    fn before_enter(&mut self, _id: &str, _push: bool, _partner: Option<&str>) {}
    fn after_enter(&mut self, _id: &str, _push: bool, _partner: Option<&str>) {}
    fn before_exit(&mut self, _id: &str, _push: bool, _partner: Option<&str>) {}
    fn after_exit(&mut self, _id: &str, _push: bool, _partner: Option<&str>) {}
    fn on_destroy(&mut self, _id: &str) {}
}

/// A named UI unit owned by its container
pub struct View {
    id: String,
    rendering_order: i32,
    animation: Box<dyn TransitionAnimation>,
    lifecycle: Option<Box<dyn ViewLifecycle>>,
    state: TransitionState,
    visible: bool,
    properties: BTreeMap<String, String>,
}

impl View {
    pub fn new(
        id: impl Into<String>,
        rendering_order: i32,
        animation: Box<dyn TransitionAnimation>,
    ) -> Self {
        Self {
            id: id.into(),
            rendering_order,
            animation,
            lifecycle: None,
            state: TransitionState::None,
            visible: false,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_lifecycle(mut self, lifecycle: Box<dyn ViewLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Higher values are placed above lower ones among siblings
    pub fn rendering_order(&self) -> i32 {
        self.rendering_order
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Free-form settings, typically written by a push's on-load callback
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub(crate) fn animation_for(&mut self, state: TransitionState) -> Option<Box<dyn AnimationTask>> {
        match state {
            TransitionState::None => None,
            TransitionState::PushEnter => Some(self.animation.push_enter()),
            TransitionState::PushExit => Some(self.animation.push_exit()),
            TransitionState::PopEnter => Some(self.animation.pop_enter()),
            TransitionState::PopExit => Some(self.animation.pop_exit()),
        }
    }

    pub(crate) fn before_enter(&mut self, push: bool, partner: Option<&str>) {
        self.state = TransitionState::entering(push);
        self.visible = true;
        if let Some(lifecycle) = &mut self.lifecycle {
            lifecycle.before_enter(&self.id, push, partner);
        }
    }

    pub(crate) fn after_enter(&mut self, push: bool, partner: Option<&str>) {
        self.state = TransitionState::None;
        if let Some(lifecycle) = &mut self.lifecycle {
            lifecycle.after_enter(&self.id, push, partner);
        }
    }

    pub(crate) fn before_exit(&mut self, push: bool, partner: Option<&str>) {
        self.state = TransitionState::exiting(push);
        if let Some(lifecycle) = &mut self.lifecycle {
            lifecycle.before_exit(&self.id, push, partner);
        }
    }

    /// `hide` is false for a modal that stays visible under a new one
    pub(crate) fn after_exit(&mut self, push: bool, partner: Option<&str>, hide: bool) {
        self.state = TransitionState::None;
        if hide {
            self.visible = false;
        }
        if let Some(lifecycle) = &mut self.lifecycle {
            lifecycle.after_exit(&self.id, push, partner);
        }
    }

    pub(crate) fn destroy(&mut self) {
        self.visible = false;
        if let Some(lifecycle) = &mut self.lifecycle {
            lifecycle.on_destroy(&self.id);
        }
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("id", &self.id)
            .field("rendering_order", &self.rendering_order)
            .field("state", &self.state)
            .field("visible", &self.visible)
            .finish()
    }
}
