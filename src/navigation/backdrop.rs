// Backdrop - Dimming overlay paired with a modal

use crate::task::AnimationTask;

/// Enter/exit animation strategy of a backdrop
pub trait BackdropAnimation: Send {
    fn enter(&mut self) -> Box<dyn AnimationTask>;
    fn exit(&mut self) -> Box<dyn AnimationTask>;
}

/// Builds the backdrop animation for the modal with the given id
pub type BackdropFactory = Box<dyn FnMut(&str) -> Box<dyn BackdropAnimation> + Send>;

/// Transient overlay created on push and destroyed on pop
pub struct Backdrop {
    modal_id: String,
    animation: Box<dyn BackdropAnimation>,
}

impl Backdrop {
    pub fn new(modal_id: impl Into<String>, animation: Box<dyn BackdropAnimation>) -> Self {
        Self {
            modal_id: modal_id.into(),
            animation,
        }
    }

    /// Id of the modal this backdrop sits under
    pub fn modal_id(&self) -> &str {
        &self.modal_id
    }

    pub(crate) fn animation_mut(&mut self) -> &mut dyn BackdropAnimation {
        &mut *self.animation
    }
}
