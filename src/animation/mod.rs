// Animation strategies
//
// Minimal stand-ins for a tweening engine: eased tweens that report their
// progress, immediate tasks for skipped animations, and the default page
// and backdrop strategies built from the configured durations.

pub mod easing;
pub mod transitions;
pub mod tween;

pub use easing::Easing;
pub use transitions::{FadeBackdrop, SlideTransition};
pub use tween::{Immediate, Tween};
