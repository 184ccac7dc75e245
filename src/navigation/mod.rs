// Navigation stack - Pages and modals with paired enter/exit transitions
//
// One generic NavigationStack<K> backs both containers:
// - PageContainer: full-screen views, the covered page animates out and hides
// - ModalContainer: overlays, covered modals stay visible, each pushed modal
//   gets its own backdrop
//
// A push/pop starts every partner animation at once, then commits the stack
// change only after all of them are terminal. Only one transition may be in
// flight per container.

pub mod backdrop;
pub mod container;
pub mod error;
pub mod interaction;
pub mod kind;
pub mod view;

pub use backdrop::{Backdrop, BackdropAnimation, BackdropFactory};
pub use container::{ModalContainer, NavigationStack, PageContainer, PopTarget};
pub use error::{NavigationError, NavigationResult};
pub use interaction::InteractionGate;
pub use kind::{ContainerKind, Modal, Page};
pub use view::{TransitionAnimation, TransitionState, View, ViewLifecycle};
