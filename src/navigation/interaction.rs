// InteractionGate - Shared "input enabled" flag across containers

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Input is blocked while any holder has the gate locked
///
/// Clones share the same counter, so a page container and a modal
/// container transitioning at the same time keep input blocked until both
/// are done.
#[derive(Debug, Clone, Default)]
pub struct InteractionGate {
    locks: Arc<AtomicUsize>,
}

impl InteractionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) {
        self.locks.fetch_add(1, Ordering::AcqRel);
    }

    pub fn unlock(&self) {
        let _ = self
            .locks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    pub fn is_interactable(&self) -> bool {
        self.locks.load(Ordering::Acquire) == 0
    }
}
