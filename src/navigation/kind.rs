// Container kinds - What differs between page and modal stacks

/// Static behaviour of a navigation container
pub trait ContainerKind: Send + 'static {
    /// Name used in logs and errors
    const NAME: &'static str;

    /// Whether a push covers the previous top view: it plays its exit
    /// animation and is hidden afterwards, and replays its enter animation
    /// when uncovered by a pop.
    const COVERS_PARTNER: bool;

    /// Whether each pushed view gets a backdrop
    const USES_BACKDROP: bool;
}

/// Full-screen views; only the top page is visible
#[derive(Debug, Clone, Copy, Default)]
pub struct Page;

impl ContainerKind for Page {
    const NAME: &'static str = "PageContainer";
    const COVERS_PARTNER: bool = true;
    const USES_BACKDROP: bool = false;
}

/// Overlay views stacked over each other, each dimmed by a backdrop
#[derive(Debug, Clone, Copy, Default)]
pub struct Modal;

impl ContainerKind for Modal {
    const NAME: &'static str = "ModalContainer";
    const COVERS_PARTNER: bool = false;
    const USES_BACKDROP: bool = true;
}
