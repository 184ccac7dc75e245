// Navigation errors
//
// All of these are call-site bugs: the caller is expected to propagate them
// rather than retry.

/// Result type for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("{container}: cannot start a transition while another is in progress")]
    TransitionInProgress { container: &'static str },

    #[error("No view registered with id '{0}'")]
    UnknownView(String),

    #[error("View '{0}' is already on the stack")]
    AlreadyInStack(String),

    #[error("Pop count must be at least 1 (got {0})")]
    InvalidPopCount(usize),

    #[error("Cannot pop {requested} view(s) from a stack of depth {depth}")]
    PopCountExceedsDepth { requested: usize, depth: usize },

    #[error("Destination view '{0}' is not on the stack")]
    DestinationNotFound(String),
}
