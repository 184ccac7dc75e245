// MyBuild AR - Undo/redo history and navigation core of the building app

pub mod animation;
pub mod command;
pub mod config;
pub mod context;
pub mod library;
pub mod messaging;
pub mod navigation;
pub mod scene;
pub mod task;

// Re-export commonly used types for convenience
pub use command::{Command, CommandHistory, CommandManager, HistorySnapshot};
pub use config::AppConfig;
pub use context::{AppContext, ContextError};
pub use library::ItemCatalog;
pub use navigation::{ModalContainer, NavigationError, NavigationStack, PageContainer, View};
pub use scene::{InstanceId, SceneBackend, SceneGraph, SceneObject, Transform};
pub use task::{TaskHandle, TaskScheduler};
