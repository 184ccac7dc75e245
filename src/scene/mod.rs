// Scene layer - Effect targets for undoable commands
//
// The real renderer/physics scene lives outside this crate. Commands only
// talk to it through the SceneBackend trait and only ever store the opaque
// InstanceId handles it hands out. SceneGraph is an in-memory backend used
// by the demo binary and the tests.

pub mod graph;
pub mod types;

pub use graph::SceneGraph;
pub use types::{InstanceId, SceneObject, Transform};

/// Errors reported by a scene backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("Unknown instance: {0}")]
    UnknownInstance(InstanceId),

    #[error("Instance already exists: {0}")]
    DuplicateInstance(InstanceId),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Narrow interface to the object layer that commands mutate
pub trait SceneBackend: Send {
    /// Create a new object and return its handle
    fn spawn(&mut self, object: SceneObject) -> InstanceId;

    /// Re-insert an object under a handle it previously had
    fn insert(&mut self, id: InstanceId, object: SceneObject) -> SceneResult<()>;

    /// Remove an object, handing back its data so it can be restored later
    fn remove(&mut self, id: InstanceId) -> SceneResult<SceneObject>;

    fn get(&self, id: InstanceId) -> Option<&SceneObject>;

    /// Apply a material and return the one it replaced
    fn set_material(&mut self, id: InstanceId, material: Option<String>)
    -> SceneResult<Option<String>>;

    /// Move an object and return its previous transform
    fn set_transform(&mut self, id: InstanceId, transform: Transform) -> SceneResult<Transform>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
