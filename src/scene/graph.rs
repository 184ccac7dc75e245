// SceneGraph - In-memory SceneBackend

use super::types::{InstanceId, SceneObject, Transform};
use super::{SceneBackend, SceneError, SceneResult};
use std::collections::HashMap;

/// Flat map of instance handles to objects
#[derive(Debug, Default)]
pub struct SceneGraph {
    objects: HashMap<InstanceId, SceneObject>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InstanceId, &SceneObject)> {
        self.objects.iter()
    }

    fn object_mut(&mut self, id: InstanceId) -> SceneResult<&mut SceneObject> {
        self.objects
            .get_mut(&id)
            .ok_or(SceneError::UnknownInstance(id))
    }
}

impl SceneBackend for SceneGraph {
    fn spawn(&mut self, object: SceneObject) -> InstanceId {
        let id = InstanceId::new();
        log::debug!("scene: spawn {} as {}", object.prefab, id);
        self.objects.insert(id, object);
        id
    }

    fn insert(&mut self, id: InstanceId, object: SceneObject) -> SceneResult<()> {
        if self.objects.contains_key(&id) {
            return Err(SceneError::DuplicateInstance(id));
        }
        self.objects.insert(id, object);
        Ok(())
    }

    fn remove(&mut self, id: InstanceId) -> SceneResult<SceneObject> {
        self.objects
            .remove(&id)
            .ok_or(SceneError::UnknownInstance(id))
    }

    fn get(&self, id: InstanceId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn set_material(
        &mut self,
        id: InstanceId,
        material: Option<String>,
    ) -> SceneResult<Option<String>> {
        let object = self.object_mut(id)?;
        Ok(std::mem::replace(&mut object.material, material))
    }

    fn set_transform(&mut self, id: InstanceId, transform: Transform) -> SceneResult<Transform> {
        let object = self.object_mut(id)?;
        Ok(std::mem::replace(&mut object.transform, transform))
    }

    fn len(&self) -> usize {
        self.objects.len()
    }
}
