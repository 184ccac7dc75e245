// Concrete command implementations

use crate::command::trait_def::{Command, CommandError, CommandResult};
use crate::scene::{InstanceId, SceneBackend, SceneObject, Transform};

/// Command to place a prefab in the scene
///
/// The handle is reserved when the command is built, so the caller can
/// target the object with later commands before the spawn is recorded.
/// Undo removes the object and keeps its data; redo puts it back under the
/// same handle.
pub struct SpawnObjectCommand {
    object: SceneObject,
    instance: InstanceId,
}

impl SpawnObjectCommand {
    pub fn new(object: SceneObject) -> Self {
        Self {
            object,
            instance: InstanceId::new(),
        }
    }

    /// Handle the object is (or will be) spawned under
    pub fn instance(&self) -> InstanceId {
        self.instance
    }
}

impl Command for SpawnObjectCommand {
    fn execute(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        scene.insert(self.instance, self.object.clone())?;
        Ok(())
    }

    fn undo(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        // Keep whatever state the object reached so redo restores it as-is
        self.object = scene.remove(self.instance)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Spawn {}", self.object.prefab)
    }
}

/// Command to delete an object from the scene
pub struct DestroyObjectCommand {
    target: InstanceId,
    removed: Option<SceneObject>,
}

impl DestroyObjectCommand {
    pub fn new(target: InstanceId) -> Self {
        Self {
            target,
            removed: None,
        }
    }
}

impl Command for DestroyObjectCommand {
    fn execute(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        self.removed = Some(scene.remove(self.target)?);
        Ok(())
    }

    fn undo(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        let object = self
            .removed
            .clone()
            .ok_or_else(|| CommandError::UndoFailed("No removed object stored".into()))?;
        scene.insert(self.target, object)?;
        Ok(())
    }

    fn description(&self) -> String {
        match &self.removed {
            Some(object) => format!("Destroy {}", object.prefab),
            None => format!("Destroy {}", self.target),
        }
    }
}

/// Command to apply a material to an object
///
/// Stores the material it replaced to enable undo.
pub struct ApplyMaterialCommand {
    target: InstanceId,
    new_material: Option<String>,
    old_material: Option<Option<String>>,
}

impl ApplyMaterialCommand {
    /// # Arguments
    /// * `material` - Material to apply, or None to reset to the prefab default
    pub fn new(target: InstanceId, material: Option<String>) -> Self {
        Self {
            target,
            new_material: material,
            old_material: None,
        }
    }
}

impl Command for ApplyMaterialCommand {
    fn execute(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        let previous = scene.set_material(self.target, self.new_material.clone())?;
        self.old_material = Some(previous);
        Ok(())
    }

    fn undo(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        let old_material = self
            .old_material
            .clone()
            .ok_or_else(|| CommandError::UndoFailed("No previous material stored".into()))?;
        scene.set_material(self.target, old_material)?;
        Ok(())
    }

    fn description(&self) -> String {
        match &self.new_material {
            Some(material) => format!("Apply material {}", material),
            None => "Reset material".to_string(),
        }
    }
}

/// Command to move/rotate/scale an object
pub struct TransformObjectCommand {
    target: InstanceId,
    new_transform: Transform,
    old_transform: Option<Transform>,
}

impl TransformObjectCommand {
    pub fn new(target: InstanceId, transform: Transform) -> Self {
        Self {
            target,
            new_transform: transform,
            old_transform: None,
        }
    }
}

impl Command for TransformObjectCommand {
    fn execute(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        self.old_transform = Some(scene.set_transform(self.target, self.new_transform)?);
        Ok(())
    }

    fn undo(&mut self, scene: &mut dyn SceneBackend) -> CommandResult<()> {
        let old_transform = self
            .old_transform
            .ok_or_else(|| CommandError::UndoFailed("No previous transform stored".into()))?;
        scene.set_transform(self.target, old_transform)?;
        Ok(())
    }

    fn description(&self) -> String {
        let [x, y, z] = self.new_transform.position;
        format!("Move to ({:.1}, {:.1}, {:.1})", x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::manager::CommandManager;
    use crate::scene::SceneGraph;

    fn spawn(manager: &mut CommandManager, scene: &mut SceneGraph, prefab: &str) -> InstanceId {
        let command = SpawnObjectCommand::new(SceneObject::new(prefab, Transform::default()));
        let id = command.instance();
        manager.execute_command(Box::new(command), scene).unwrap();
        id
    }

    #[test]
    fn test_spawn_undo_redo_keeps_handle() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let id = spawn(&mut manager, &mut scene, "chair");

        assert!(scene.contains(id));
        manager.undo_command(&mut scene).unwrap();
        assert!(!scene.contains(id));
        manager.redo_command(&mut scene).unwrap();
        assert!(scene.contains(id));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_material_undo_restores_previous() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let id = spawn(&mut manager, &mut scene, "wall");

        manager
            .execute_command(
                Box::new(ApplyMaterialCommand::new(id, Some("brick".into()))),
                &mut scene,
            )
            .unwrap();
        assert_eq!(scene.get(id).unwrap().material.as_deref(), Some("brick"));

        manager.undo_command(&mut scene).unwrap();
        assert_eq!(scene.get(id).unwrap().material, None);
    }

    #[test]
    fn test_redo_spawn_after_material_keeps_later_commands_valid() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let id = spawn(&mut manager, &mut scene, "table");
        manager
            .execute_command(
                Box::new(ApplyMaterialCommand::new(id, Some("walnut".into()))),
                &mut scene,
            )
            .unwrap();

        manager.undo_command(&mut scene).unwrap();
        manager.undo_command(&mut scene).unwrap();
        assert!(scene.is_empty());

        manager.redo_command(&mut scene).unwrap();
        manager.redo_command(&mut scene).unwrap();
        assert_eq!(scene.get(id).unwrap().material.as_deref(), Some("walnut"));
    }

    #[test]
    fn test_destroy_and_transform() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let id = spawn(&mut manager, &mut scene, "lamp");

        let moved = Transform::from_position([2.0, 0.0, -1.0]);
        manager
            .execute_command(Box::new(TransformObjectCommand::new(id, moved)), &mut scene)
            .unwrap();
        manager
            .execute_command(Box::new(DestroyObjectCommand::new(id)), &mut scene)
            .unwrap();
        assert!(!scene.contains(id));
        assert_eq!(manager.undo_description().as_deref(), Some("Destroy lamp"));

        manager.undo_command(&mut scene).unwrap();
        assert_eq!(scene.get(id).unwrap().transform, moved);

        manager.undo_command(&mut scene).unwrap();
        assert_eq!(scene.get(id).unwrap().transform, Transform::default());
    }

    #[test]
    fn test_commands_on_missing_instance_fail() {
        let mut manager = CommandManager::new();
        let mut scene = SceneGraph::new();
        let ghost = InstanceId::new();

        let result = manager.execute_command(Box::new(DestroyObjectCommand::new(ghost)), &mut scene);
        assert!(matches!(result, Err(CommandError::Scene(_))));
        assert_eq!(manager.history().count(), 0);
    }
}
