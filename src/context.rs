// AppContext - The single process-wide owner of history, scene and navigation
//
// Built once at startup and passed to whatever needs it, instead of
// components looking each other up through global instances.

use crate::animation::{FadeBackdrop, SlideTransition};
use crate::command::commands::SpawnObjectCommand;
use crate::command::{ChannelListener, Command, CommandError, CommandManager, CommandResult, HistorySnapshot};
use crate::config::{AppConfig, ConfigError};
use crate::library::{CatalogError, ItemCatalog};
use crate::messaging::{HistoryNotification, NotificationConsumer, create_notification_channel};
use crate::navigation::{
    BackdropAnimation, InteractionGate, ModalContainer, PageContainer, View,
};
use crate::scene::{InstanceId, SceneGraph, SceneObject, Transform};
use ringbuf::traits::Consumer;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("No catalog item with id '{0}'")]
    UnknownItem(String),
}

pub struct AppContext {
    config: AppConfig,
    commands: CommandManager,
    scene: SceneGraph,
    catalog: Option<ItemCatalog>,
    notifications: NotificationConsumer,
    page_gate: Option<InteractionGate>,
    modal_gate: Option<InteractionGate>,
    pub pages: PageContainer,
    pub modals: ModalContainer,
}

impl AppContext {
    /// Build a context, loading the item catalog if one is configured
    pub fn new(config: AppConfig) -> Result<Self, ContextError> {
        config.validate()?;

        let catalog = match &config.catalog_path {
            Some(path) => Some(ItemCatalog::load(path)?),
            None => None,
        };

        let (notification_tx, notification_rx) =
            create_notification_channel(config.notification_capacity);
        let mut commands = CommandManager::with_capacity(config.history.max_size);
        commands.add_listener(Box::new(ChannelListener::new(notification_tx)));

        let navigation = &config.navigation;
        let page_gate = navigation.lock_interaction.then(InteractionGate::new);
        let modal_gate = match &page_gate {
            Some(gate) if navigation.share_interaction_gate => Some(gate.clone()),
            Some(_) => Some(InteractionGate::new()),
            None => None,
        };

        let mut pages = PageContainer::new();
        if let Some(gate) = &page_gate {
            pages = pages.with_interaction_gate(gate.clone());
        }

        let mut modals = ModalContainer::new();
        if let Some(gate) = &modal_gate {
            modals = modals.with_interaction_gate(gate.clone());
        }
        if navigation.modal_backdrops {
            let duration = config.animation.backdrop;
            modals = modals.with_backdrops(Box::new(move |_modal_id: &str| {
                Box::new(FadeBackdrop::new(duration)) as Box<dyn BackdropAnimation>
            }));
        }

        log::info!(
            "Context ready (history size {}, {} catalog item(s))",
            config.history.max_size,
            catalog.as_ref().map_or(0, ItemCatalog::len)
        );

        Ok(Self {
            config,
            commands,
            scene: SceneGraph::new(),
            catalog,
            notifications: notification_rx,
            page_gate,
            modal_gate,
            pages,
            modals,
        })
    }

    /// Use `catalog` instead of the configured one
    pub fn with_catalog(mut self, catalog: ItemCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load the RON configuration at `path` and build a context from it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContextError> {
        Self::new(AppConfig::load(path)?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn commands(&self) -> &CommandManager {
        &self.commands
    }

    pub fn catalog(&self) -> Option<&ItemCatalog> {
        self.catalog.as_ref()
    }

    pub fn execute(&mut self, command: Box<dyn Command>) -> CommandResult<()> {
        self.commands.execute_command(command, &mut self.scene)
    }

    pub fn undo(&mut self) -> CommandResult<Option<String>> {
        self.commands.undo_command(&mut self.scene)
    }

    pub fn redo(&mut self) -> CommandResult<Option<String>> {
        self.commands.redo_command(&mut self.scene)
    }

    /// Place a catalog item as an undoable spawn
    pub fn spawn_item(&mut self, item_id: &str, transform: Transform) -> Result<InstanceId, ContextError> {
        let item = self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.get(item_id))
            .ok_or_else(|| ContextError::UnknownItem(item_id.to_string()))?;

        let mut object = SceneObject::new(item.prefab.clone(), transform);
        object.material = item.default_material.clone();

        let command = SpawnObjectCommand::new(object);
        let instance = command.instance();
        self.execute(Box::new(command))?;
        Ok(instance)
    }

    /// Register a page using the configured transition durations
    pub fn register_page(&mut self, id: &str, rendering_order: i32) -> bool {
        let animation = SlideTransition::from_config(&self.config.animation);
        self.pages.register(View::new(id, rendering_order, Box::new(animation)))
    }

    /// Register a modal using the configured transition durations
    pub fn register_modal(&mut self, id: &str, rendering_order: i32) -> bool {
        let animation = SlideTransition::from_config(&self.config.animation);
        self.modals.register(View::new(id, rendering_order, Box::new(animation)))
    }

    /// Advance one frame: step all running transitions
    pub fn tick(&mut self, dt: f32) {
        self.pages.update(dt);
        self.modals.update(dt);
    }

    /// Whether any navigation transition is still running
    pub fn is_transitioning(&self) -> bool {
        self.pages.is_in_transition() || self.modals.is_in_transition()
    }

    /// False while a transition holds an interaction gate
    pub fn is_interactable(&self) -> bool {
        [&self.page_gate, &self.modal_gate]
            .into_iter()
            .flatten()
            .all(InteractionGate::is_interactable)
    }

    /// Take all pending history notifications
    pub fn drain_notifications(&mut self) -> Vec<HistoryNotification> {
        self.notifications.pop_iter().collect()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.commands.snapshot()
    }
}
