use mybuild_ar::command::commands::{ApplyMaterialCommand, TransformObjectCommand};
use mybuild_ar::library::{CatalogItem, ItemCatalog};
use mybuild_ar::{AppConfig, AppContext, ContextError, TaskHandle, Transform};

// 60 fps frame step for the scripted session
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== MyBuild AR ===");
    println!("Command history & navigation demo\n");

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return;
            }
        },
        None => AppConfig::default(),
    };

    if let Err(e) = run(config) {
        eprintln!("ERROR: {}", e);
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let has_catalog = config.catalog_path.is_some();
    let mut context = AppContext::new(config)?;
    if !has_catalog {
        context = with_demo_catalog(context)?;
    }

    context.register_page("main_menu", 0);
    context.register_page("editor", 0);
    context.register_page("library", 1);
    context.register_modal("confirm_clear", 0);

    // Navigate main menu -> editor -> library
    for page in ["main_menu", "editor", "library"] {
        let handle = context.pages.push(page, true, |view| view.set_property("opened_from", "demo"))?;
        settle(&mut context, &handle);
        println!("Page stack: {:?}", context.pages.stack());
    }

    // Place and edit a few items
    let chair = context.spawn_item("chair", Transform::from_position([0.0, 0.0, 1.0]))?;
    let table = context.spawn_item("table", Transform::from_position([1.5, 0.0, 1.0]))?;
    context.execute(Box::new(ApplyMaterialCommand::new(chair, Some("walnut".into()))))?;
    context.execute(Box::new(TransformObjectCommand::new(
        table,
        Transform::from_position([2.0, 0.0, 0.5]),
    )))?;

    // Back to the editor, then a confirmation modal
    let handle = context.pages.pop_to(true, "editor")?;
    settle(&mut context, &handle);
    let handle = context.modals.push("confirm_clear", true, |_| {})?;
    settle(&mut context, &handle);
    let handle = context.modals.pop(true, 1)?;
    settle(&mut context, &handle);

    if let Some(undone) = context.undo()? {
        println!("Undo: {}", undone);
    }
    if let Some(undone) = context.undo()? {
        println!("Undo: {}", undone);
    }
    if let Some(redone) = context.redo()? {
        println!("Redo: {}", redone);
    }

    for notification in context.drain_notifications() {
        println!(
            "[{:?}] {} (undo: {}, redo: {})",
            notification.kind, notification.description, notification.can_undo, notification.can_redo
        );
    }

    println!("\nObjects in scene: {}", context.scene().iter().count());
    println!("Page stack: {:?}", context.pages.stack());
    println!("History:\n{}", serde_json::to_string_pretty(&context.snapshot())?);

    Ok(())
}

fn settle(context: &mut AppContext, handle: &TaskHandle) {
    while !handle.is_terminal() {
        context.tick(FRAME_DT);
    }
}

fn with_demo_catalog(context: AppContext) -> Result<AppContext, ContextError> {
    let item = |id: &str, category: &str, material: Option<&str>| CatalogItem {
        id: id.to_string(),
        name: id.to_string(),
        category: category.to_string(),
        prefab: format!("prefabs/{}", id),
        default_material: material.map(str::to_string),
        thumbnail: None,
    };
    let catalog = ItemCatalog::new(vec![
        item("chair", "furniture", None),
        item("table", "furniture", Some("oak")),
        item("wall", "structure", Some("plaster")),
    ])?;

    Ok(context.with_catalog(catalog))
}
