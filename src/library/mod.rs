// Item library - Prefab catalog imported from JSON, browsed through slots

pub mod catalog;

pub use catalog::{CatalogError, CatalogItem, ItemCatalog, SlotPage};
