// ItemCatalog - Placeable items and slot paging

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Slot page size must be at least 1")]
    InvalidPageSize,
}

/// One entry of the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Prefab spawned when the item is placed
    pub prefab: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    items: Vec<CatalogItem>,
}

/// One page of item slots
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPage<'a> {
    pub items: Vec<&'a CatalogItem>,
    pub page: usize,
    pub page_count: usize,
}

/// Ordered, id-indexed list of placeable items
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse `{ "items": [ ... ] }`
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("Loaded {} catalog item(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            items: self.items.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.items.iter().map(|item| item.category.as_str()).collect();
        set.into_iter().collect()
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Items shown on slot page `page` (0-based) with `slots_per_page` slots
    ///
    /// Pages past the end are empty; an empty catalog still has one page.
    pub fn slot_page(&self, page: usize, slots_per_page: usize) -> Result<SlotPage<'_>, CatalogError> {
        if slots_per_page == 0 {
            return Err(CatalogError::InvalidPageSize);
        }

        let page_count = self.items.len().div_ceil(slots_per_page).max(1);
        let items = self
            .items
            .iter()
            .skip(page.saturating_mul(slots_per_page))
            .take(slots_per_page)
            .collect();

        Ok(SlotPage {
            items,
            page,
            page_count,
        })
    }
}
