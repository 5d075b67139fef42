#![warn(missing_docs)]
//! Item catalog schema + loading helpers.

mod loader;

pub use loader::{catalog_from_file, catalog_from_str, default_catalog, DEFAULT_CATALOG_JSON};

use satchel_core::{ItemDefinition, ItemKey};
use serde::Deserialize;
use thiserror::Error;

/// Item entry as authored in a catalog file.
#[derive(Debug, Deserialize)]
pub struct ItemEntry {
    /// Unique, case-insensitive item name (e.g., "Sword").
    pub name: String,
    /// Name shown to players (defaults to `name`).
    #[serde(default)]
    pub display_name: Option<String>,
    /// Flavour text.
    #[serde(default)]
    pub description: String,
    /// Icon identifier (defaults to the normalized name).
    #[serde(default)]
    pub icon: Option<String>,
    /// Maximum quantity per slot.
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Maximum condition; -1 means the item does not degrade.
    #[serde(default = "default_max_condition")]
    pub max_condition: i32,
}

fn default_max_stack() -> u32 {
    1
}

fn default_max_condition() -> i32 {
    -1
}

impl ItemEntry {
    /// Convert the authored entry into a validated definition.
    pub fn into_definition(self) -> Result<ItemDefinition, AssetError> {
        let key = ItemKey::parse(&self.name)
            .map_err(|err| AssetError::Invalid(format!("item {:?}: {err}", self.name)))?;
        if self.max_stack == 0 {
            return Err(AssetError::Invalid(format!(
                "item {:?}: max_stack must be at least 1",
                self.name
            )));
        }

        let display_name = self.display_name.unwrap_or_else(|| self.name.trim().to_string());
        let mut definition = ItemDefinition::new(key, self.max_stack)
            .with_max_condition(self.max_condition)
            .with_display_name(display_name)
            .with_description(self.description);
        if let Some(icon) = self.icon {
            definition = definition.with_icon(icon);
        }
        Ok(definition)
    }
}

/// Errors emitted during catalog loading.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading catalogs.
    #[error("failed to read item catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse item catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Entries that parse but break catalog rules.
    #[error("invalid item catalog: {0}")]
    Invalid(String),
}

/// Parse a JSON string into a list of item entries.
pub fn load_items_from_str(input: &str) -> Result<Vec<ItemEntry>, AssetError> {
    Ok(serde_json::from_str(input)?)
}
