use anyhow::{Context, Result};
use egui::pos2;
use satchel_assets::{catalog_from_file, default_catalog};
use satchel_core::{ItemRegistry, DEMO_ITEMS, DEMO_SLOT_COUNT};
use satchel_ui::SlotGrid;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "config/satchel.toml";
const DEFAULT_CATALOG_PATH: &str = "config/items.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Title of the demo container window.
    pub container_title: String,
    pub slot_count: usize,
    /// Grid cells per row.
    pub columns: usize,
    /// Cell edge length in points.
    pub cell_size: f32,
    pub spacing: f32,
    /// Top-left corner of the grid, `[x, y]`.
    pub origin: [f32; 2],
    /// RNG seed for the placeholder contents.
    pub seed: u64,
    pub seed_items: Vec<String>,
    /// JSON item catalog; the built-in catalog is used when unset or missing.
    pub catalog_path: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            container_title: "Chest".to_string(),
            slot_count: DEMO_SLOT_COUNT,
            columns: 7,
            cell_size: 40.0,
            spacing: 4.0,
            origin: [20.0, 40.0],
            seed: 0,
            seed_items: DEMO_ITEMS.iter().map(|name| name.to_string()).collect(),
            catalog_path: Some(PathBuf::from(DEFAULT_CATALOG_PATH)),
        }
    }
}

impl DemoConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<DemoConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    DemoConfig::default()
                }
            },
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    warn!("Demo config not found at {}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                DemoConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Grid layout for the container window.
    pub fn grid(&self) -> SlotGrid {
        SlotGrid {
            origin: pos2(self.origin[0], self.origin[1]),
            columns: self.columns.max(1),
            cell_size: self.cell_size,
            spacing: self.spacing,
        }
    }
}

/// Load the item catalog, falling back to the built-in one when no file is
/// available. A file that exists but fails to load is an error.
pub fn load_catalog(path: Option<&Path>) -> Result<ItemRegistry> {
    match path {
        Some(path) if path.exists() => {
            let catalog = catalog_from_file(path)
                .with_context(|| format!("failed to load item catalog {}", path.display()))?;
            info!(path = %path.display(), items = catalog.len(), "loaded item catalog");
            Ok(catalog)
        }
        Some(path) => {
            warn!(
                "Item catalog not found at {}. Using built-in catalog",
                path.display()
            );
            default_catalog().context("built-in item catalog is invalid")
        }
        None => default_catalog().context("built-in item catalog is invalid"),
    }
}
