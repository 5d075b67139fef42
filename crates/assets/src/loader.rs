use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use satchel_core::ItemRegistry;
use tracing::debug;

use crate::AssetError;

/// Built-in catalog used when no catalog file is available.
pub const DEFAULT_CATALOG_JSON: &str = r#"
[
  { "name": "Sword", "description": "A trusty blade.", "max_stack": 1, "max_condition": 100 },
  { "name": "Ring", "description": "It glints.", "max_stack": 1, "max_condition": 100 },
  { "name": "Coin", "description": "Legal tender.", "max_stack": 50, "max_condition": -1 }
]
"#;

/// Load an item catalog from the provided JSON file path.
pub fn catalog_from_file(path: &Path) -> Result<ItemRegistry, AssetError> {
    let data = fs::read_to_string(path)?;
    catalog_from_str(&data)
}

/// Load an item catalog from an in-memory JSON string.
///
/// Names must be unique once normalized; "Coin" and "coin" collide.
pub fn catalog_from_str(input: &str) -> Result<ItemRegistry, AssetError> {
    let entries = crate::load_items_from_str(input)?;
    let mut seen = BTreeSet::new();
    let mut definitions = Vec::with_capacity(entries.len());
    for entry in entries {
        let definition = entry.into_definition()?;
        if !seen.insert(definition.key().clone()) {
            return Err(AssetError::Invalid(format!(
                "duplicate item {:?}",
                definition.name()
            )));
        }
        definitions.push(definition);
    }
    debug!(items = definitions.len(), "loaded item catalog");
    Ok(ItemRegistry::new(definitions))
}

/// The built-in Sword / Ring / Coin catalog.
pub fn default_catalog() -> Result<ItemRegistry, AssetError> {
    catalog_from_str(DEFAULT_CATALOG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::ItemCatalog;

    #[test]
    fn default_catalog_has_demo_items() {
        let catalog = default_catalog().expect("built-in catalog parses");
        assert_eq!(catalog.len(), 3);

        let coin = catalog.resolve("coin").unwrap();
        assert_eq!(coin.max_stack(), 50);
        assert!(!coin.is_degradable());
        assert_eq!(coin.display_name, "Coin");
        assert_eq!(coin.icon, "coin");

        let sword = catalog.resolve("SWORD").unwrap();
        assert!(!sword.is_stackable());
        assert_eq!(sword.max_condition(), Some(100));
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let catalog = catalog_from_str(r#"[{ "name": "pebble" }]"#).unwrap();
        let pebble = catalog.resolve("pebble").unwrap();
        assert_eq!(pebble.max_stack(), 1);
        assert_eq!(pebble.max_condition(), None);
        assert_eq!(pebble.display_name, "pebble");
        assert!(pebble.description.is_empty());
    }

    #[test]
    fn custom_icon_is_kept() {
        let catalog =
            catalog_from_str(r#"[{ "name": "gem", "icon": "items/gem_blue", "max_stack": 8 }]"#)
                .unwrap();
        assert_eq!(catalog.resolve("gem").unwrap().icon, "items/gem_blue");
    }

    #[test]
    fn rejects_duplicate_names_after_normalization() {
        let err = catalog_from_str(r#"[{ "name": "Coin" }, { "name": "coin" }]"#).unwrap_err();
        assert!(matches!(err, AssetError::Invalid(_)), "unexpected error: {err}");
    }

    #[test]
    fn rejects_zero_stack_and_bad_names() {
        assert!(matches!(
            catalog_from_str(r#"[{ "name": "void", "max_stack": 0 }]"#),
            Err(AssetError::Invalid(_))
        ));
        assert!(matches!(
            catalog_from_str(r#"[{ "name": "what?" }]"#),
            Err(AssetError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            catalog_from_str("[{ \"name\": "),
            Err(AssetError::Parse(_))
        ));
    }
}
