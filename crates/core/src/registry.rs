//! Item keys and the catalog seam.
//!
//! Item keys are the stable, case-insensitive names content authors use to
//! refer to item definitions (e.g. `Sword`, `iron_ingot`). Keys are normalized
//! to lower case on parse so lookups by `"Sword"` and `"sword"` agree, and they
//! are ordered so registry iteration is deterministic.

use crate::item::{ItemDefinition, ItemRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Error returned when parsing an invalid [`ItemKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ItemKeyError {
    message: String,
}

impl ItemKeyError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A normalized item name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemKey(String);

impl ItemKey {
    /// Parse an item key, trimming surrounding whitespace and lower-casing it.
    pub fn parse(input: &str) -> Result<Self, ItemKeyError> {
        let normalized = input.trim().to_lowercase();
        validate_name(&normalized)?;
        Ok(Self(normalized))
    }

    /// The normalized key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemKey {
    type Err = ItemKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemKey {
    type Error = ItemKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemKey> for String {
    fn from(key: ItemKey) -> Self {
        key.0
    }
}

fn validate_name(name: &str) -> Result<(), ItemKeyError> {
    if name.is_empty() {
        return Err(ItemKeyError::new("ItemKey cannot be empty"));
    }
    if name.len() > 64 {
        return Err(ItemKeyError::new("ItemKey too long (max 64)"));
    }
    if !name
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | ' '))
    {
        return Err(ItemKeyError::new(
            "ItemKey has invalid characters (allowed: a-z0-9_.- and spaces)",
        ));
    }
    Ok(())
}

/// Resolves item definitions by name.
///
/// Lookups never fail loudly: an unknown or malformed name is simply `None`,
/// and callers decide whether that deserves a diagnostic.
pub trait ItemCatalog {
    /// Resolve `name` to a shared item definition.
    fn resolve(&self, name: &str) -> Option<ItemRef>;
}

/// In-memory catalog of item definitions keyed by [`ItemKey`].
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: BTreeMap<ItemKey, ItemRef>,
}

impl ItemRegistry {
    /// Construct a registry from the supplied definitions.
    ///
    /// Later definitions replace earlier ones with the same key.
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut registry = Self::default();
        for definition in definitions {
            registry.insert(definition);
        }
        registry
    }

    /// Insert a definition, returning the one it replaced.
    pub fn insert(&mut self, definition: ItemDefinition) -> Option<ItemRef> {
        self.items
            .insert(definition.key().clone(), Arc::new(definition))
    }

    /// Look up a definition by its key.
    pub fn get(&self, key: &ItemKey) -> Option<&ItemRef> {
        self.items.get(key)
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate definitions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.values()
    }
}

impl ItemCatalog for ItemRegistry {
    fn resolve(&self, name: &str) -> Option<ItemRef> {
        let key = ItemKey::parse(name).ok()?;
        self.items.get(&key).cloned()
    }
}
