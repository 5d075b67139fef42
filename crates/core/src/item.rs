//! Item definitions - the static description of an item type.

use crate::registry::ItemKey;
use std::sync::Arc;

/// Shared handle to an item definition.
///
/// Slots hold definitions by reference; the catalog owns them.
pub type ItemRef = Arc<ItemDefinition>;

/// Immutable description of an item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    key: ItemKey,
    /// Human-readable name shown in tooltips.
    pub display_name: String,
    /// Flavour text.
    pub description: String,
    /// Icon identifier resolved by the presentation layer.
    pub icon: String,
    max_stack: u32,
    max_condition: Option<u32>,
}

impl ItemDefinition {
    /// Create a non-degradable definition with the given stack cap.
    ///
    /// A stack cap of 0 is raised to 1.
    pub fn new(key: ItemKey, max_stack: u32) -> Self {
        Self {
            display_name: key.to_string(),
            description: String::new(),
            icon: key.to_string(),
            key,
            max_stack: max_stack.max(1),
            max_condition: None,
        }
    }

    /// Set the maximum condition. Negative values mark the item non-degradable.
    pub fn with_max_condition(mut self, max_condition: i32) -> Self {
        self.max_condition = u32::try_from(max_condition).ok();
        self
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Unique key of this item type.
    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    /// Normalized item name.
    pub fn name(&self) -> &str {
        self.key.as_str()
    }

    /// Maximum quantity a single slot can hold (always >= 1).
    pub fn max_stack(&self) -> u32 {
        self.max_stack
    }

    /// Maximum condition, or `None` when the item never degrades.
    pub fn max_condition(&self) -> Option<u32> {
        self.max_condition
    }

    /// Whether more than one unit fits in a slot.
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    /// Whether the item tracks condition.
    pub fn is_degradable(&self) -> bool {
        self.max_condition.is_some()
    }
}
