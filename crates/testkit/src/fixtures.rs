//! Fixture items used across tests.

use satchel_core::{ItemDefinition, ItemKey, ItemRef, ItemRegistry};
use std::sync::Arc;

/// Stack cap of the fixture coin.
pub const COIN_MAX_STACK: u32 = 50;

/// Condition cap of the fixture sword and ring.
pub const GEAR_MAX_CONDITION: i32 = 100;

fn key(name: &str) -> ItemKey {
    ItemKey::parse(name).unwrap_or_else(|err| panic!("fixture key {name:?} is invalid: {err}"))
}

/// Stackable, non-degradable currency.
pub fn coin() -> ItemDefinition {
    ItemDefinition::new(key("coin"), COIN_MAX_STACK).with_display_name("Coin")
}

/// Single-unit, degradable weapon.
pub fn sword() -> ItemDefinition {
    ItemDefinition::new(key("sword"), 1)
        .with_max_condition(GEAR_MAX_CONDITION)
        .with_display_name("Sword")
}

/// Single-unit, degradable trinket.
pub fn ring() -> ItemDefinition {
    ItemDefinition::new(key("ring"), 1)
        .with_max_condition(GEAR_MAX_CONDITION)
        .with_display_name("Ring")
}

/// Stackable and degradable, for exercising merges that depend on condition.
pub fn arrow() -> ItemDefinition {
    ItemDefinition::new(key("arrow"), 16)
        .with_max_condition(10)
        .with_display_name("Arrow")
}

/// Registry holding every fixture item.
pub fn fixture_registry() -> ItemRegistry {
    ItemRegistry::new(vec![coin(), sword(), ring(), arrow()])
}

/// Shared handle to a fixture item, as a catalog would hand it out.
pub fn fixture_ref(definition: ItemDefinition) -> ItemRef {
    Arc::new(definition)
}
