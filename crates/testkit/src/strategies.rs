//! Proptest strategies for slot contents.

use crate::fixtures::{arrow, coin, fixture_ref, ring, sword};
use proptest::prelude::*;
use satchel_core::{ItemRef, Slot};

/// Requested slot contents, before clamping.
#[derive(Debug, Clone)]
pub struct SlotState {
    /// Item to place, or `None` for an empty slot.
    pub item: Option<ItemRef>,
    /// Requested amount.
    pub amount: i64,
    /// Requested condition.
    pub condition: i64,
}

impl SlotState {
    /// Build a slot from this state through the guarded constructor.
    pub fn build(&self) -> Slot {
        match &self.item {
            Some(item) => Slot::new(item.clone(), self.amount, self.condition),
            None => Slot::empty(),
        }
    }
}

/// Any fixture item.
pub fn arb_item() -> impl Strategy<Value = ItemRef> {
    prop_oneof![
        Just(fixture_ref(coin())),
        Just(fixture_ref(sword())),
        Just(fixture_ref(ring())),
        Just(fixture_ref(arrow())),
    ]
}

/// Fixture items with a stack cap above 1.
pub fn arb_stackable_item() -> impl Strategy<Value = ItemRef> {
    prop_oneof![Just(fixture_ref(coin())), Just(fixture_ref(arrow()))]
}

/// Requested amounts, including out-of-range values.
pub fn arb_amount() -> impl Strategy<Value = i64> {
    -100i64..200
}

/// Requested conditions, including out-of-range values.
pub fn arb_condition() -> impl Strategy<Value = i64> {
    -20i64..150
}

/// Possibly-empty slot state with arbitrary requested values.
pub fn arb_slot_state() -> impl Strategy<Value = SlotState> {
    (
        proptest::option::of(arb_item()),
        arb_amount(),
        arb_condition(),
    )
        .prop_map(|(item, amount, condition)| SlotState {
            item,
            amount,
            condition,
        })
}
