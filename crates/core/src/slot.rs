//! Slots - the only place an item can live.
//!
//! A slot holds at most one item type together with a quantity and a
//! condition. Every write goes through a guarded setter that re-applies the
//! clamping rules, so the following always hold:
//!
//! - an empty slot has `amount == 0` and `condition == 0`;
//! - an occupied slot has `1 <= amount <= max_stack`;
//! - `condition <= max_condition`, and non-degradable items carry condition 0.
//!
//! An amount write below 1 empties the slot entirely, so an item with a zero
//! quantity cannot be observed.

use crate::error::ItemNotFound;
use crate::item::{ItemDefinition, ItemRef};
use crate::registry::ItemCatalog;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Snapshot of what a slot currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContents {
    /// Nothing in the slot.
    Empty,
    /// An item stack.
    Occupied {
        /// The item type.
        item: ItemRef,
        /// Quantity, `1..=max_stack`.
        amount: u32,
        /// Condition, `0..=max_condition`.
        condition: u32,
    },
}

impl SlotContents {
    /// Whether the snapshot holds an item.
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotContents::Empty)
    }

    /// Item held, if any.
    pub fn item(&self) -> Option<&ItemRef> {
        match self {
            SlotContents::Empty => None,
            SlotContents::Occupied { item, .. } => Some(item),
        }
    }

    /// Quantity held (0 when empty).
    pub fn amount(&self) -> u32 {
        match self {
            SlotContents::Empty => 0,
            SlotContents::Occupied { amount, .. } => *amount,
        }
    }

    /// Condition held (0 when empty).
    pub fn condition(&self) -> u32 {
        match self {
            SlotContents::Empty => 0,
            SlotContents::Occupied { condition, .. } => *condition,
        }
    }
}

/// Receives change notifications from a single slot.
///
/// Implemented by the presentation layer. Notifications may repeat with
/// unchanged contents, so handlers must be idempotent.
pub trait SlotObserver {
    /// Called after the slot's contents were written.
    fn slot_changed(&mut self, contents: &SlotContents);

    /// Called when the observer is detached from its slot.
    fn detached(&mut self) {}
}

/// Name-based recipe for a slot, resolved against an [`ItemCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    /// Item name (case-insensitive).
    pub name: String,
    /// Requested quantity, clamped on construction.
    pub amount: i64,
    /// Requested condition, clamped on construction.
    pub condition: i64,
}

impl SlotSpec {
    /// A spec with explicit amount and condition.
    pub fn new(name: impl Into<String>, amount: i64, condition: i64) -> Self {
        Self {
            name: name.into(),
            amount,
            condition,
        }
    }

    /// A single unit in condition 0.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 1, 0)
    }
}

/// One inventory, container, toolbelt or cursor slot.
#[derive(Default)]
pub struct Slot {
    item: Option<ItemRef>,
    amount: u32,
    condition: u32,
    observer: Option<Box<dyn SlotObserver>>,
}

impl Slot {
    /// Create an empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a slot holding `item`, clamping amount and condition.
    pub fn new(item: ItemRef, amount: i64, condition: i64) -> Self {
        let mut slot = Self::empty();
        slot.write(Some(item), amount, condition);
        slot
    }

    /// Resolve `spec` against `catalog`.
    pub fn resolve<C>(catalog: &C, spec: &SlotSpec) -> Result<Self, ItemNotFound>
    where
        C: ItemCatalog + ?Sized,
    {
        let item = catalog.resolve(&spec.name).ok_or_else(|| ItemNotFound {
            name: spec.name.clone(),
        })?;
        Ok(Self::new(item, spec.amount, spec.condition))
    }

    /// Resolve `spec` against `catalog`, falling back to an empty slot.
    ///
    /// A miss is logged and otherwise ignored.
    pub fn from_catalog<C>(catalog: &C, spec: &SlotSpec) -> Self
    where
        C: ItemCatalog + ?Sized,
    {
        match Self::resolve(catalog, spec) {
            Ok(slot) => slot,
            Err(err) => {
                warn!(%err, "item slot is empty");
                Self::empty()
            }
        }
    }

    /// Item type held, if any.
    pub fn item(&self) -> Option<&ItemRef> {
        self.item.as_ref()
    }

    /// Quantity held.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Condition of the held item(s).
    pub fn condition(&self) -> u32 {
        self.condition
    }

    /// Whether the slot holds an item.
    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    /// Whether the held stack is at its cap. Empty slots are never full.
    pub fn is_full(&self) -> bool {
        self.item
            .as_ref()
            .is_some_and(|item| self.amount >= item.max_stack())
    }

    /// Snapshot of the current contents.
    pub fn contents(&self) -> SlotContents {
        match &self.item {
            None => SlotContents::Empty,
            Some(item) => SlotContents::Occupied {
                item: Arc::clone(item),
                amount: self.amount,
                condition: self.condition,
            },
        }
    }

    /// Whether two slots hold the same item (or are both empty) in the same
    /// condition. Only equivalent slots may merge.
    pub fn is_equivalent(&self, other: &Slot) -> bool {
        same_item(self.item.as_ref(), other.item.as_ref()) && self.condition == other.condition
    }

    /// Replace the whole contents of the slot.
    pub fn put(&mut self, item: Option<ItemRef>, amount: i64, condition: i64) {
        self.write(item, amount, condition);
        self.notify();
    }

    /// Set the quantity. Values below 1 empty the slot.
    pub fn set_amount(&mut self, amount: i64) {
        self.write_amount(amount);
        self.notify();
    }

    /// Set the condition, clamped to `0..=max_condition`.
    pub fn set_condition(&mut self, condition: i64) {
        self.condition = clamp_condition(self.item.as_deref(), condition);
        self.notify();
    }

    /// Empty the slot with a single notification.
    pub fn clear(&mut self) {
        self.write_clear();
        self.notify();
    }

    /// Attach a change observer, detaching any previous one.
    ///
    /// The new observer is notified immediately with the current contents.
    pub fn attach(&mut self, observer: Box<dyn SlotObserver>) {
        if let Some(mut previous) = self.observer.replace(observer) {
            previous.detached();
        }
        self.notify();
    }

    /// Detach the current observer, if any. The slot's data is untouched.
    pub fn detach(&mut self) -> Option<Box<dyn SlotObserver>> {
        let mut observer = self.observer.take()?;
        observer.detached();
        Some(observer)
    }

    /// Whether an observer is attached.
    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Re-send the current contents to the attached observer.
    pub fn notify(&mut self) {
        if self.observer.is_none() {
            return;
        }
        let contents = self.contents();
        if let Some(observer) = self.observer.as_mut() {
            observer.slot_changed(&contents);
        }
    }

    pub(crate) fn write(&mut self, item: Option<ItemRef>, amount: i64, condition: i64) {
        self.item = item;
        self.write_amount(amount);
        self.condition = clamp_condition(self.item.as_deref(), condition);
    }

    pub(crate) fn write_amount(&mut self, amount: i64) {
        self.amount = clamp_amount(self.item.as_deref(), amount);
        if self.amount == 0 {
            self.write_clear();
        }
    }

    pub(crate) fn write_clear(&mut self) {
        self.item = None;
        self.amount = 0;
        self.condition = 0;
    }

    /// Exchange item, amount and condition with `other`. Observers stay put.
    pub(crate) fn swap_contents(&mut self, other: &mut Slot) {
        std::mem::swap(&mut self.item, &mut other.item);
        std::mem::swap(&mut self.amount, &mut other.amount);
        std::mem::swap(&mut self.condition, &mut other.condition);
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("item", &self.item.as_ref().map(|item| item.name()))
            .field("amount", &self.amount)
            .field("condition", &self.condition)
            .field("attached", &self.observer.is_some())
            .finish()
    }
}

fn same_item(a: Option<&ItemRef>, b: Option<&ItemRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || **a == **b,
        _ => false,
    }
}

/// Clamp a requested quantity for a slot holding `item`.
///
/// Empty slots always hold 0; values above the stack cap are capped and values
/// below 1 become 0.
pub fn clamp_amount(item: Option<&ItemDefinition>, value: i64) -> u32 {
    let Some(item) = item else {
        return 0;
    };
    if value > i64::from(item.max_stack()) {
        item.max_stack()
    } else if value < 1 {
        0
    } else {
        value as u32
    }
}

/// Clamp a requested condition for a slot holding `item`.
///
/// Empty slots and non-degradable items always hold 0; other values are kept
/// within `0..=max_condition`.
pub fn clamp_condition(item: Option<&ItemDefinition>, value: i64) -> u32 {
    let Some(max) = item.and_then(ItemDefinition::max_condition) else {
        return 0;
    };
    if value > i64::from(max) {
        max
    } else if value < 0 {
        0
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ItemKey, ItemRegistry};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn coin() -> ItemRef {
        Arc::new(ItemDefinition::new(ItemKey::parse("coin").unwrap(), 50))
    }

    fn sword() -> ItemRef {
        Arc::new(ItemDefinition::new(ItemKey::parse("sword").unwrap(), 1).with_max_condition(100))
    }

    #[derive(Default)]
    struct Recorder {
        seen: Rc<RefCell<Vec<SlotContents>>>,
        detached: Rc<RefCell<u32>>,
    }

    impl SlotObserver for Recorder {
        fn slot_changed(&mut self, contents: &SlotContents) {
            self.seen.borrow_mut().push(contents.clone());
        }

        fn detached(&mut self) {
            *self.detached.borrow_mut() += 1;
        }
    }

    #[test]
    fn amount_is_clamped_to_stack_cap() {
        let mut slot = Slot::new(coin(), 30, 0);
        slot.set_amount(500);
        assert_eq!(slot.amount(), 50);
        slot.set_amount(7);
        assert_eq!(slot.amount(), 7);
    }

    #[test]
    fn amount_below_one_empties_slot() {
        let mut slot = Slot::new(sword(), 1, 80);
        slot.set_amount(0);
        assert!(!slot.has_item());
        assert_eq!(slot.amount(), 0);
        assert_eq!(slot.condition(), 0);

        let mut slot = Slot::new(coin(), 10, 0);
        slot.set_amount(-3);
        assert_eq!(slot.contents(), SlotContents::Empty);
    }

    #[test]
    fn empty_slot_ignores_amount_and_condition() {
        let mut slot = Slot::empty();
        slot.set_amount(12);
        slot.set_condition(40);
        assert_eq!(slot.amount(), 0);
        assert_eq!(slot.condition(), 0);
    }

    #[test]
    fn condition_is_clamped_on_both_ends() {
        let mut slot = Slot::new(sword(), 1, 250);
        assert_eq!(slot.condition(), 100);
        slot.set_condition(-5);
        assert_eq!(slot.condition(), 0);
        slot.set_condition(42);
        assert_eq!(slot.condition(), 42);
    }

    #[test]
    fn non_degradable_items_have_no_condition() {
        let slot = Slot::new(coin(), 5, 77);
        assert_eq!(slot.condition(), 0);
    }

    #[test]
    fn equivalence_uses_item_and_condition() {
        let worn = Slot::new(sword(), 1, 20);
        let pristine = Slot::new(sword(), 1, 100);
        let also_worn = Slot::new(sword(), 1, 20);

        assert!(!worn.is_equivalent(&pristine));
        assert!(worn.is_equivalent(&also_worn));
        assert!(Slot::empty().is_equivalent(&Slot::empty()));
        assert!(!Slot::empty().is_equivalent(&worn));
    }

    #[test]
    fn same_key_with_different_caps_is_not_equivalent() {
        let key = ItemKey::parse("coin").unwrap();
        let purse = Arc::new(ItemDefinition::new(key.clone(), 50));
        let pouch = Arc::new(ItemDefinition::new(key.clone(), 10));
        let reloaded = Arc::new(ItemDefinition::new(key, 50));

        assert!(!Slot::new(purse.clone(), 30, 0).is_equivalent(&Slot::new(pouch, 5, 0)));
        assert!(Slot::new(purse, 30, 0).is_equivalent(&Slot::new(reloaded, 5, 0)));
    }

    #[test]
    fn catalog_miss_yields_empty_slot() {
        let registry = ItemRegistry::new(vec![ItemDefinition::new(
            ItemKey::parse("coin").unwrap(),
            50,
        )]);

        let err = Slot::resolve(&registry, &SlotSpec::named("dragon egg")).unwrap_err();
        assert_eq!(err.name, "dragon egg");

        let slot = Slot::from_catalog(&registry, &SlotSpec::named("dragon egg"));
        assert_eq!(slot.contents(), SlotContents::Empty);

        let slot = Slot::from_catalog(&registry, &SlotSpec::new("Coin", 12, 0));
        assert_eq!(slot.amount(), 12);
        assert_eq!(slot.item().unwrap().name(), "coin");
    }

    #[test]
    fn setters_notify_attached_observer() {
        let recorder = Recorder::default();
        let seen = Rc::clone(&recorder.seen);
        let mut slot = Slot::new(coin(), 3, 0);

        slot.attach(Box::new(recorder));
        slot.set_amount(9);
        slot.clear();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].amount(), 3);
        assert_eq!(seen[1].amount(), 9);
        assert_eq!(seen[2], SlotContents::Empty);
    }

    #[test]
    fn detach_keeps_data_and_silences_notifications() {
        let recorder = Recorder::default();
        let seen = Rc::clone(&recorder.seen);
        let detached = Rc::clone(&recorder.detached);
        let mut slot = Slot::new(coin(), 3, 0);

        slot.attach(Box::new(recorder));
        assert!(slot.is_attached());
        assert!(slot.detach().is_some());
        assert!(!slot.is_attached());
        assert!(slot.detach().is_none());

        slot.set_amount(8);
        assert_eq!(slot.amount(), 8);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(*detached.borrow(), 1);
    }

    #[test]
    fn attaching_replaces_previous_observer() {
        let first = Recorder::default();
        let first_detached = Rc::clone(&first.detached);
        let second = Recorder::default();
        let second_seen = Rc::clone(&second.seen);
        let mut slot = Slot::empty();

        slot.attach(Box::new(first));
        slot.attach(Box::new(second));

        assert_eq!(*first_detached.borrow(), 1);
        assert_eq!(second_seen.borrow().as_slice(), &[SlotContents::Empty]);
    }
}
