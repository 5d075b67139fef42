//! Ordered slot collections backing a single container.

use crate::error::TransferError;
use crate::registry::{ItemCatalog, ItemKey};
use crate::slot::{Slot, SlotContents, SlotSpec};
use crate::transfer::{transfer, TransferOutcome};

/// The slots of one container (inventory, chest, toolbelt, ...).
///
/// Slot positions are stable for the lifetime of the set. Dropping the set
/// releases its slots.
#[derive(Debug, Default)]
pub struct SlotSet {
    name: String,
    slots: Vec<Slot>,
}

impl SlotSet {
    /// Create an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    /// Create a container with `count` empty slots.
    pub fn with_empty_slots(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            slots: (0..count).map(|_| Slot::empty()).collect(),
        }
    }

    /// Create a container from pre-built slots.
    pub fn from_slots(name: impl Into<String>, slots: Vec<Slot>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    /// Create a container by resolving each spec against `catalog`.
    ///
    /// Unknown names produce empty slots in place, so positions are preserved.
    pub fn from_specs<C>(name: impl Into<String>, catalog: &C, specs: &[SlotSpec]) -> Self
    where
        C: ItemCatalog + ?Sized,
    {
        let slots = specs
            .iter()
            .map(|spec| Slot::from_catalog(catalog, spec))
            .collect();
        Self::from_slots(name, slots)
    }

    /// Container name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the container has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a slot, returning its index.
    pub fn push(&mut self, slot: Slot) -> usize {
        self.slots.push(slot);
        self.slots.len() - 1
    }

    /// Get a slot by index.
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Get a mutable slot by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Iterate slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Iterate slots mutably in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots.iter_mut()
    }

    /// Snapshot every slot in order.
    pub fn contents(&self) -> Vec<SlotContents> {
        self.slots.iter().map(Slot::contents).collect()
    }

    /// Number of occupied slots.
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.has_item()).count()
    }

    /// Number of empty slots.
    pub fn empty_slots(&self) -> usize {
        self.len() - self.used_slots()
    }

    /// Total quantity of an item across all slots.
    pub fn count_item(&self, key: &ItemKey) -> u64 {
        self.slots
            .iter()
            .filter(|slot| slot.item().is_some_and(|item| item.key() == key))
            .map(|slot| u64::from(slot.amount()))
            .sum()
    }

    /// Transfer from an external slot (usually the cursor) onto slot `index`.
    ///
    /// The index is validated before either slot is touched.
    pub fn transfer_from(
        &mut self,
        source: &mut Slot,
        index: usize,
    ) -> Result<TransferOutcome, TransferError> {
        let len = self.slots.len();
        let destination = self
            .slots
            .get_mut(index)
            .ok_or(TransferError::SlotOutOfRange { index, len })?;
        Ok(transfer(source, destination))
    }

    /// Transfer between two slots of this container.
    pub fn transfer_between(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<TransferOutcome, TransferError> {
        let (source, destination) = self.pair_mut(from, to)?;
        Ok(transfer(source, destination))
    }

    /// Detach every slot's observer, keeping the slot data. Returns how many
    /// observers were detached.
    pub fn detach_all(&mut self) -> usize {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.detach())
            .count()
    }

    fn pair_mut(&mut self, a: usize, b: usize) -> Result<(&mut Slot, &mut Slot), TransferError> {
        let len = self.slots.len();
        for index in [a, b] {
            if index >= len {
                return Err(TransferError::SlotOutOfRange { index, len });
            }
        }
        if a == b {
            return Err(TransferError::SameSlot(a));
        }

        if a < b {
            let (head, tail) = self.slots.split_at_mut(b);
            Ok((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.slots.split_at_mut(a);
            Ok((&mut tail[0], &mut head[b]))
        }
    }
}
