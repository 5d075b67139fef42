//! Error types surfaced by the slot model.
//!
//! Out-of-range amounts and conditions are not errors; they are clamped by the
//! slot setters. What remains are catalog misses (non-fatal, reported to the
//! caller) and transfer precondition violations (rejected before any slot is
//! touched).

use thiserror::Error;

/// A slot was requested for an item the catalog does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not find item \"{name}\"")]
pub struct ItemNotFound {
    /// The name that failed to resolve.
    pub name: String,
}

/// A transfer was requested against slots that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The target index does not name a slot in the container.
    #[error("slot {index} is out of range for a container of {len} slots")]
    SlotOutOfRange {
        /// Requested slot index.
        index: usize,
        /// Number of slots in the container.
        len: usize,
    },
    /// Source and destination are the same slot.
    #[error("cannot transfer slot {0} onto itself")]
    SameSlot(usize),
}
