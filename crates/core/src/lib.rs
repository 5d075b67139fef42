#![warn(missing_docs)]
//! Slot-based inventory primitives shared across the workspace.
//!
//! Items live in [`Slot`]s, slots live in [`SlotSet`]s, and quantities move
//! between slots through [`transfer`]. Item types are resolved through the
//! [`ItemCatalog`] seam so the model never touches asset storage itself.

pub mod error;
pub mod item;
pub mod registry;
pub mod seed;
pub mod slot;
pub mod slot_set;
pub mod transfer;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use error::{ItemNotFound, TransferError};
pub use item::{ItemDefinition, ItemRef};
pub use registry::{ItemCatalog, ItemKey, ItemKeyError, ItemRegistry};
pub use seed::{seed_slot_set, DEMO_ITEMS, DEMO_SLOT_COUNT};
pub use slot::{clamp_amount, clamp_condition, Slot, SlotContents, SlotObserver, SlotSpec};
pub use slot_set::SlotSet;
pub use transfer::{transfer, TransferOutcome, UnchangedReason};

/// Monotonic counter of player interactions. At most one transfer resolves
/// per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InteractionTick(pub u64);

impl InteractionTick {
    /// First tick of a session.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` ticks.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}

/// Reproducible RNG for demo seeding.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
