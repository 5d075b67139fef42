//! Click-to-transfer between a source slot (usually the cursor) and a
//! destination slot.
//!
//! The decision order is fixed: equivalence first, then stackability, then
//! destination fullness, then overflow arithmetic. Both slots are fully
//! written before either observer hears about it.

use crate::slot::Slot;
use serde::Serialize;
use tracing::debug;

/// What a transfer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferOutcome {
    /// Contents were exchanged wholesale.
    Swapped,
    /// The whole source stack moved into the destination; the source is empty.
    Merged {
        /// Units moved.
        moved: u32,
    },
    /// The destination was topped up to its cap; the rest stayed in the source.
    Split {
        /// Units moved.
        moved: u32,
        /// Units left in the source.
        remaining: u32,
    },
    /// Nothing changed.
    Unchanged(UnchangedReason),
}

impl TransferOutcome {
    /// Whether either slot was written.
    pub fn is_change(&self) -> bool {
        !matches!(self, TransferOutcome::Unchanged(_))
    }
}

/// Why an equivalent pair of slots was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnchangedReason {
    /// Both slots are empty.
    Empty,
    /// Identical single-unit items.
    NotStackable,
    /// The destination stack is already at its cap.
    DestinationFull,
}

/// Move the contents of `source` into `destination`.
///
/// Slots that are not equivalent swap contents. Equivalent stackable slots
/// merge as far as the destination's cap allows.
pub fn transfer(source: &mut Slot, destination: &mut Slot) -> TransferOutcome {
    let outcome = apply(source, destination);
    if outcome.is_change() {
        destination.notify();
        source.notify();
    }
    debug!(?outcome, "transfer resolved");
    outcome
}

fn apply(source: &mut Slot, destination: &mut Slot) -> TransferOutcome {
    if !source.is_equivalent(destination) {
        source.swap_contents(destination);
        return TransferOutcome::Swapped;
    }

    let Some(item) = source.item() else {
        return TransferOutcome::Unchanged(UnchangedReason::Empty);
    };
    if !item.is_stackable() {
        return TransferOutcome::Unchanged(UnchangedReason::NotStackable);
    }

    let max_stack = item.max_stack();
    if destination.amount() == max_stack {
        return TransferOutcome::Unchanged(UnchangedReason::DestinationFull);
    }

    let total = u64::from(source.amount()) + u64::from(destination.amount());
    if total <= u64::from(max_stack) {
        let moved = source.amount();
        destination.write_amount(total as i64);
        source.write_clear();
        TransferOutcome::Merged { moved }
    } else {
        let moved = max_stack - destination.amount();
        let remaining = (total - u64::from(max_stack)) as u32;
        destination.write_amount(i64::from(max_stack));
        source.write_amount(i64::from(remaining));
        TransferOutcome::Split { moved, remaining }
    }
}
