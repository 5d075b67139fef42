//! Placeholder container contents for demos and tests.

use crate::item::ItemRef;
use crate::registry::ItemCatalog;
use crate::slot::Slot;
use crate::slot_set::SlotSet;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Slot count of the demo container.
pub const DEMO_SLOT_COUNT: usize = 14;

/// Item names the demo container draws from.
pub const DEMO_ITEMS: [&str; 3] = ["sword", "ring", "coin"];

/// Build a container of `count` slots filled with random items from `names`.
///
/// Each slot picks one of the resolvable names uniformly, an amount in
/// `1..max_stack` (1 for single-unit items), and the item's best condition.
/// Names the catalog cannot resolve are skipped; if none resolve, the slots
/// are left empty.
pub fn seed_slot_set<C, R, S>(
    container: &str,
    catalog: &C,
    names: &[S],
    count: usize,
    rng: &mut R,
) -> SlotSet
where
    C: ItemCatalog + ?Sized,
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let pool: Vec<ItemRef> = names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let resolved = catalog.resolve(name);
            if resolved.is_none() {
                warn!(item = name, "seed item not found in catalog; skipping");
            }
            resolved
        })
        .collect();

    let mut set = SlotSet::new(container);
    for _ in 0..count {
        let slot = match pool.choose(rng) {
            Some(item) => random_stack(item, rng),
            None => Slot::empty(),
        };
        set.push(slot);
    }
    set
}

fn random_stack<R: Rng + ?Sized>(item: &ItemRef, rng: &mut R) -> Slot {
    let amount = if item.is_stackable() {
        rng.gen_range(1..item.max_stack())
    } else {
        1
    };
    let condition = item.max_condition().unwrap_or(0);
    Slot::new(item.clone(), i64::from(amount), i64::from(condition))
}
