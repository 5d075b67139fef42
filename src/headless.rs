use crate::click_script::ClickScriptPlayer;
use crate::config::DemoConfig;
use crate::interaction::ClickHandler;
use anyhow::{Context, Result};
use satchel_core::{seed_slot_set, seeded_rng, ItemRegistry, SlotContents};
use satchel_testkit::{EventRecord, JsonlSink};
use satchel_ui::ContainerWindow;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Inputs of a headless run.
pub struct HeadlessConfig {
    /// Container layout and seeding parameters.
    pub demo: DemoConfig,
    /// Catalog the container is seeded from.
    pub catalog: ItemRegistry,
    /// Clicks to replay, if any.
    pub script: Option<ClickScriptPlayer>,
    /// Overrides `demo.seed` when set.
    pub seed: Option<u64>,
    /// JSONL file receiving one event per click.
    pub event_log: Option<PathBuf>,
}

/// Final state of a headless run.
#[derive(Debug)]
pub struct RunSummary {
    /// Window title as displayed.
    pub title: String,
    /// Container contents in slot order.
    pub slots: Vec<SlotContents>,
    /// What the cursor still holds.
    pub cursor: SlotContents,
    /// Clicks replayed, hits and misses alike.
    pub clicks: usize,
    /// Clicks that changed at least one slot.
    pub transfers: usize,
}

impl RunSummary {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({} clicks, {} transfers)",
            self.title, self.clicks, self.transfers
        );
        for (index, contents) in self.slots.iter().enumerate() {
            let _ = writeln!(out, "  [{index:>2}] {}", describe(contents));
        }
        let _ = writeln!(out, "  cursor {}", describe(&self.cursor));
        out
    }
}

/// One-line text form of slot contents, e.g. `coin x30` or `sword x1 (80/100)`.
pub fn describe(contents: &SlotContents) -> String {
    match contents {
        SlotContents::Empty => "empty".to_string(),
        SlotContents::Occupied {
            item,
            amount,
            condition,
        } => match item.max_condition() {
            Some(max) => format!("{} x{amount} ({condition}/{max})", item.name()),
            None => format!("{} x{amount}", item.name()),
        },
    }
}

pub fn run(cfg: HeadlessConfig) -> Result<RunSummary> {
    let demo = cfg.demo;
    let seed = cfg.seed.unwrap_or(demo.seed);
    let mut rng = seeded_rng(seed);
    let mut slots = seed_slot_set(
        &demo.container_title,
        &cfg.catalog,
        &demo.seed_items,
        demo.slot_count,
        &mut rng,
    );
    info!(seed, slots = slots.len(), used = slots.used_slots(), "seeded container");

    let mut sink = match &cfg.event_log {
        Some(path) => Some(
            JsonlSink::create(path)
                .with_context(|| format!("failed to create event log {}", path.display()))?,
        ),
        None => None,
    };

    let grid = demo.grid();
    let mut window = ContainerWindow::new(demo.container_title.clone(), grid);
    window.open(&mut slots);
    let mut handler = ClickHandler::new(grid.cell_size);

    let mut clicks = 0;
    let mut transfers = 0;
    if let Some(mut script) = cfg.script {
        while let Some(tick) = script.next_tick() {
            let Some(click) = script.next_ready(tick) else {
                break;
            };
            let record = handler.click_at(&window, &mut slots, click.pos)?;
            clicks += 1;
            if record.outcome.is_some_and(|outcome| outcome.is_change()) {
                transfers += 1;
            }
            if let Some(sink) = sink.as_mut() {
                sink.write(&EventRecord {
                    tick: click.tick,
                    kind: "click",
                    payload: record,
                })?;
            }
        }
    }

    window.close(&mut slots);
    let cursor_icon = handler.cursor_widget().icon().map(str::to_owned);
    info!(clicks, transfers, cursor = ?cursor_icon, "click script finished");

    Ok(RunSummary {
        title: window.title(),
        slots: slots.contents(),
        cursor: handler.cursor().contents(),
        clicks,
        transfers,
    })
}
