use anyhow::Result;
use egui::{pos2, Pos2};
use satchel_core::InteractionTick;
use serde::Deserialize;
use std::{collections::VecDeque, fs, path::Path};

#[derive(Debug, Deserialize)]
struct ClickScriptFile {
    steps: Vec<ClickScriptStepDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct ClickScriptStepDef {
    tick: u64,
    x: f32,
    y: f32,
}

/// One scheduled pointer click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedClick {
    pub tick: InteractionTick,
    pub pos: Pos2,
}

/// Deterministic click script runner.
///
/// Scripts are a list of `{tick, x, y}` steps with strictly increasing ticks,
/// so at most one click resolves per tick.
#[derive(Debug)]
pub struct ClickScriptPlayer {
    pending: VecDeque<ScriptedClick>,
}

impl ClickScriptPlayer {
    /// Load a click script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load a click script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: ClickScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("click script contains no steps");
        }

        let mut pending = VecDeque::with_capacity(file.steps.len());
        let mut last_tick: Option<u64> = None;
        for step in file.steps {
            if !step.x.is_finite() || !step.y.is_finite() {
                anyhow::bail!("click script step at tick {} has a non-finite position", step.tick);
            }
            if let Some(prev) = last_tick {
                if step.tick <= prev {
                    anyhow::bail!("click script ticks must be strictly increasing");
                }
            }
            last_tick = Some(step.tick);

            pending.push_back(ScriptedClick {
                tick: InteractionTick(step.tick),
                pos: pos2(step.x, step.y),
            });
        }

        Ok(Self { pending })
    }

    /// Remove and return the next click if it is scheduled at or before `tick`.
    pub fn next_ready(&mut self, tick: InteractionTick) -> Option<ScriptedClick> {
        match self.pending.front() {
            Some(step) if step.tick <= tick => self.pending.pop_front(),
            _ => None,
        }
    }

    /// Tick of the next pending click.
    pub fn next_tick(&self) -> Option<InteractionTick> {
        self.pending.front().map(|step| step.tick)
    }
}
