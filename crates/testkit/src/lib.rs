#![warn(missing_docs)]
//! Shared testing surfaces: interaction event logs, fixture items and
//! property-test strategies.

mod fixtures;
mod strategies;

use anyhow::Result;
use satchel_core::InteractionTick;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use fixtures::*;
pub use strategies::*;

/// Primary event record captured by headless runs.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a, P: Serialize> {
    /// Interaction tick when the event occurred.
    pub tick: InteractionTick,
    /// Human-readable kind label.
    pub kind: &'a str,
    /// Event payload.
    pub payload: P,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write<T: Serialize>(&mut self, event: &T) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn jsonl_sink_writes_one_line_per_event() {
        let path = std::env::temp_dir().join(format!(
            "satchel-events-{}.jsonl",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut sink = JsonlSink::create(&path).expect("sink create");
        for tick in 0..2 {
            sink.write(&EventRecord {
                tick: InteractionTick(tick),
                kind: "click",
                payload: "ok",
            })
            .expect("write succeeds");
        }
        drop(sink);

        let contents = fs::read_to_string(&path).expect("file readable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#"{"tick":1,"kind":"click","payload":"ok"}"#);
    }
}
