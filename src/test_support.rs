//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::engine::{Engine, RenderSink};
use crate::core::state::{AngleMode, Snapshot};

/// A sink that keeps every snapshot it was handed.
#[derive(Default)]
pub struct RecordingSink {
    pub snapshots: Vec<Snapshot>,
}

impl RecordingSink {
    pub fn count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

/// Creates a fresh engine in degree mode that records its renders.
pub fn recording_engine() -> Engine<RecordingSink> {
    engine_with(AngleMode::Deg)
}

pub fn engine_with(angle_mode: AngleMode) -> Engine<RecordingSink> {
    Engine::with_angle_mode(RecordingSink::default(), angle_mode)
}
