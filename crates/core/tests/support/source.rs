use std::cell::Cell;

use geofleet_core::PresenceSource;
use geofleet_domain::{PresenceDataset, PresenceInterval, Result};

/// In-memory `PresenceSource` that counts how often it is loaded.
#[derive(Default)]
pub struct MemorySource {
    intervals: Vec<PresenceInterval>,
    loads: Cell<usize>,
}

impl MemorySource {
    pub fn new(intervals: Vec<PresenceInterval>) -> Self {
        Self { intervals, loads: Cell::new(0) }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl PresenceSource for MemorySource {
    fn load(&self) -> Result<PresenceDataset> {
        self.loads.set(self.loads.get() + 1);
        Ok(PresenceDataset::new(self.intervals.clone()))
    }

    fn describe(&self) -> String {
        format!("memory ({} intervals)", self.intervals.len())
    }
}
