//! Port interfaces for presence data
//!
//! These traits define the boundary between the analysis and whatever
//! supplies the intervals (files, fixtures, other exporters).

use geofleet_domain::{PresenceDataset, Result};

/// Supplies the validated presence dataset for one analysis run
pub trait PresenceSource {
    /// Load every interval, failing on the first malformed record
    fn load(&self) -> Result<PresenceDataset>;

    /// Human-readable origin used in logs (a path, `stdin`, ...)
    fn describe(&self) -> String;
}
