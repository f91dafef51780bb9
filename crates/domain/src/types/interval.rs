//! Vehicle presence intervals recorded by the geofence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{GeofleetError, Result};

/// Vehicle identifier as exported by the telematics system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub i64);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VehicleId {
    type Err = GeofleetError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| GeofleetError::InvalidInput(format!("invalid vehicle id '{s}': {e}")))
    }
}

impl From<i64> for VehicleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// One stay of a vehicle inside the geofence.
///
/// Invariant: `exit_time >= enter_time`. The only constructor enforces it,
/// including deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPresenceInterval")]
pub struct PresenceInterval {
    vehicle_id: VehicleId,
    enter_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
}

impl PresenceInterval {
    /// Create a validated interval
    ///
    /// # Errors
    /// Returns `GeofleetError::MalformedInterval` if `exit_time < enter_time`.
    pub fn new(
        vehicle_id: VehicleId,
        enter_time: DateTime<Utc>,
        exit_time: DateTime<Utc>,
    ) -> Result<Self> {
        if exit_time < enter_time {
            return Err(GeofleetError::MalformedInterval(format!(
                "vehicle {vehicle_id} exits at {exit_time} before entering at {enter_time}"
            )));
        }
        Ok(Self { vehicle_id, enter_time, exit_time })
    }

    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    pub fn enter_time(&self) -> DateTime<Utc> {
        self.enter_time
    }

    pub fn exit_time(&self) -> DateTime<Utc> {
        self.exit_time
    }

    /// Whether the vehicle is inside the geofence at `instant` (both bounds
    /// inclusive).
    pub fn covers(&self, instant: DateTime<Utc>) -> bool {
        self.enter_time <= instant && instant <= self.exit_time
    }
}

#[derive(Deserialize)]
struct RawPresenceInterval {
    vehicle_id: VehicleId,
    enter_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
}

impl TryFrom<RawPresenceInterval> for PresenceInterval {
    type Error = GeofleetError;

    fn try_from(raw: RawPresenceInterval) -> Result<Self> {
        Self::new(raw.vehicle_id, raw.enter_time, raw.exit_time)
    }
}
