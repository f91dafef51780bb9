//! Order in which vehicles are sold during a fleet reduction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::VehicleId;
use crate::errors::GeofleetError;

/// Which vehicles go first when `n` vehicles are removed.
///
/// Config files use snake_case names (`"descending_id"`) or a table for the
/// explicit order (`{ explicit = [3, 1, 2] }`). The command line and
/// environment use the textual form accepted by `FromStr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Vehicles are sold in the order their id first appears in the
    /// time-ordered dataset.
    #[default]
    FirstAppearance,
    AscendingId,
    DescendingId,
    /// Caller-supplied order. Unlisted vehicles follow in first-appearance
    /// order; ids that are not part of the fleet are ignored.
    Explicit(Vec<VehicleId>),
}

impl fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstAppearance => f.write_str("first_appearance"),
            Self::AscendingId => f.write_str("ascending_id"),
            Self::DescendingId => f.write_str("descending_id"),
            Self::Explicit(ids) => {
                f.write_str("explicit:")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{id}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for RemovalPolicy {
    type Err = GeofleetError;

    /// Parse `first_appearance`, `ascending_id`, `descending_id` or
    /// `explicit:<id>,<id>,...`. Dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((head, list)) = trimmed.split_once(':') {
            if head.trim().eq_ignore_ascii_case("explicit") {
                let ids = list
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(VehicleId::from_str)
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Self::Explicit(ids));
            }
        }

        match trimmed.to_lowercase().replace('-', "_").as_str() {
            "first_appearance" => Ok(Self::FirstAppearance),
            "ascending_id" => Ok(Self::AscendingId),
            "descending_id" => Ok(Self::DescendingId),
            _ => Err(GeofleetError::Config(format!("Invalid removal policy: {s}"))),
        }
    }
}
