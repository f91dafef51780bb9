//! Domain types and models

pub mod dataset;
pub mod interval;
pub mod policy;
pub mod report;
pub mod week;

pub use dataset::PresenceDataset;
pub use interval::{PresenceInterval, VehicleId};
pub use policy::RemovalPolicy;
pub use report::{ReportFormat, UnavailabilityReport, UnavailabilityRow};
pub use week::{week_start_date, WeekKey};
