//! Fleet reduction: removal order, week buckets, simulation and the driver

pub mod analysis;
pub mod partition;
pub mod removal;
pub mod simulator;

pub use analysis::UnavailabilityAnalysis;
pub use partition::{count_weeks, WeekPartition};
pub use removal::removal_order;
pub use simulator::{FleetReductionSimulator, ReductionOutcome};
