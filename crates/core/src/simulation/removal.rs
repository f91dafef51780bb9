//! Removal order for a fleet reduction

use std::collections::HashSet;

use geofleet_domain::{PresenceDataset, RemovalPolicy, VehicleId};

/// Full sell order of the fleet under `policy`.
///
/// The first `n` entries are the vehicles removed when `n` are sold. The
/// result is always a permutation of `dataset.fleet()`.
pub fn removal_order(dataset: &PresenceDataset, policy: &RemovalPolicy) -> Vec<VehicleId> {
    let fleet = dataset.fleet();
    match policy {
        RemovalPolicy::FirstAppearance => fleet.to_vec(),
        RemovalPolicy::AscendingId => {
            let mut order = fleet.to_vec();
            order.sort_unstable();
            order
        }
        RemovalPolicy::DescendingId => {
            let mut order = fleet.to_vec();
            order.sort_unstable_by(|a, b| b.cmp(a));
            order
        }
        RemovalPolicy::Explicit(listed) => {
            let members: HashSet<VehicleId> = fleet.iter().copied().collect();
            let mut placed = HashSet::with_capacity(fleet.len());
            let mut order = Vec::with_capacity(fleet.len());

            for id in listed {
                if members.contains(id) && placed.insert(*id) {
                    order.push(*id);
                }
            }
            order.extend(fleet.iter().copied().filter(|id| !placed.contains(id)));
            order
        }
    }
}
