//! Read-only interface over transit data.
//!
//! The router, the request handler and any rendering collaborator only need
//! these lookups; mutation stays on the concrete catalogue.

use std::collections::{BTreeSet, HashSet};

use crate::identifiers::*;
use crate::models::types::*;
use crate::spatial::great_circle_distance;

/// Provider of all transit data with lookup and statistics methods
pub trait TransitProvider: Send + Sync {
    // ---- Lookups ----
    fn get_stop(&self, name: &str) -> Option<&Stop>;
    fn get_bus(&self, name: &str) -> Option<&Bus>;
    fn stop_at(&self, id: StopId) -> Option<&Stop>;
    fn bus_at(&self, id: BusId) -> Option<&Bus>;

    /// Buses serving a stop, ordered by name. Unknown stops yield an empty set.
    fn buses_by_stop(&self, name: &str) -> &BTreeSet<BusName>;

    // ---- Collections ----

    /// All stops ordered by name
    fn all_stops(&self) -> Vec<&Stop>;

    /// All buses ordered by name
    fn all_buses(&self) -> Vec<&Bus>;

    // ---- Distances ----

    /// Distance stored for exactly `from -> to`
    fn distance_directly(&self, from: StopId, to: StopId) -> Option<u32>;

    /// Road distance in meters: `from -> to`, else `to -> from`, else 0
    fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distance_directly(from, to)
            .or_else(|| self.distance_directly(to, from))
            .unwrap_or(0)
    }

    // ---- Statistics ----

    fn bus_info(&self, bus: &Bus) -> BusInfo {
        let unique: HashSet<StopId> = bus.stops.iter().copied().collect();

        let mut route_length = 0u64;
        let mut geo_route_length = 0.0;
        for pair in bus.stops.windows(2) {
            route_length += u64::from(self.distance(pair[0], pair[1]));
            if let (Some(from), Some(to)) = (self.stop_at(pair[0]), self.stop_at(pair[1])) {
                geo_route_length += great_circle_distance(from.location, to.location);
            }
        }

        BusInfo::new(bus.stops.len(), unique.len(), route_length, geo_route_length)
    }
}
