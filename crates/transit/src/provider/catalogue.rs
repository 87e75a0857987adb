//! In-memory transit catalogue.
//!
//! Stops and buses live in append-only arenas and are referenced everywhere
//! else by `StopId` / `BusId`, so handles handed out earlier never dangle.

use std::collections::{BTreeSet, HashMap};

use geo::Point;
use tracing::{debug, warn};

use crate::identifiers::*;
use crate::models::{traits::*, types::*};

static NO_BUSES: BTreeSet<BusName> = BTreeSet::new();

/// Indexed storage of stops, buses and road distances
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    // Arenas
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    // Lookup maps
    stop_map: HashMap<StopName, StopId>,
    bus_map: HashMap<BusName, BusId>,

    // Buses through each stop, indexed by `StopId`
    stop_buses: Vec<BTreeSet<BusName>>,

    // Directional road distances in meters
    distances: HashMap<(StopId, StopId), u32>,
}

impl Catalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Register a stop. Names are unique; a second stop with the same name is rejected.
    pub fn add_stop(&mut self, name: impl Into<StopName>, location: Point) -> Result<StopId> {
        let name = name.into();
        if name.as_str().is_empty() {
            return Err(TransitError::InvalidData("stop name must not be empty".into()));
        }
        if self.stop_map.contains_key(name.as_str()) {
            return Err(TransitError::DuplicateStop(name));
        }

        let id = StopId::from_index(self.stops.len());
        self.stop_map.insert(name.clone(), id);
        self.stops.push(Stop { id, name, location });
        self.stop_buses.push(BTreeSet::new());

        Ok(id)
    }

    /// Register a bus.
    ///
    /// Stop names are resolved immediately; names the catalogue does not know
    /// are dropped from the route. Linear buses get their return trip appended.
    pub fn add_bus(&mut self, line: BusLine) -> Result<BusId> {
        let BusLine {
            name,
            stops: stop_names,
            is_circular,
        } = line;

        if self.bus_map.contains_key(name.as_str()) {
            return Err(TransitError::DuplicateBus(name));
        }

        let mut stops = Vec::with_capacity(stop_names.len() * 2);
        for stop_name in &stop_names {
            match self.stop_map.get(stop_name.as_str()) {
                Some(&id) => stops.push(id),
                None => warn!(bus = %name, stop = %stop_name, "dropping unknown stop from bus"),
            }
        }

        if !is_circular {
            expand_round_trip(&mut stops);
        }

        for &stop in &stops {
            self.stop_buses[stop.index()].insert(name.clone());
        }

        let id = BusId::from_index(self.buses.len());
        debug!(bus = %name, stops = stops.len(), is_circular, "added bus");
        self.bus_map.insert(name.clone(), id);
        self.buses.push(Bus {
            id,
            name,
            stops,
            is_circular,
        });

        Ok(id)
    }

    /// Record the road distance for exactly `from -> to`, replacing any earlier value
    pub fn set_distance(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.insert((from, to), meters);
    }

    /// Same as [`Catalogue::set_distance`], addressing stops by name
    pub fn set_distance_by_name(&mut self, from: &str, to: &str, meters: u32) -> Result<()> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.set_distance(from, to, meters);
        Ok(())
    }

    fn stop_id(&self, name: &str) -> Result<StopId> {
        self.stop_map
            .get(name)
            .copied()
            .ok_or_else(|| TransitError::StopNotFound(StopName::new(name)))
    }
}

impl TransitProvider for Catalogue {
    fn get_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_map.get(name).map(|id| &self.stops[id.index()])
    }

    fn get_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_map.get(name).map(|id| &self.buses[id.index()])
    }

    fn stop_at(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    fn bus_at(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.index())
    }

    fn buses_by_stop(&self, name: &str) -> &BTreeSet<BusName> {
        self.stop_map
            .get(name)
            .map_or(&NO_BUSES, |id| &self.stop_buses[id.index()])
    }

    fn all_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self.stops.iter().collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));
        stops
    }

    fn all_buses(&self) -> Vec<&Bus> {
        let mut buses: Vec<&Bus> = self.buses.iter().collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));
        buses
    }

    fn distance_directly(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances.get(&(from, to)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Catalogue {
        let mut catalogue = Catalogue::new();
        catalogue
            .add_stop("Tolstopaltsevo", Point::new(37.20829, 55.611087))
            .unwrap();
        catalogue
            .add_stop("Marushkino", Point::new(37.209755, 55.595884))
            .unwrap();
        catalogue
            .add_stop("Rasskazovka", Point::new(37.333324, 55.632761))
            .unwrap();
        catalogue
            .set_distance_by_name("Tolstopaltsevo", "Marushkino", 3900)
            .unwrap();
        catalogue
            .set_distance_by_name("Marushkino", "Rasskazovka", 9900)
            .unwrap();
        catalogue
            .set_distance_by_name("Rasskazovka", "Marushkino", 9500)
            .unwrap();
        catalogue
            .add_bus(BusLine::linear(
                "750",
                ["Tolstopaltsevo", "Marushkino", "Rasskazovka"],
            ))
            .unwrap();
        catalogue
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::new();
        assert_eq!(catalogue.all_stops().len(), 0);
        assert_eq!(catalogue.all_buses().len(), 0);
    }

    #[test]
    fn test_lookups() {
        let catalogue = sample();

        let stop = catalogue.get_stop("Marushkino").unwrap();
        assert_relative_eq!(stop.latitude(), 55.595884);
        assert_relative_eq!(stop.longitude(), 37.209755);
        assert_eq!(catalogue.stop_at(stop.id).unwrap().name.as_str(), "Marushkino");

        let bus = catalogue.get_bus("750").unwrap();
        assert_eq!(catalogue.bus_at(bus.id).unwrap().name.as_str(), "750");
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        let mut catalogue = sample();
        assert!(catalogue.get_stop("Nowhere").is_none());
        assert!(catalogue.get_bus("999").is_none());
        assert!(catalogue.buses_by_stop("Nowhere").is_empty());
        assert!(catalogue.set_distance_by_name("Nowhere", "Marushkino", 1).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut catalogue = sample();

        let err = catalogue
            .add_stop("Marushkino", Point::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, TransitError::DuplicateStop(_)));
        // Original entry is untouched
        assert_relative_eq!(catalogue.get_stop("Marushkino").unwrap().latitude(), 55.595884);

        let err = catalogue
            .add_bus(BusLine::circular("750", ["Marushkino"]))
            .unwrap_err();
        assert!(matches!(err, TransitError::DuplicateBus(_)));
        assert_eq!(catalogue.bus_count(), 1);
    }

    #[test]
    fn test_empty_stop_name_rejected() {
        let mut catalogue = Catalogue::new();
        assert!(catalogue.add_stop("", Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_distance_fallback() {
        let catalogue = sample();
        let t = catalogue.get_stop("Tolstopaltsevo").unwrap().id;
        let m = catalogue.get_stop("Marushkino").unwrap().id;
        let r = catalogue.get_stop("Rasskazovka").unwrap().id;

        // Only the forward entry exists
        assert_eq!(catalogue.distance_directly(t, m), Some(3900));
        assert_eq!(catalogue.distance_directly(m, t), None);
        assert_eq!(catalogue.distance(t, m), 3900);
        assert_eq!(catalogue.distance(m, t), 3900);

        // Both directions stored: each wins for its own direction
        assert_eq!(catalogue.distance(m, r), 9900);
        assert_eq!(catalogue.distance(r, m), 9500);

        // Nothing stored
        assert_eq!(catalogue.distance(t, r), 0);
    }

    #[test]
    fn test_set_distance_overwrites() {
        let mut catalogue = sample();
        catalogue
            .set_distance_by_name("Tolstopaltsevo", "Marushkino", 4000)
            .unwrap();
        let t = catalogue.get_stop("Tolstopaltsevo").unwrap().id;
        let m = catalogue.get_stop("Marushkino").unwrap().id;
        assert_eq!(catalogue.distance(t, m), 4000);
    }

    #[test]
    fn test_linear_bus_is_expanded() {
        let catalogue = sample();
        let bus = catalogue.get_bus("750").unwrap();
        let names: Vec<&str> = bus
            .stops
            .iter()
            .map(|id| catalogue.stop_at(*id).unwrap().name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Tolstopaltsevo", "Marushkino", "Rasskazovka", "Marushkino", "Tolstopaltsevo"]
        );
    }

    #[test]
    fn test_unknown_stops_dropped_from_bus() {
        let mut catalogue = sample();
        catalogue
            .add_bus(BusLine::circular(
                "256",
                ["Marushkino", "Ghost", "Rasskazovka", "Marushkino"],
            ))
            .unwrap();
        let bus = catalogue.get_bus("256").unwrap();
        assert_eq!(bus.stops.len(), 3);
        assert!(catalogue.buses_by_stop("Ghost").is_empty());
    }

    #[test]
    fn test_buses_by_stop_ordered() {
        let mut catalogue = sample();
        catalogue
            .add_bus(BusLine::circular("256", ["Marushkino", "Rasskazovka", "Marushkino"]))
            .unwrap();
        catalogue
            .add_bus(BusLine::linear("1", ["Marushkino", "Tolstopaltsevo"]))
            .unwrap();

        let buses: Vec<&str> = catalogue
            .buses_by_stop("Marushkino")
            .iter()
            .map(BusName::as_str)
            .collect();
        assert_eq!(buses, vec!["1", "256", "750"]);

        let buses: Vec<&str> = catalogue
            .buses_by_stop("Tolstopaltsevo")
            .iter()
            .map(BusName::as_str)
            .collect();
        assert_eq!(buses, vec!["1", "750"]);
    }

    #[test]
    fn test_stop_without_buses() {
        let mut catalogue = sample();
        catalogue.add_stop("Prazhskaya", Point::new(37.6, 55.6)).unwrap();
        assert!(catalogue.get_stop("Prazhskaya").is_some());
        assert!(catalogue.buses_by_stop("Prazhskaya").is_empty());
    }

    #[test]
    fn test_all_sorted_by_name() {
        let mut catalogue = sample();
        catalogue
            .add_bus(BusLine::circular("256", ["Marushkino", "Rasskazovka", "Marushkino"]))
            .unwrap();

        let stops: Vec<&str> = catalogue.all_stops().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stops, vec!["Marushkino", "Rasskazovka", "Tolstopaltsevo"]);

        let buses: Vec<&str> = catalogue.all_buses().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(buses, vec!["256", "750"]);
    }

    #[test]
    fn test_bus_info_linear() {
        let catalogue = sample();
        let info = catalogue.bus_info(catalogue.get_bus("750").unwrap());

        assert_eq!(info.stops_count, 5);
        assert_eq!(info.unique_stops_count, 3);
        assert_eq!(info.route_length, 3900 + 9900 + 9500 + 3900);
        assert!(info.geo_route_length > 0.0);
        assert!(info.curvature.unwrap() > 1.0);
    }

    #[test]
    fn test_bus_info_counts_follow_expansion() {
        let mut catalogue = sample();
        catalogue
            .add_bus(BusLine::linear("2", ["Tolstopaltsevo", "Marushkino"]))
            .unwrap();
        let info = catalogue.bus_info(catalogue.get_bus("2").unwrap());

        // 2n - 1 stops for a linear bus with n stops
        assert_eq!(info.stops_count, 3);
        assert!(info.unique_stops_count < info.stops_count);
    }

    #[test]
    fn test_bus_info_circular() {
        let mut catalogue = sample();
        catalogue
            .add_bus(BusLine::circular(
                "256",
                ["Tolstopaltsevo", "Marushkino", "Rasskazovka", "Tolstopaltsevo"],
            ))
            .unwrap();
        let info = catalogue.bus_info(catalogue.get_bus("256").unwrap());

        assert_eq!(info.stops_count, 4);
        assert_eq!(info.unique_stops_count, 3);
        // Rasskazovka -> Tolstopaltsevo has no entry in either direction
        assert_eq!(info.route_length, 3900 + 9900);
    }

    #[test]
    fn test_bus_info_single_stop_has_no_curvature() {
        let mut catalogue = sample();
        catalogue
            .add_bus(BusLine::circular("lonely", ["Marushkino"]))
            .unwrap();
        let info = catalogue.bus_info(catalogue.get_bus("lonely").unwrap());

        assert_eq!(info.stops_count, 1);
        assert_eq!(info.route_length, 0);
        assert_eq!(info.curvature, None);
    }

    #[test]
    fn test_bus_info_is_idempotent() {
        let catalogue = sample();
        let bus = catalogue.get_bus("750").unwrap();
        assert_eq!(catalogue.bus_info(bus), catalogue.bus_info(bus));
    }

    #[test]
    fn test_synthetic_shortcut_breaks_curvature_bound() {
        let mut catalogue = sample();
        catalogue
            .set_distance_by_name("Tolstopaltsevo", "Rasskazovka", 10)
            .unwrap();
        catalogue
            .add_bus(BusLine::linear("shortcut", ["Tolstopaltsevo", "Rasskazovka"]))
            .unwrap();
        let info = catalogue.bus_info(catalogue.get_bus("shortcut").unwrap());

        // Nothing enforces road >= straight line
        assert!(info.curvature.unwrap() < 1.0);
    }
}
