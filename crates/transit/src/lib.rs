//! # transit-catalogue
//!
//! In-memory public transit catalogue with minimum-time routing.
//!
//! ## Features
//!
//! - **Catalogue**: stops, buses and directional road distances with name lookup
//! - **Route statistics**: stop counts, road vs. great-circle length, curvature
//! - **Routing**: minimum-time itineraries split into wait and ride legs
//! - **Pluggable search**: any [`graph::ShortestPathSolver`] can drive the router
//!
//! ## Example
//!
//! ```
//! use transit_catalogue::prelude::*;
//! use geo::Point;
//!
//! let mut catalogue = Catalogue::new();
//! catalogue.add_stop("A", Point::new(37.60, 55.60)).unwrap();
//! catalogue.add_stop("B", Point::new(37.61, 55.61)).unwrap();
//! catalogue.add_stop("C", Point::new(37.62, 55.62)).unwrap();
//! catalogue.set_distance_by_name("A", "B", 1000).unwrap();
//! catalogue.set_distance_by_name("B", "C", 2000).unwrap();
//! catalogue.add_bus(BusLine::circular("Line1", ["A", "B", "C"])).unwrap();
//!
//! let handler = RequestHandler::build(catalogue, RoutingSettings::new(5, 60.0)).unwrap();
//!
//! let stat = handler.bus_stat("Line1").unwrap();
//! assert_eq!(stat.stops_count, 3);
//! assert_eq!(stat.route_length, 3000);
//!
//! // Wait 5 minutes at A, then ride 3 km at 60 km/h
//! let itinerary = handler.route("A", "C").unwrap().unwrap();
//! assert_eq!(itinerary.legs.len(), 2);
//! assert!((itinerary.total_time - 8.0).abs() < 1e-9);
//! ```

pub mod graph;
pub mod handler;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod router;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::handler::RequestHandler;
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::Catalogue;
    pub use crate::router::{Itinerary, Leg, RoutingSettings, TransportRouter};
    pub use crate::spatial::great_circle_distance;
}

pub use prelude::*;
