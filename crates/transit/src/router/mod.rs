//! Minimum-time routing between stops.
//!
//! Every stop becomes two vertices: `wait` (arrived, waiting for a bus) and
//! `board` (ready to ride). A wait edge joins them; ride edges always go from a
//! `board` vertex to a `wait` vertex, so each boarding pays the wait once.

pub mod builder;
pub mod itinerary;
pub mod settings;

pub use builder::{Movement, TransportRouter};
pub use itinerary::{Itinerary, Leg};
pub use settings::RoutingSettings;
