//! Core data types for the transit catalogue.

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Entities
// ============================================================================

/// A named stop. `location` follows the `geo` convention: x = longitude, y = latitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: StopName,
    pub location: Point,
}

impl Stop {
    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }
}

/// A bus as stored in the catalogue.
///
/// `stops` is already expanded: a linear bus holds its return trip as well, so
/// consumers can walk the sequence without looking at `is_circular`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bus {
    pub id: BusId,
    pub name: BusName,
    pub stops: Vec<StopId>,
    pub is_circular: bool,
}

/// A bus as described by ingestion, before stop names are resolved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusLine {
    pub name: BusName,
    pub stops: Vec<StopName>,
    pub is_circular: bool,
}

impl BusLine {
    pub fn new<I, S>(name: impl Into<BusName>, stops: I, is_circular: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StopName>,
    {
        Self {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            is_circular,
        }
    }

    pub fn circular<I, S>(name: impl Into<BusName>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StopName>,
    {
        Self::new(name, stops, true)
    }

    pub fn linear<I, S>(name: impl Into<BusName>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StopName>,
    {
        Self::new(name, stops, false)
    }
}

/// Append the return trip of a linear route: `[A, B, C]` becomes `[A, B, C, B, A]`.
pub fn expand_round_trip<T: Clone>(stops: &mut Vec<T>) {
    if stops.len() < 2 {
        return;
    }
    let outbound = stops.len() - 1;
    stops.reserve(outbound);
    for i in (0..outbound).rev() {
        let stop = stops[i].clone();
        stops.push(stop);
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Statistics of a single bus, derived on demand from the catalogue
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusInfo {
    pub stops_count: usize,
    pub unique_stops_count: usize,
    /// Road length in meters
    pub route_length: u64,
    /// Great-circle length in meters
    pub geo_route_length: f64,
    /// `route_length / geo_route_length`; `None` when the geo length is zero
    pub curvature: Option<f64>,
}

impl BusInfo {
    pub fn new(
        stops_count: usize,
        unique_stops_count: usize,
        route_length: u64,
        geo_route_length: f64,
    ) -> Self {
        let curvature = if geo_route_length > 0.0 {
            Some(route_length as f64 / geo_route_length)
        } else {
            None
        };

        Self {
            stops_count,
            unique_stops_count,
            route_length,
            geo_route_length,
            curvature,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Stop not found: {0}")]
    StopNotFound(StopName),

    #[error("Bus not found: {0}")]
    BusNotFound(BusName),

    #[error("Duplicate stop: {0}")]
    DuplicateStop(StopName),

    #[error("Duplicate bus: {0}")]
    DuplicateBus(BusName),

    #[error("Invalid routing settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;
