use anyhow::{Context, Result};
use geo::Point;
use serde::Deserialize;
use std::collections::BTreeMap;
use transit_catalogue::prelude::*;

/// Top-level input document
#[derive(Debug, Default, Deserialize)]
pub struct RequestDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Catalogue content: a stop with its outgoing road distances, or a bus
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(flatten)]
    pub query: StatQuery,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatQuery {
    Bus { name: String },
    Stop { name: String },
    Route { from: String, to: String },
    /// Anything else, e.g. map rendering
    #[serde(other)]
    Unsupported,
}

impl RequestDocument {
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to parse request document")
    }
}

/// Fill a catalogue from base requests.
///
/// Stops go in first, then distances, then buses, whatever the order in the
/// document, so every bus sees all stops and distances it references.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<Catalogue> {
    let mut catalogue = Catalogue::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue
                .add_stop(name.as_str(), Point::new(*longitude, *latitude))
                .with_context(|| format!("Failed to add stop {name}"))?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (to, meters) in road_distances {
                if let Err(err) = catalogue.set_distance_by_name(name, to, *meters) {
                    tracing::warn!(from = %name, to = %to, "skipping road distance: {err}");
                }
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue
                .add_bus(BusLine::new(
                    name.as_str(),
                    stops.iter().map(String::as_str),
                    *is_roundtrip,
                ))
                .with_context(|| format!("Failed to add bus {name}"))?;
        }
    }

    Ok(catalogue)
}
