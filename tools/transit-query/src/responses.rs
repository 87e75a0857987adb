use serde::Serialize;
use transit_catalogue::prelude::*;

use crate::requests::{StatQuery, StatRequest};

const NOT_FOUND: &str = "not found";
const UNSUPPORTED: &str = "unsupported request";

/// One answer per stat request, in request order
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id: i64,
        curvature: Option<f64>,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Leg> for RouteItem {
    fn from(leg: &Leg) -> Self {
        match leg {
            Leg::Wait { stop, time } => RouteItem::Wait {
                stop_name: stop.to_string(),
                time: *time,
            },
            Leg::Ride {
                bus,
                span_count,
                time,
            } => RouteItem::Bus {
                bus: bus.to_string(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

fn error(request_id: i64, message: &str) -> Response {
    Response::Error {
        request_id,
        error_message: message.to_string(),
    }
}

pub fn answer(handler: &RequestHandler, request: &StatRequest) -> Response {
    let request_id = request.id;

    match &request.query {
        StatQuery::Bus { name } => match handler.bus_stat(name) {
            Some(info) => Response::Bus {
                request_id,
                curvature: info.curvature,
                route_length: info.route_length,
                stop_count: info.stops_count,
                unique_stop_count: info.unique_stops_count,
            },
            None => error(request_id, NOT_FOUND),
        },
        StatQuery::Stop { name } => match handler.buses_by_stop(name) {
            Some(buses) => Response::Stop {
                request_id,
                buses: buses.iter().map(ToString::to_string).collect(),
            },
            None => error(request_id, NOT_FOUND),
        },
        StatQuery::Route { from, to } => match handler.route(from, to) {
            Ok(Some(itinerary)) => Response::Route {
                request_id,
                total_time: itinerary.total_time,
                items: itinerary.legs.iter().map(RouteItem::from).collect(),
            },
            Ok(None) => error(request_id, NOT_FOUND),
            Err(err) => {
                tracing::debug!(request_id, "route query failed: {err}");
                error(request_id, NOT_FOUND)
            }
        },
        StatQuery::Unsupported => {
            tracing::warn!(request_id, "unsupported stat request");
            error(request_id, UNSUPPORTED)
        }
    }
}

pub fn answer_all(handler: &RequestHandler, requests: &[StatRequest]) -> Vec<Response> {
    requests
        .iter()
        .map(|request| answer(handler, request))
        .collect()
}
