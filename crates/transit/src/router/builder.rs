//! Routing graph construction and queries.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{DijkstraSolver, DirectedWeightedGraph, Edge, ShortestPathSolver, VertexId};
use crate::identifiers::*;
use crate::models::{traits::TransitProvider, types::*};
use crate::router::itinerary::{Itinerary, Leg};
use crate::router::settings::RoutingSettings;

/// What traversing an edge of the routing graph means
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    Wait(StopName),
    Ride { bus: BusName, span_count: usize },
}

/// Routing graph built once from a finished catalogue, queried any number of times
#[derive(Clone, Debug)]
pub struct TransportRouter<S = DijkstraSolver> {
    settings: RoutingSettings,
    graph: DirectedWeightedGraph<Movement>,
    stop_vertices: HashMap<StopName, VertexId>,
    solver: S,
}

impl TransportRouter<DijkstraSolver> {
    pub fn build<P>(provider: &P, settings: RoutingSettings) -> Result<Self>
    where
        P: TransitProvider + ?Sized,
    {
        Self::with_solver(provider, settings, DijkstraSolver)
    }
}

impl<S: ShortestPathSolver> TransportRouter<S> {
    pub fn with_solver<P>(provider: &P, settings: RoutingSettings, solver: S) -> Result<Self>
    where
        P: TransitProvider + ?Sized,
    {
        settings.validate()?;

        let stops = provider.all_stops();
        let mut graph = DirectedWeightedGraph::new(stops.len() * 2);
        let mut stop_vertices = HashMap::with_capacity(stops.len());
        let mut wait_by_id: HashMap<StopId, VertexId> = HashMap::with_capacity(stops.len());

        // Wait edges: wait(stop) -> board(stop)
        for (i, stop) in stops.iter().enumerate() {
            let wait = i * 2;
            graph.add_edge(Edge {
                from: wait,
                to: wait + 1,
                weight: settings.wait_minutes(),
                label: Movement::Wait(stop.name.clone()),
            });
            stop_vertices.insert(stop.name.clone(), wait);
            wait_by_id.insert(stop.id, wait);
        }

        // Ride edges: board(stops[i]) -> wait(stops[j]) for every i < j on a bus
        let buses = provider.all_buses();
        for bus in &buses {
            let route = &bus.stops;

            // prefix[k] = road meters from route[0] to route[k]
            let mut prefix = Vec::with_capacity(route.len());
            let mut travelled = 0u64;
            prefix.push(travelled);
            for pair in route.windows(2) {
                travelled += u64::from(provider.distance(pair[0], pair[1]));
                prefix.push(travelled);
            }

            for i in 0..route.len() {
                for j in (i + 1)..route.len() {
                    if route[i] == route[j] {
                        continue;
                    }
                    let (Some(&from_wait), Some(&to_wait)) =
                        (wait_by_id.get(&route[i]), wait_by_id.get(&route[j]))
                    else {
                        continue;
                    };

                    graph.add_edge(Edge {
                        from: from_wait + 1,
                        to: to_wait,
                        weight: settings.ride_minutes(prefix[j] - prefix[i]),
                        label: Movement::Ride {
                            bus: bus.name.clone(),
                            span_count: j - i,
                        },
                    });
                }
            }
        }

        debug!(
            stops = stops.len(),
            buses = buses.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built routing graph"
        );

        Ok(Self {
            settings,
            graph,
            stop_vertices,
            solver,
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<Movement> {
        &self.graph
    }

    /// Waiting vertex of a stop
    pub fn wait_vertex(&self, stop: &str) -> Option<VertexId> {
        self.stop_vertices.get(stop).copied()
    }

    /// Find the minimum-time itinerary between two stops.
    ///
    /// Returns `Err(StopNotFound)` for an unknown stop and `Ok(None)` when the
    /// stops are not connected.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>> {
        let from_vertex = self
            .wait_vertex(from)
            .ok_or_else(|| TransitError::StopNotFound(StopName::new(from)))?;
        let to_vertex = self
            .wait_vertex(to)
            .ok_or_else(|| TransitError::StopNotFound(StopName::new(to)))?;

        let Some(path) = self.solver.shortest_path(&self.graph, from_vertex, to_vertex) else {
            debug!(from, to, "no route");
            return Ok(None);
        };

        let mut legs = Vec::with_capacity(path.edges.len());
        for edge_id in path.edges {
            let edge = self.graph.edge(edge_id).ok_or_else(|| {
                TransitError::InvalidData(format!("solver returned unknown edge {edge_id}"))
            })?;
            legs.push(match &edge.label {
                Movement::Wait(stop) => Leg::Wait {
                    stop: stop.clone(),
                    time: edge.weight,
                },
                Movement::Ride { bus, span_count } => Leg::Ride {
                    bus: bus.clone(),
                    span_count: *span_count,
                    time: edge.weight,
                },
            });
        }

        Ok(Some(Itinerary {
            total_time: path.weight,
            legs,
        }))
    }
}
