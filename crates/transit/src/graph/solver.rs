//! Shortest-path search over a [`DirectedWeightedGraph`].
//!
//! The router only depends on [`ShortestPathSolver`]; [`DijkstraSolver`] is the
//! stock implementation for non-negative weights.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::directed::{DirectedWeightedGraph, EdgeId, VertexId};

/// A minimum-weight path as the ordered list of traversed edges
#[derive(Clone, Debug, PartialEq)]
pub struct PathInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Given a graph and two vertices, find the minimum-weight path or report none
pub trait ShortestPathSolver: Send + Sync {
    fn shortest_path<L>(
        &self,
        graph: &DirectedWeightedGraph<L>,
        from: VertexId,
        to: VertexId,
    ) -> Option<PathInfo>;
}

/// Single-pair Dijkstra with a binary heap
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Min-heap on cost, lower vertex id first on ties
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPathSolver for DijkstraSolver {
    fn shortest_path<L>(
        &self,
        graph: &DirectedWeightedGraph<L>,
        from: VertexId,
        to: VertexId,
    ) -> Option<PathInfo> {
        let vertex_count = graph.vertex_count();
        if from >= vertex_count || to >= vertex_count {
            return None;
        }

        let mut dist = vec![f64::INFINITY; vertex_count];
        let mut via: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut pq = BinaryHeap::new();

        dist[from] = 0.0;
        pq.push(State {
            cost: 0.0,
            vertex: from,
        });

        while let Some(State { cost, vertex }) = pq.pop() {
            if vertex == to {
                break;
            }
            if cost > dist[vertex] {
                continue;
            }

            for &edge_id in graph.incident_edges(vertex) {
                let Some(edge) = graph.edge(edge_id) else {
                    continue;
                };
                debug_assert!(edge.weight >= 0.0, "negative edge weight");

                let next_cost = cost + edge.weight;
                if next_cost < dist[edge.to] {
                    dist[edge.to] = next_cost;
                    via[edge.to] = Some(edge_id);
                    pq.push(State {
                        cost: next_cost,
                        vertex: edge.to,
                    });
                }
            }
        }

        if !dist[to].is_finite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut current = to;
        while current != from {
            let edge_id = via[current]?;
            edges.push(edge_id);
            current = graph.edge(edge_id)?.from;
        }
        edges.reverse();

        Some(PathInfo {
            weight: dist[to],
            edges,
        })
    }
}
