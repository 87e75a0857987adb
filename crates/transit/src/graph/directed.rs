//! Adjacency-list graph with labelled, weighted edges.
//!
//! Vertex and edge ids are dense indices assigned in insertion order and never
//! change once issued.

pub type VertexId = usize;
pub type EdgeId = usize;

/// A directed edge. `weight` must be non-negative for shortest-path search.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<L> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub label: L,
}

#[derive(Clone, Debug)]
pub struct DirectedWeightedGraph<L> {
    edges: Vec<Edge<L>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<L> DirectedWeightedGraph<L> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append an edge, growing the vertex set if either endpoint is new
    pub fn add_edge(&mut self, edge: Edge<L>) -> EdgeId {
        let highest = edge.from.max(edge.to);
        if highest >= self.incidence.len() {
            self.incidence.resize_with(highest + 1, Vec::new);
        }

        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<L>> {
        self.edges.get(id)
    }

    /// Outgoing edges of `vertex`; empty for unknown vertices
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<L>)> {
        self.edges.iter().enumerate()
    }
}
