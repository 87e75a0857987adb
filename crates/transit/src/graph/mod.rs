//! Directed weighted graph and shortest-path search.

pub mod directed;
pub mod solver;

pub use directed::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use solver::{DijkstraSolver, PathInfo, ShortestPathSolver};
