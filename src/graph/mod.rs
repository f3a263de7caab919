mod euler;
mod graph;
mod matching;
mod mst;

pub use euler::eulerian_circuit;
pub use graph::Graph;
pub use matching::{Matching, greedy_matching, odd_degree_vertices};
pub use mst::minimum_spanning_tree;
