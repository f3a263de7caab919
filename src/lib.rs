//! Approximate Euclidean TSP tours, Christofides style: a minimum spanning
//! tree made Eulerian by greedy matching of its odd vertices, walked with
//! Fleury's algorithm, shortcut into a Hamiltonian cycle and polished with
//! 2-opt.

mod error;
pub mod graph;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod problem;
pub mod search;
pub mod tour;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use pipeline::{Options, PipelineStats, Solution, solve, solve_points};
