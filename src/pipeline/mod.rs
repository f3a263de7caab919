//! The full Christofides-style pipeline: spanning tree, parity fix by greedy
//! matching, Eulerian circuit, shortcutting and 2-opt refinement.

use crate::graph::{eulerian_circuit, greedy_matching, minimum_spanning_tree, odd_degree_vertices};
use crate::metrics::PassRecord;
use crate::problem::Problem;
use crate::search::two_opt;
use crate::tour::{Tour, walk_length};
use crate::types::{Distance, Point, PointId, Rounding};
use crate::{Error, Result};


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// How distances are rounded.
    pub rounding: Rounding,
    /// Run 2-opt on the shortcut tour.
    pub refine: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            rounding: Rounding::Nearest,
            refine: true,
        }
    }
}

/// Sizes and lengths observed at each stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub mst_weight: Distance,
    pub odd_vertices: usize,
    pub matching_weight: Distance,
    /// Vertices in the closed Eulerian walk, the start counted at both ends.
    pub euler_vertices: usize,
    pub euler_length: Distance,
    pub shortcut_length: Distance,
    pub refined_length: Distance,
    pub two_opt_moves: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Total cyclic length of `tour`.
    pub length: Distance,
    /// Point identifiers in visiting order; the first follows the last.
    pub tour: Vec<PointId>,
    pub stats: PipelineStats,
}

/// Convenience wrapper building the problem from `(id, x, y)` triples.
pub fn solve_points(
    points: impl IntoIterator<Item = (PointId, f64, f64)>,
    options: &Options,
) -> Result<Solution> {
    let problem = Problem::from_points(
        points.into_iter().map(|(id, x, y)| Point::new(id, x, y)),
        options.rounding,
    );
    solve(&problem, options, None)
}

/// Runs the pipeline on `problem`.
///
/// `options.rounding` only matters when building a problem from points; the
/// distances of an existing problem are used as they are. Coordinates beyond
/// [`MAX_COORDINATE`](crate::problem::MAX_COORDINATE) are rejected. When
/// `pass_records` is given and refinement is on, one record per 2-opt pass is
/// appended.
pub fn solve(
    problem: &Problem,
    options: &Options,
    pass_records: Option<&mut Vec<PassRecord>>,
) -> Result<Solution> {
    problem.check_coordinates()?;
    let n = problem.n();
    let mut stats = PipelineStats::default();

    let mut graph = minimum_spanning_tree(problem)?;
    stats.mst_weight = graph.total_weight(problem);

    let odd = odd_degree_vertices(&graph);
    if odd.len() % 2 != 0 {
        return Err(Error::internal(format!(
            "spanning tree has {} odd-degree vertices",
            odd.len()
        )));
    }
    stats.odd_vertices = odd.len();

    let matching = greedy_matching(&odd, problem)?;
    stats.matching_weight = matching.weight(problem);
    graph.add_matching(&matching);

    if let Some(v) = (0..n).find(|&v| graph.degree(v) % 2 != 0) {
        return Err(Error::internal(format!(
            "vertex {} still has odd degree after matching",
            problem.id(v)
        )));
    }

    let circuit = eulerian_circuit(graph, 0)?;
    stats.euler_vertices = circuit.len();
    stats.euler_length = walk_length(&circuit, problem);

    let mut tour = Tour::shortcut(&circuit, n)?;
    stats.shortcut_length = tour.length(problem);
    if stats.shortcut_length > stats.euler_length {
        // Only possible when rounding breaks the triangle inequality.
        log::warn!(
            "shortcut tour ({}) is longer than the Eulerian walk ({})",
            stats.shortcut_length,
            stats.euler_length
        );
    }

    let length = if options.refine {
        let mut records = Vec::new();
        let length = two_opt(&mut tour, problem, Some(&mut records));
        stats.two_opt_moves = records.iter().filter(|r| r.improved).count();
        if let Some(out) = pass_records {
            out.extend(records);
        }
        length
    } else {
        stats.shortcut_length
    };
    stats.refined_length = length;

    log::info!(
        "solved: n={n} mst={} odd={} euler={} shortcut={} length={length}",
        stats.mst_weight,
        stats.odd_vertices,
        stats.euler_length,
        stats.shortcut_length
    );

    Ok(Solution {
        length,
        tour: tour.ids(problem),
        stats,
    })
}
