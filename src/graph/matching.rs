use std::collections::{BTreeMap, BTreeSet};

use crate::graph::Graph;
use crate::problem::Problem;
use crate::types::{Distance, Vertex};
use crate::{Error, Result};

/// Vertices with an odd number of incident edges, ascending.
///
/// By the handshake lemma the result always has even length.
pub fn odd_degree_vertices(graph: &Graph) -> Vec<Vertex> {
    (0..graph.n()).filter(|&v| graph.degree(v) % 2 != 0).collect()
}

/// A perfect matching: every covered vertex has exactly one partner, and the
/// relation is symmetric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matching {
    partner: BTreeMap<Vertex, Vertex>,
}

impl Matching {
    fn pair(&mut self, a: Vertex, b: Vertex) {
        self.partner.insert(a, b);
        self.partner.insert(b, a);
    }

    pub fn partner(&self, vertex: Vertex) -> Option<Vertex> {
        self.partner.get(&vertex).copied()
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.partner.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    /// Each pair once as `(low, high)`, ascending by `low`.
    pub fn pairs(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.partner.iter().filter(|(a, b)| a < b).map(|(&a, &b)| (a, b))
    }

    pub fn weight(&self, problem: &Problem) -> Distance {
        self.pairs()
            .map(|(a, b)| problem.distance(a, b))
            .fold(0, Distance::saturating_add)
    }
}

/// Pairs up `vertices` by repeatedly matching the lowest remaining vertex
/// with its nearest remaining neighbour (lowest index on ties).
///
/// This is a greedy heuristic, not a minimum-weight perfect matching; tour
/// quality depends on it, and an optimal matcher can replace it without
/// changing the contract.
pub fn greedy_matching(vertices: &[Vertex], problem: &Problem) -> Result<Matching> {
    if vertices.len() % 2 != 0 {
        return Err(Error::invalid_input(format!(
            "cannot perfectly match an odd number of vertices ({})",
            vertices.len()
        )));
    }

    let mut remaining: BTreeSet<Vertex> = vertices.iter().copied().collect();
    if remaining.len() != vertices.len() {
        return Err(Error::invalid_input("vertices to match must be distinct"));
    }

    let mut matching = Matching::default();

    while let Some(a) = remaining.pop_first() {
        let mut nearest: Option<(Vertex, Distance)> = None;
        for &b in &remaining {
            let d = problem.distance(a, b);
            match nearest {
                Some((_, best)) if d >= best => {}
                _ => nearest = Some((b, d)),
            }
        }

        let Some((b, _)) = nearest else {
            // Unreachable: `remaining` held an even number of vertices.
            return Err(Error::internal(format!("vertex {a} left without a partner")));
        };
        remaining.remove(&b);
        matching.pair(a, b);
    }

    log::debug!(
        "matching: pairs={} weight={}",
        matching.len(),
        matching.weight(problem)
    );

    Ok(matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::minimum_spanning_tree;
    use crate::types::{Point, Rounding};

    fn line(xs: &[f64]) -> Problem {
        Problem::from_points(
            xs.iter()
                .enumerate()
                .map(|(i, &x)| Point::new(i as u32, x, 0.0)),
            Rounding::Nearest,
        )
    }

    #[test]
    fn odd_vertices_of_a_path_are_its_ends() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        assert_eq!(odd_degree_vertices(&g), vec![0, 3]);
    }

    #[test]
    fn parallel_edges_count_towards_degree() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1);
        assert_eq!(odd_degree_vertices(&g), vec![0, 1]);
        g.add_edge(0, 1);
        assert!(odd_degree_vertices(&g).is_empty());
    }

    #[test]
    fn lowest_vertex_picks_its_nearest() {
        // 0 is nearest to 1 even though 2-3 are the globally closest pair.
        let problem = line(&[0.0, 4.0, 10.0, 11.0]);
        let matching = greedy_matching(&[0, 1, 2, 3], &problem).expect("matching");
        assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(matching.partner(1), Some(0));
        assert_eq!(matching.partner(3), Some(2));
        assert_eq!(matching.weight(&problem), 5);
    }

    #[test]
    fn distance_ties_go_to_lowest_index() {
        // 1 and 2 are both 5 away from 0.
        let problem = line(&[0.0, 5.0, -5.0, 100.0]);
        let matching = greedy_matching(&[2, 3, 1, 0], &problem).expect("matching");
        assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn odd_input_is_rejected() {
        let problem = line(&[0.0, 1.0, 2.0]);
        assert!(matches!(
            greedy_matching(&[0, 1, 2], &problem),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_input_gives_empty_matching() {
        let problem = line(&[0.0, 1.0]);
        let matching = greedy_matching(&[], &problem).expect("matching");
        assert!(matching.is_empty());
    }

    #[test]
    fn tree_plus_matching_has_even_degrees() {
        for seed in 0..20 {
            let problem = Problem::random(30, 1000, seed, Rounding::Nearest).expect("random");
            let mut graph = minimum_spanning_tree(&problem).expect("mst");
            let odd = odd_degree_vertices(&graph);
            assert_eq!(odd.len() % 2, 0, "seed {seed}");

            let matching = greedy_matching(&odd, &problem).expect("matching");
            assert_eq!(matching.len() * 2, odd.len());
            for &v in &odd {
                let partner = matching.partner(v).expect("covered");
                assert_eq!(matching.partner(partner), Some(v));
            }

            graph.add_matching(&matching);
            assert!(odd_degree_vertices(&graph).is_empty(), "seed {seed}");
        }
    }
}
