use std::collections::VecDeque;

use crate::graph::Matching;
use crate::problem::Problem;
use crate::types::{Distance, Vertex};

/// Undirected multigraph over dense vertex indices.
///
/// Each vertex holds a list of neighbours in which a vertex appears once per
/// parallel edge. An edge `a-b` is always stored on both sides with the same
/// multiplicity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Vertex>>,
    edges: usize,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); n],
            edges: 0,
        }
    }

    /// Number of vertices, including isolated ones.
    #[inline(always)]
    pub fn n(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// `true` once no edges remain.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.edges == 0
    }

    #[inline(always)]
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.adjacency[vertex].len()
    }

    #[inline(always)]
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        &self.adjacency[vertex]
    }

    /// Number of parallel edges between `a` and `b`.
    pub fn multiplicity(&self, a: Vertex, b: Vertex) -> usize {
        self.adjacency[a].iter().filter(|&&v| v == b).count()
    }

    pub fn add_edge(&mut self, a: Vertex, b: Vertex) {
        debug_assert_ne!(a, b, "self loops are never part of the pipeline");
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edges += 1;
    }

    /// Removes one copy of the edge `a-b`, keeping the order of the remaining
    /// neighbours. Returns `false` if no such edge exists.
    pub fn remove_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        let Some(pos_ab) = self.adjacency[a].iter().position(|&v| v == b) else {
            return false;
        };
        let Some(pos_ba) = self.adjacency[b].iter().position(|&v| v == a) else {
            return false;
        };
        self.adjacency[a].remove(pos_ab);
        self.adjacency[b].remove(pos_ba);
        self.edges -= 1;
        true
    }

    /// Adds one edge per matched pair.
    pub fn add_matching(&mut self, matching: &Matching) {
        for (a, b) in matching.pairs() {
            self.add_edge(a, b);
        }
    }

    /// Every edge once as `(low, high)`, parallel edges repeated.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, neighbors)| neighbors.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
    }

    /// Sum of edge lengths, parallel edges counted once each.
    pub fn total_weight(&self, problem: &Problem) -> Distance {
        self.edges()
            .map(|(a, b)| problem.distance(a, b))
            .fold(0, Distance::saturating_add)
    }

    /// `true` if every vertex with at least one edge is reachable from every
    /// other such vertex.
    pub fn is_connected(&self) -> bool {
        let Some(start) = (0..self.n()).find(|&v| self.degree(v) > 0) else {
            return true;
        };
        let seen = self.reachable_from(start, None);
        (0..self.n()).all(|v| self.degree(v) == 0 || seen[v])
    }

    /// `true` if `to` can be reached from `from`.
    /// With `skip = Some((u, v))` the edges between `u` and `v` are not used.
    pub fn reaches(&self, from: Vertex, to: Vertex, skip: Option<(Vertex, Vertex)>) -> bool {
        from == to || self.reachable_from(from, skip)[to]
    }

    fn reachable_from(&self, start: Vertex, skip: Option<(Vertex, Vertex)>) -> Vec<bool> {
        let skipped = |a: Vertex, b: Vertex| match skip {
            Some((u, v)) => (a == u && b == v) || (a == v && b == u),
            None => false,
        };

        let mut seen = vec![false; self.n()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;

        while let Some(a) = queue.pop_front() {
            for &b in &self.adjacency[a] {
                if !seen[b] && !skipped(a, b) {
                    seen[b] = true;
                    queue.push_back(b);
                }
            }
        }

        seen
    }
}
