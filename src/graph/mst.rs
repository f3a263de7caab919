use crate::graph::Graph;
use crate::problem::Problem;
use crate::types::{Distance, Vertex};
use crate::{Error, Result};

/// Builds a minimum spanning tree with Prim's algorithm in O(V²).
///
/// The tree is grown from vertex 0, the lowest identifier. Ties are broken by
/// iteration order and never re-decided:
/// - the next vertex is the non-tree vertex with the strictly smallest
///   connection cost, the lowest index winning among equals;
/// - a vertex's parent is only replaced by a strictly closer tree vertex.
///
/// The first tree vertex seen always becomes the parent, so a distance
/// saturated at `Distance::MAX` still gets attached.
pub fn minimum_spanning_tree(problem: &Problem) -> Result<Graph> {
    let n = problem.n();
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "a spanning tree needs at least 2 points, got {n}"
        )));
    }

    let mut tree = Graph::new(n);
    let mut in_tree = vec![false; n];
    let mut cost = vec![Distance::MAX; n];
    let mut parent: Vec<Option<Vertex>> = vec![None; n];

    cost[0] = 0;

    for _ in 0..n {
        let mut next: Option<Vertex> = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            match next {
                Some(best) if cost[v] >= cost[best] => {}
                _ => next = Some(v),
            }
        }

        let Some(u) = next else {
            break;
        };
        in_tree[u] = true;
        if let Some(p) = parent[u] {
            tree.add_edge(p, u);
        }

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let d = problem.distance(u, v);
            if parent[v].is_none() || d < cost[v] {
                cost[v] = d;
                parent[v] = Some(u);
            }
        }
    }

    log::debug!(
        "mst: n={n} edges={} weight={}",
        tree.edge_count(),
        tree.total_weight(problem)
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Rounding};

    fn square() -> Problem {
        Problem::from_points(
            [
                Point::new(0, 0.0, 0.0),
                Point::new(1, 0.0, 10.0),
                Point::new(2, 10.0, 10.0),
                Point::new(3, 10.0, 0.0),
            ],
            Rounding::Nearest,
        )
    }

    /// Kruskal over all pairs with a tiny union-find, for cross-checking weights.
    fn kruskal_weight(problem: &Problem) -> Distance {
        let n = problem.n();
        let mut edges: Vec<(Distance, usize, usize)> = (0..n)
            .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
            .map(|(a, b)| (problem.distance(a, b), a, b))
            .collect();
        edges.sort();

        let mut root: Vec<usize> = (0..n).collect();
        fn find(root: &mut Vec<usize>, v: usize) -> usize {
            if root[v] != v {
                let r = find(root, root[v]);
                root[v] = r;
            }
            root[v]
        }

        let mut total = 0;
        for (d, a, b) in edges {
            let (ra, rb) = (find(&mut root, a), find(&mut root, b));
            if ra != rb {
                root[ra] = rb;
                total += d;
            }
        }
        total
    }

    #[test]
    fn square_tree_takes_three_sides() {
        let problem = square();
        let tree = minimum_spanning_tree(&problem).expect("mst");
        assert_eq!(tree.edge_count(), 3);
        assert!(tree.is_connected());
        assert_eq!(tree.total_weight(&problem), 30);
        assert_eq!(kruskal_weight(&problem), 30);
    }

    #[test]
    fn saturated_distances_are_still_attached() {
        let problem = Problem::from_points(
            [
                Point::new(0, 0.0, 0.0),
                Point::new(1, 1e300, 0.0),
                Point::new(2, 0.0, 1e300),
            ],
            Rounding::Nearest,
        );
        assert_eq!(problem.distance(1, 2), Distance::MAX);

        let tree = minimum_spanning_tree(&problem).expect("mst");
        assert_eq!(tree.edge_count(), 2);
        assert!(tree.is_connected());
        assert_eq!(tree.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn ties_go_to_first_found() {
        // From 0, both 1 and 3 are at distance 10 and 1 is attached first.
        // Then 2 (via 1) and 3 (via 0) tie at 10: 2 wins on index, and 3 keeps
        // its first-found parent 0 over the equally close 2.
        let problem = square();
        let tree = minimum_spanning_tree(&problem).expect("mst");
        assert_eq!(tree.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 3), (1, 2)]);
    }

    #[test]
    fn fewer_than_two_points_is_invalid() {
        let empty = Problem::from_points(Vec::new(), Rounding::Nearest);
        assert!(matches!(minimum_spanning_tree(&empty), Err(Error::InvalidInput(_))));

        let single = Problem::from_points([Point::new(4, 1.0, 1.0)], Rounding::Nearest);
        assert!(matches!(minimum_spanning_tree(&single), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn duplicate_coordinates_give_zero_length_edge() {
        let problem = Problem::from_points(
            [
                Point::new(0, 3.0, 3.0),
                Point::new(1, 3.0, 3.0),
                Point::new(2, 8.0, 3.0),
            ],
            Rounding::Nearest,
        );
        let tree = minimum_spanning_tree(&problem).expect("mst");
        assert_eq!(tree.multiplicity(0, 1), 1);
        assert_eq!(problem.distance(0, 1), 0);
        assert_eq!(tree.total_weight(&problem), 5);
    }

    #[test]
    fn random_trees_are_spanning_and_minimal() {
        for seed in 0..20 {
            let problem = Problem::random(5 + seed as usize * 3, 500, seed, Rounding::Nearest)
                .expect("random");
            let tree = minimum_spanning_tree(&problem).expect("mst");
            let n = problem.n();

            assert_eq!(tree.edge_count(), n - 1, "seed {seed}");
            // Connected with n - 1 edges implies acyclic.
            assert!(tree.is_connected(), "seed {seed}");
            assert!((0..n).all(|v| tree.degree(v) > 0), "seed {seed}");
            assert_eq!(tree.total_weight(&problem), kruskal_weight(&problem), "seed {seed}");
        }
    }
}
