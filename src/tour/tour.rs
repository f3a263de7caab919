use crate::problem::Problem;
use crate::types::{Distance, PointId, Vertex};
use crate::{Error, Result};

/// A Hamiltonian cycle: every vertex exactly once, the last one connecting
/// back to the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tour {
    vertices: Vec<Vertex>,
}

impl Tour {
    /// Wraps an ordering without checking it.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Tour { vertices }
    }

    /// Turns a closed walk into a tour over `n` vertices by keeping only the
    /// first visit of each vertex.
    pub fn shortcut(walk: &[Vertex], n: usize) -> Result<Self> {
        let mut visited = vec![false; n];
        let mut vertices = Vec::with_capacity(n);

        for &v in walk {
            let seen = visited
                .get_mut(v)
                .ok_or_else(|| Error::internal(format!("walk visits vertex {v} outside 0..{n}")))?;
            if !*seen {
                *seen = true;
                vertices.push(v);
            }
        }

        if vertices.len() != n {
            return Err(Error::internal(format!(
                "shortcut visits {} of {n} vertices",
                vertices.len()
            )));
        }

        Ok(Tour { vertices })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline(always)]
    pub fn get(&self, position: usize) -> Vertex {
        self.vertices[position]
    }

    /// Reverses positions `i..=k`.
    pub fn reverse(&mut self, i: usize, k: usize) {
        self.vertices[i..=k].reverse();
    }

    /// Total cyclic length, including the edge from the last vertex back to the first.
    pub fn length(&self, problem: &Problem) -> Distance {
        match self.vertices.last() {
            Some(&last) => {
                let closing = problem.distance(last, self.vertices[0]);
                walk_length(&self.vertices, problem).saturating_add(closing)
            }
            None => 0,
        }
    }

    /// The tour expressed in input identifiers.
    pub fn ids(&self, problem: &Problem) -> Vec<PointId> {
        self.vertices.iter().map(|&v| problem.id(v)).collect()
    }
}

/// Length of an open walk, summing consecutive legs only.
pub fn walk_length(walk: &[Vertex], problem: &Problem) -> Distance {
    walk.windows(2)
        .map(|w| problem.distance(w[0], w[1]))
        .fold(0, Distance::saturating_add)
}
