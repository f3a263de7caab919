use std::collections::HashMap;

use crate::types::*;

/// Maps between input identifiers and dense vertex indices.
#[derive(Debug, Default, Clone)]
pub(super) struct ProblemIndex {
    /// Identifier of each vertex, ascending.
    ids: Vec<PointId>,
    /// Inverse of `ids`.
    vertices: HashMap<PointId, Vertex>,
}

impl ProblemIndex {
    /// Builds the index from identifiers already in ascending order.
    pub fn new(ids: Vec<PointId>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must be strictly ascending");

        let vertices = ids.iter().enumerate().map(|(v, &id)| (id, v)).collect();
        ProblemIndex { ids, vertices }
    }

    #[inline(always)]
    pub fn id(&self, vertex: Vertex) -> PointId {
        self.ids[vertex]
    }

    #[inline(always)]
    pub fn vertex(&self, id: PointId) -> Option<Vertex> {
        self.vertices.get(&id).copied()
    }

    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_both_directions() {
        let index = ProblemIndex::new(vec![3, 8, 20]);
        assert_eq!(index.id(0), 3);
        assert_eq!(index.id(2), 20);
        assert_eq!(index.vertex(8), Some(1));
        assert_eq!(index.vertex(4), None);
        assert_eq!(index.ids(), &[3, 8, 20]);
    }
}
