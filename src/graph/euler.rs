use crate::graph::Graph;
use crate::types::Vertex;
use crate::{Error, Result};

/// Walks every edge of `graph` exactly once with Fleury's algorithm, starting
/// and ending at `start`.
///
/// The graph is consumed edge by edge; clone it first if it is needed again.
/// Every vertex must have even degree and all edges must be connected.
///
/// The walk is kept as a plain vector with an index cursor. Should the vertex
/// under the cursor run out of edges while edges remain elsewhere, the cursor
/// moves to the nearest position (earlier first) whose vertex still has edges
/// and a closed sub-circuit is spliced in there.
pub fn eulerian_circuit(graph: Graph, start: Vertex) -> Result<Vec<Vertex>> {
    let walk = fleury(graph, start)?;
    log::debug!(
        "euler: edges={} splices={}",
        walk.circuit.len() - 1,
        walk.splices
    );
    Ok(walk.circuit)
}

struct Walk {
    circuit: Vec<Vertex>,
    /// Times the cursor had to jump back into the walk. Zero on any connected
    /// graph as long as bridges are left for last.
    splices: usize,
}

fn fleury(mut graph: Graph, start: Vertex) -> Result<Walk> {
    if let Some(v) = (0..graph.n()).find(|&v| graph.degree(v) % 2 != 0) {
        return Err(Error::internal(format!(
            "vertex {v} has odd degree {}, no Eulerian circuit exists",
            graph.degree(v)
        )));
    }

    let edges = graph.edge_count();
    let mut circuit = Vec::with_capacity(edges + 1);
    circuit.push(start);
    let mut cursor = 0;
    let mut splices = 0;

    while !graph.is_empty() {
        let current = circuit[cursor];

        if graph.degree(current) == 0 {
            cursor = resume_position(&graph, &circuit, cursor).ok_or_else(|| {
                Error::internal(format!(
                    "Eulerian walk stuck with {} of {edges} edges unconsumed",
                    graph.edge_count()
                ))
            })?;
            splices += 1;
            continue;
        }

        let next = next_vertex(&graph, current);
        graph.remove_edge(current, next);
        cursor += 1;
        circuit.insert(cursor, next);
    }

    if circuit.len() != edges + 1 || circuit.first() != circuit.last() {
        return Err(Error::internal(format!(
            "Eulerian walk has {} vertices for {edges} edges",
            circuit.len()
        )));
    }

    Ok(Walk { circuit, splices })
}

/// First neighbour reachable over a non-bridge edge, or the first neighbour
/// if every edge is a bridge.
fn next_vertex(graph: &Graph, current: Vertex) -> Vertex {
    let neighbors = graph.neighbors(current);
    neighbors
        .iter()
        .copied()
        .find(|&next| !is_bridge(graph, current, next))
        .unwrap_or(neighbors[0])
}

/// `true` if removing one `a-b` edge would separate `a` from `b`.
fn is_bridge(graph: &Graph, a: Vertex, b: Vertex) -> bool {
    graph.multiplicity(a, b) == 1 && !graph.reaches(b, a, Some((a, b)))
}

fn resume_position(graph: &Graph, circuit: &[Vertex], cursor: usize) -> Option<usize> {
    (0..cursor)
        .rev()
        .chain(cursor + 1..circuit.len())
        .find(|&pos| graph.degree(circuit[pos]) > 0)
}
