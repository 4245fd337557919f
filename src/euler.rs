//! Euler circuit via Hierholzer's algorithm.

use crate::graph::Graph;

/// Result of an Euler-circuit query. Every precondition failure has its own
/// variant so callers can render the precise negative message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EulerOutcome {
    /// A closed walk using every edge exactly once; `E + 1` vertices,
    /// first equal to last. An edgeless graph yields the single start vertex.
    Circuit(Vec<usize>),
    /// The subgraph induced by non-isolated vertices is not connected.
    Disconnected,
    /// The given number of vertices (always positive, always even) have odd
    /// degree.
    OddDegrees(usize),
}

/// Computes an Euler circuit of `g`, or reports why none exists.
///
/// Preconditions are checked in order: connectivity among non-isolated
/// vertices first, then even degrees. The walk consumes a mutable copy of
/// the adjacency matrix; the tie-break at every step is the lowest-indexed
/// remaining neighbor, so the output is deterministic.
pub fn euler_circuit(g: &Graph) -> EulerOutcome {
    if !g.connected_among_non_isolated() {
        return EulerOutcome::Disconnected;
    }
    let odd = (0..g.vertex_count()).filter(|&u| g.degree(u) % 2 != 0).count();
    if odd != 0 {
        return EulerOutcome::OddDegrees(odd);
    }

    let v = g.vertex_count();
    // Edges are consumed as they are walked, so work on copies.
    let mut adj: Vec<bool> = (0..v * v).map(|i| g.has_edge(i / v, i % v)).collect();
    let mut deg: Vec<usize> = (0..v).map(|u| g.degree(u)).collect();

    let start = (0..v).find(|&u| deg[u] > 0).unwrap_or(0);

    let mut stack = Vec::with_capacity(g.edge_count() + 1);
    let mut out = Vec::with_capacity(g.edge_count() + 1);
    stack.push(start);
    while let Some(&u) = stack.last() {
        let next = if deg[u] > 0 {
            (0..v).find(|&t| adj[u * v + t])
        } else {
            None
        };
        match next {
            Some(t) => {
                adj[u * v + t] = false;
                adj[t * v + u] = false;
                deg[u] -= 1;
                deg[t] -= 1;
                stack.push(t);
            }
            None => {
                out.push(u);
                stack.pop();
            }
        }
    }
    EulerOutcome::Circuit(out)
}

// ============================================================================
// Tests
// ============================================================================
