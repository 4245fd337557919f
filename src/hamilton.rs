//! Hamiltonian cycle via pruned backtracking.

use crate::graph::Graph;

/// Searches for a Hamiltonian cycle in `g`.
///
/// Returns `V + 1` vertices starting and ending at vertex 0, or `None` when
/// no cycle exists. Quick rejections before the search: fewer than three
/// vertices, disconnectedness among non-isolated vertices, or any vertex of
/// degree < 2 (such a vertex cannot lie on a cycle).
///
/// The start is fixed at vertex 0 to remove rotational symmetry, and
/// neighbors are tried in ascending index order, so the first cycle found is
/// deterministic.
pub fn hamilton_cycle(g: &Graph) -> Option<Vec<usize>> {
    let v = g.vertex_count();
    if v < 3 {
        return None;
    }
    if !g.connected_among_non_isolated() {
        return None;
    }
    if (0..v).any(|u| g.degree(u) < 2) {
        return None;
    }

    let mut path = Vec::with_capacity(v + 1);
    let mut used = vec![false; v];
    path.push(0);
    used[0] = true;
    if extend(g, &mut path, &mut used) {
        path.push(0);
        return Some(path);
    }
    None
}

/// Depth-first extension. At full depth the cycle closes iff the last vertex
/// is adjacent to the start.
fn extend(g: &Graph, path: &mut Vec<usize>, used: &mut [bool]) -> bool {
    let v = g.vertex_count();
    if path.len() == v {
        return g.has_edge(*path.last().expect("path is non-empty"), 0);
    }

    let tail = *path.last().expect("path is non-empty");
    for next in 0..v {
        if used[next] || !g.has_edge(tail, next) {
            continue;
        }
        path.push(next);
        used[next] = true;
        if extend(g, path, used) {
            return true;
        }
        used[next] = false;
        path.pop();
    }
    false
}

// ============================================================================
// Tests
// ============================================================================
