//! Minimum spanning tree weight via dense Prim's algorithm.

use crate::graph::Graph;

/// Result of a spanning-tree query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MstOutcome {
    /// Total weight of a minimum spanning tree.
    Weight(i64),
    /// The graph does not span all vertices (isolated vertex or more than
    /// one component).
    Disconnected,
}

/// Computes the MST weight of `g` with the classical O(V²) Prim scan.
///
/// A single vertex spans trivially (weight 0). Any isolated vertex, or any
/// vertex unreachable from vertex 0, makes the graph unspannable. Ties on
/// equal keys resolve to the lowest vertex index.
pub fn mst_weight_prim(g: &Graph) -> MstOutcome {
    let v = g.vertex_count();
    if v == 1 {
        return MstOutcome::Weight(0);
    }
    if !g.is_fully_connected() {
        return MstOutcome::Disconnected;
    }

    const INF: i64 = i64::MAX / 4;
    let mut key = vec![INF; v];
    let mut in_mst = vec![false; v];
    key[0] = 0;

    let mut total: i64 = 0;
    for it in 0..v {
        // Lowest key among vertices not yet included; `<` keeps the first
        // (lowest-indexed) minimum.
        let mut u = None;
        let mut best = INF;
        for i in 0..v {
            if !in_mst[i] && key[i] < best {
                best = key[i];
                u = Some(i);
            }
        }
        let Some(u) = u else {
            return MstOutcome::Disconnected;
        };
        in_mst[u] = true;
        if it > 0 {
            total += best;
        }

        for t in 0..v {
            if !in_mst[t] && g.has_edge(u, t) && g.weight(u, t) < key[t] {
                key[t] = g.weight(u, t);
            }
        }
    }
    MstOutcome::Weight(total)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    /// Independent reference: Kruskal with union-find.
    fn kruskal(g: &Graph) -> MstOutcome {
        let v = g.vertex_count();
        if v == 1 {
            return MstOutcome::Weight(0);
        }

        let mut edges = Vec::new();
        for i in 0..v {
            for j in (i + 1)..v {
                if g.has_edge(i, j) {
                    edges.push((g.weight(i, j), i, j));
                }
            }
        }
        edges.sort_unstable();

        let mut parent: Vec<usize> = (0..v).collect();
        fn find(parent: &mut Vec<usize>, mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        let mut total = 0i64;
        let mut joined = 0;
        for (w, a, b) in edges {
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            if ra != rb {
                parent[ra] = rb;
                total += w;
                joined += 1;
            }
        }
        if joined == v - 1 {
            MstOutcome::Weight(total)
        } else {
            MstOutcome::Disconnected
        }
    }

    #[test]
    fn cycle_with_expensive_chord() {
        // Path 0-1-2-3-4 costs 1+2+3+4 = 10; the closing edge costs 10 and
        // never enters the tree.
        let mut g = Graph::new(5);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 2);
        g.add_edge(2, 3, 3);
        g.add_edge(3, 4, 4);
        g.add_edge(0, 4, 10);
        assert_eq!(mst_weight_prim(&g), MstOutcome::Weight(10));
    }

    #[test]
    fn isolated_vertex_means_no_spanning_tree() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 5);
        assert_eq!(mst_weight_prim(&g), MstOutcome::Disconnected);
    }

    #[test]
    fn two_components_mean_no_spanning_tree() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 1);
        g.add_edge(2, 3, 1);
        assert_eq!(mst_weight_prim(&g), MstOutcome::Disconnected);
    }

    #[test]
    fn single_vertex_spans_trivially() {
        assert_eq!(mst_weight_prim(&Graph::new(1)), MstOutcome::Weight(0));
    }

    #[test]
    fn single_edge_pair() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1, 7);
        assert_eq!(mst_weight_prim(&g), MstOutcome::Weight(7));
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 2);
        g.add_edge(1, 2, 3);
        g.add_edge(0, 2, 9);
        assert_eq!(mst_weight_prim(&g), MstOutcome::Weight(5));
    }

    #[test]
    fn equal_weights_still_produce_minimum_total() {
        // Any spanning tree of K4 with unit weights costs 3.
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j, 1);
            }
        }
        assert_eq!(mst_weight_prim(&g), MstOutcome::Weight(3));
    }

    #[test]
    fn prim_matches_kruskal_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0x5197);
        for _ in 0..80 {
            let v = rng.random_range(1..18);
            let mut g = Graph::new(v);
            for i in 0..v {
                for j in (i + 1)..v {
                    if rng.random_bool(0.4) {
                        g.add_edge(i, j, i64::from(rng.random_range(1..=50u32)));
                    }
                }
            }
            assert_eq!(mst_weight_prim(&g), kruskal(&g), "V={v}");
        }
    }
}
