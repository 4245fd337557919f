//! Exact clique queries: maximum clique and the count of all cliques of
//! size ≥ 3.
//!
//! Both run Bron–Kerbosch over per-vertex neighborhood bitsets. The maximum
//! clique search prunes with the Tomita pivot (the candidate most adjacent to
//! the remaining candidate set); the counting variant must *not* pivot, since
//! pivoting restricts the enumeration to maximal cliques and the count covers
//! every clique.

use crate::bitset::Bitset;
use crate::graph::Graph;

/// A maximum clique: its size and one witness as an ascending vertex list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxClique {
    /// The clique number of the graph (0 for an edgeless graph).
    pub size: usize,
    /// Members of one maximum clique, ascending. Empty iff `size == 0`.
    pub members: Vec<usize>,
}

/// Finds a maximum clique of `g`.
///
/// Candidates are the non-isolated vertices; an edgeless graph therefore
/// reports size 0 with no members. Ties between equally large cliques resolve
/// to the first one found under ascending candidate iteration.
pub fn max_clique(g: &Graph) -> MaxClique {
    let v = g.vertex_count();
    let masks = g.neighbor_masks();

    let mut p = Bitset::new(v);
    for u in 0..v {
        if g.degree(u) > 0 {
            p.set(u);
        }
    }

    let mut r = Bitset::new(v);
    let mut x = Bitset::new(v);
    let mut best = Bitset::new(v);
    expand_max(&masks, &mut r, &mut p, &mut x, &mut best);

    MaxClique {
        size: best.count_ones(),
        members: best.to_vec(),
    }
}

/// Bron–Kerbosch with Tomita pivoting. `r` is the growing clique, `p` the
/// candidates, `x` the excluded set; `best` holds the largest `r` seen.
fn expand_max(
    masks: &[Bitset],
    r: &mut Bitset,
    p: &mut Bitset,
    x: &mut Bitset,
    best: &mut Bitset,
) {
    if p.is_empty() && x.is_empty() {
        if r.count_ones() > best.count_ones() {
            *best = r.clone();
        }
        return;
    }

    // Pivot: the vertex of P ∪ X with the most candidates in its
    // neighborhood. Branching only on P \ N(pivot) skips subtrees whose
    // maximal cliques are reachable through the pivot itself.
    let pivot = p
        .union(x)
        .iter_ones()
        .max_by_key(|&u| p.intersection_count(&masks[u]))
        .expect("P ∪ X is non-empty here");

    let branch = p.difference(&masks[pivot]);
    for v in branch.iter_ones() {
        r.set(v);
        let mut p2 = p.intersection(&masks[v]);
        let mut x2 = x.intersection(&masks[v]);
        expand_max(masks, r, &mut p2, &mut x2, best);
        r.clear(v);

        p.clear(v);
        x.set(v);
    }
}

/// Counts every clique of size ≥ 3 in `g` (not only maximal ones).
///
/// Returns 0 when the graph has fewer than three vertices.
pub fn count_cliques_3plus(g: &Graph) -> u64 {
    let v = g.vertex_count();
    if v <= 2 {
        return 0;
    }

    let masks = g.neighbor_masks();
    let mut p = Bitset::full(v);
    let mut count = 0u64;
    expand_count(&masks, 0, &mut p, &mut count);
    count
}

/// Pivotless Bron–Kerbosch node enumeration. Each recursive node corresponds
/// to exactly one clique (its `R`), so counting nodes with `|R| >= 3` counts
/// each qualifying clique exactly once.
fn expand_count(masks: &[Bitset], r_size: usize, p: &mut Bitset, count: &mut u64) {
    if r_size >= 3 {
        *count += 1;
    }

    let branch = p.clone();
    for v in branch.iter_ones() {
        // Remove before recursing: later branches must not revisit v.
        p.clear(v);
        let mut p2 = p.intersection(&masks[v]);
        expand_count(masks, r_size + 1, &mut p2, count);
    }
}

// ============================================================================
// Tests
// ============================================================================
