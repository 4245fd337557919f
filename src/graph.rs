//! Dense undirected graph model with validated construction and a seeded
//! random generator.
//!
//! Matrices are stored as single contiguous `V×V` buffers indexed `i*V + j`
//! rather than per-row allocations, which keeps neighbor scans cache-friendly.

use crate::bitset::Bitset;
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt::Write as _;

/// Random edge weights are drawn uniformly from `[1, WMAX]`.
pub const WMAX: u32 = 100;

// ============================================================================
// Graph
// ============================================================================

/// An undirected simple graph with positive integer edge weights.
///
/// Invariants, maintained by construction:
/// - `adj[i][i] = 0` (no self-loops) and `adj[i][j] = adj[j][i]`;
/// - `w[i][j] = w[j][i] > 0` exactly where `adj[i][j] = 1`;
/// - `edge_count` equals the number of 1s above the diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    v: usize,
    e: usize,
    adj: Vec<bool>,
    w: Vec<i64>,
}

impl Graph {
    /// Creates an edgeless graph on `v` vertices.
    ///
    /// # Panics
    /// Panics if `v == 0`; a graph has at least one vertex.
    pub fn new(v: usize) -> Self {
        assert!(v >= 1, "graph needs at least one vertex");
        Self {
            v,
            e: 0,
            adj: vec![false; v * v],
            w: vec![0i64; v * v],
        }
    }

    /// Builds a graph by placing exactly `e` distinct random edges.
    ///
    /// The generator is `ChaCha8Rng` seeded with `seed`; each placement
    /// attempt draws three values in order — `u = next % V`, `v = next % V`,
    /// `w = next % WMAX + 1` — and silently retries on self-loops and
    /// duplicates. Identical `(v, e, seed)` triples therefore always produce
    /// identical graphs.
    ///
    /// # Panics
    /// Panics if `e` exceeds `v*(v-1)/2`; callers validate bounds first.
    pub fn random(v: usize, e: usize, seed: u32) -> Self {
        let max_e = v * v.saturating_sub(1) / 2;
        assert!(
            e <= max_e,
            "cannot place {e} edges in a simple graph on {v} vertices"
        );

        let mut g = Self::new(v);
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
        while g.e < e {
            let u = rng.next_u32() as usize % v;
            let t = rng.next_u32() as usize % v;
            let w = i64::from(rng.next_u32() % WMAX) + 1;
            let _ = g.add_edge(u, t, w);
        }
        g
    }

    #[inline(always)]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.v + j
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.v
    }

    /// Returns the number of edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.e
    }

    /// Inserts the undirected edge `(u, v)` with weight `w`.
    ///
    /// Returns `false` without modifying the graph when an endpoint is out of
    /// range, `u == v`, `w <= 0`, or the edge already exists.
    pub fn add_edge(&mut self, u: usize, v: usize, w: i64) -> bool {
        if u >= self.v || v >= self.v {
            return false;
        }
        if u == v || w <= 0 {
            return false;
        }
        if self.adj[self.idx(u, v)] {
            return false;
        }
        let (uv, vu) = (self.idx(u, v), self.idx(v, u));
        self.adj[uv] = true;
        self.adj[vu] = true;
        self.w[uv] = w;
        self.w[vu] = w;
        self.e += 1;
        true
    }

    /// Returns whether the edge `(u, v)` exists.
    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.v && v < self.v);
        self.adj[u * self.v + v]
    }

    /// Returns the weight of edge `(u, v)`, or 0 when absent.
    #[inline(always)]
    pub fn weight(&self, u: usize, v: usize) -> i64 {
        debug_assert!(u < self.v && v < self.v);
        self.w[u * self.v + v]
    }

    /// Returns the degree of vertex `u`.
    pub fn degree(&self, u: usize) -> usize {
        debug_assert!(u < self.v);
        self.adj[u * self.v..(u + 1) * self.v]
            .iter()
            .filter(|&&a| a)
            .count()
    }

    /// Returns `true` iff every vertex has even degree.
    pub fn all_even_degrees(&self) -> bool {
        (0..self.v).all(|u| self.degree(u) % 2 == 0)
    }

    /// Returns `true` iff the subgraph induced by non-isolated vertices is
    /// connected. Vacuously true when the graph has no edges.
    pub fn connected_among_non_isolated(&self) -> bool {
        let Some(start) = (0..self.v).find(|&u| self.degree(u) > 0) else {
            return true;
        };
        let visited = self.dfs_from(start);
        (0..self.v).all(|u| self.degree(u) == 0 || visited[u])
    }

    /// Returns `true` iff every vertex is reachable from vertex 0.
    ///
    /// This is the spanning-tree precondition: stronger than
    /// [`connected_among_non_isolated`](Self::connected_among_non_isolated)
    /// because isolated vertices also fail it.
    pub fn is_fully_connected(&self) -> bool {
        if self.v == 1 {
            return true;
        }
        if (0..self.v).any(|u| self.degree(u) == 0) {
            return false;
        }
        self.dfs_from(0).iter().all(|&vis| vis)
    }

    /// Iterative DFS reachability from `start`.
    fn dfs_from(&self, start: usize) -> Vec<bool> {
        let mut visited = vec![false; self.v];
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(u) = stack.pop() {
            for t in 0..self.v {
                if self.adj[self.idx(u, t)] && !visited[t] {
                    visited[t] = true;
                    stack.push(t);
                }
            }
        }
        visited
    }

    /// Builds one neighborhood bitset per vertex: bit `u` of `masks[v]` is
    /// set iff the edge `(v, u)` exists.
    pub fn neighbor_masks(&self) -> Vec<Bitset> {
        (0..self.v)
            .map(|u| {
                let mut m = Bitset::new(self.v);
                for t in 0..self.v {
                    if self.adj[self.idx(u, t)] {
                        m.set(t);
                    }
                }
                m
            })
            .collect()
    }

    /// Renders the `-p` response prefix: the header line followed by the
    /// adjacency matrix, one row per line, every cell followed by a space.
    pub fn render_adjacency(&self) -> String {
        let mut out = String::with_capacity(self.v * (2 * self.v + 1) + 32);
        let _ = write!(out, "Graph: V={}, E={}\nAdjacency matrix:\n", self.v, self.e);
        for i in 0..self.v {
            for j in 0..self.v {
                out.push(if self.adj[self.idx(i, j)] { '1' } else { '0' });
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
