//! Name-to-algorithm registry.
//!
//! Each wire command maps to one [`Algorithm`] variant whose `run` method
//! consumes an immutable graph and emits the canonical response body through
//! a line-oriented text sink.

use crate::clique::{count_cliques_3plus, max_clique};
use crate::euler::{euler_circuit, EulerOutcome};
use crate::graph::Graph;
use crate::hamilton::hamilton_cycle;
use crate::mst::{mst_weight_prim, MstOutcome};
use std::fmt;

/// The five supported algorithms, in wire-command order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `EULER` — Euler circuit (Hierholzer).
    Euler,
    /// `MST` — minimum spanning tree weight (Prim).
    Mst,
    /// `MAXCLIQUE` — maximum clique (Bron–Kerbosch, Tomita pivot).
    MaxClique,
    /// `COUNTCLQ3P` — count of all cliques of size ≥ 3.
    CountClq3p,
    /// `HAMILTON` — Hamiltonian cycle (backtracking).
    Hamilton,
}

impl Algorithm {
    /// All algorithms, indexable by pipeline stage.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Euler,
        Algorithm::Mst,
        Algorithm::MaxClique,
        Algorithm::CountClq3p,
        Algorithm::Hamilton,
    ];

    /// Looks up a wire command. Commands are case-sensitive ASCII.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "EULER" => Some(Self::Euler),
            "MST" => Some(Self::Mst),
            "MAXCLIQUE" => Some(Self::MaxClique),
            "COUNTCLQ3P" => Some(Self::CountClq3p),
            "HAMILTON" => Some(Self::Hamilton),
            _ => None,
        }
    }

    /// The wire command for this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "EULER",
            Self::Mst => "MST",
            Self::MaxClique => "MAXCLIQUE",
            Self::CountClq3p => "COUNTCLQ3P",
            Self::Hamilton => "HAMILTON",
        }
    }

    /// Index of this algorithm's pipeline stage (position in [`ALL`](Self::ALL)).
    pub fn stage_index(self) -> usize {
        match self {
            Self::Euler => 0,
            Self::Mst => 1,
            Self::MaxClique => 2,
            Self::CountClq3p => 3,
            Self::Hamilton => 4,
        }
    }

    /// Runs the algorithm on `g`, emitting the response body line by line.
    pub fn run(self, g: &Graph, emit: &mut dyn FnMut(&str)) {
        match self {
            Self::Euler => run_euler(g, emit),
            Self::Mst => run_mst(g, emit),
            Self::MaxClique => run_max_clique(g, emit),
            Self::CountClq3p => run_count(g, emit),
            Self::Hamilton => run_hamilton(g, emit),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn run_euler(g: &Graph, emit: &mut dyn FnMut(&str)) {
    match euler_circuit(g) {
        EulerOutcome::Disconnected => {
            emit("No Euler circuit: graph is disconnected among non-isolated vertices.\n");
        }
        EulerOutcome::OddDegrees(n) => {
            emit(&format!("No Euler circuit: {n} vertices have odd degree.\n"));
        }
        EulerOutcome::Circuit(path) => {
            emit("Euler circuit exists. Sequence of vertices:\n");
            emit(&join_arrows(&path));
        }
    }
}

fn run_mst(g: &Graph, emit: &mut dyn FnMut(&str)) {
    match mst_weight_prim(g) {
        MstOutcome::Weight(w) => emit(&format!("MST total weight: {w}\n")),
        MstOutcome::Disconnected => {
            emit("MST: graph is not connected (no spanning tree)\n");
        }
    }
}

fn run_max_clique(g: &Graph, emit: &mut dyn FnMut(&str)) {
    let found = max_clique(g);
    emit(&format!("Max clique size = {}\n", found.size));
    if !found.members.is_empty() {
        let list: Vec<String> = found.members.iter().map(ToString::to_string).collect();
        emit(&format!("Vertices: {}\n", list.join(" ")));
    }
}

fn run_count(g: &Graph, emit: &mut dyn FnMut(&str)) {
    emit(&format!(
        "Number of cliques (size >= 3): {}\n",
        count_cliques_3plus(g)
    ));
}

fn run_hamilton(g: &Graph, emit: &mut dyn FnMut(&str)) {
    match hamilton_cycle(g) {
        Some(cycle) => {
            emit("Hamiltonian cycle found:\n");
            emit(&join_arrows(&cycle));
        }
        None => emit("No Hamiltonian cycle.\n"),
    }
}

/// `a -> b -> c\n`, the vertex-sequence rendering shared by Euler and
/// Hamilton bodies.
fn join_arrows(seq: &[usize]) -> String {
    let list: Vec<String> = seq.iter().map(ToString::to_string).collect();
    format!("{}\n", list.join(" -> "))
}

// ============================================================================
// Tests
// ============================================================================
