//! # graphd
//!
//! A TCP compute server answering graph-algorithm queries over undirected,
//! positively weighted simple graphs.
//!
//! This crate provides:
//! - A dense graph model with adjacency and weight matrices and a compact
//!   bitset backing for neighborhood masks.
//! - Five exact algorithms: Euler circuit (Hierholzer), minimum spanning tree
//!   (Prim), maximum clique and all-cliques-of-size-≥3 (Bron–Kerbosch with and
//!   without Tomita pivoting on bitset neighborhoods), and Hamiltonian cycle
//!   (pruned backtracking).
//! - A concurrent request pipeline: a Leader–Follower acceptor pool feeding
//!   per-algorithm worker stages, with a single sender stage that owns every
//!   client-socket write.
//!
//! ## Quick Start
//!
//! ```no_run
//! use graphd::server::{Server, ServerConfig};
//!
//! let server = Server::bind(&ServerConfig { port: 7070, ..Default::default() })
//!     .expect("bind");
//! server.serve(); // runs until the process is killed
//! ```
//!
//! ## Working with Graphs Directly
//!
//! ```
//! use graphd::graph::Graph;
//! use graphd::clique::max_clique;
//!
//! let mut g = Graph::new(4);
//! for (u, v) in [(0, 1), (0, 2), (1, 2), (2, 3)] {
//!     assert!(g.add_edge(u, v, 1));
//! }
//! let found = max_clique(&g);
//! assert_eq!(found.size, 3);
//! assert_eq!(found.members, vec![0, 1, 2]);
//! ```
//!
//! ## Wire Protocol
//!
//! One request per TCP connection, line-oriented ASCII:
//!
//! ```text
//! <ALGO> <E> <V> <SEED> [-p]        random mode (seeded generator)
//! <ALGO> GRAPH <E> <V> [-p]         explicit mode, followed by E edge lines
//! ```
//!
//! with `ALGO` one of `EULER MST MAXCLIQUE COUNTCLQ3P HAMILTON`. The response
//! is the algorithm's textual result, optionally prefixed with the adjacency
//! matrix when `-p` is given, after which the server closes the connection.
//!
//! ## Modules
//!
//! - [`bitset`]: Fixed-width dynamic bitset backing neighborhood masks.
//! - [`graph`]: Graph model, validated edge insertion, random generation.
//! - [`euler`], [`mst`], [`clique`], [`hamilton`]: The algorithm kernel.
//! - [`strategy`]: Name-to-algorithm registry with a line-sink `run` surface.
//! - [`parser`]: Wire-request parsing and the error taxonomy.
//! - [`pipeline`]: Per-algorithm Active Objects and the serializing sender.
//! - [`server`]: Leader–Follower acceptor pool and process lifecycle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing

pub mod bitset;
pub mod clique;
pub mod euler;
pub mod graph;
pub mod hamilton;
pub mod mst;
pub mod parser;
pub mod pipeline;
pub mod server;
pub mod strategy;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::clique::{count_cliques_3plus, max_clique, MaxClique};
    pub use crate::euler::{euler_circuit, EulerOutcome};
    pub use crate::graph::Graph;
    pub use crate::hamilton::hamilton_cycle;
    pub use crate::mst::{mst_weight_prim, MstOutcome};
    pub use crate::server::{Server, ServerConfig};
    pub use crate::strategy::Algorithm;
}
