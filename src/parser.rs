//! Wire-request parsing.
//!
//! A request is one whitespace-tokenized header line, plus — in explicit
//! mode — exactly `E` edge lines. Every rejection maps to a single-line
//! `ERR …` wire message; the [`ParseError`] `Display` impl *is* that message.

use crate::graph::Graph;
use crate::strategy::Algorithm;
use std::io::BufRead;
use thiserror::Error;

/// A fully validated request, ready to enter the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    /// The algorithm to run.
    pub algorithm: Algorithm,
    /// Whether to prefix the response with the adjacency matrix (`-p`).
    pub want_print: bool,
    /// The constructed graph; owned by the request from here on.
    pub graph: Graph,
}

/// Everything that can go wrong before a request enters the pipeline.
///
/// The `Display` text of each variant is the exact line written back to the
/// client (the `ERR` prefix included; the trailing newline is not).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong token count in the header line.
    #[error("ERR usage: <ALGO> <edges> <vertices> <seed> [-p]")]
    Usage,
    /// The first token names no known algorithm.
    #[error("ERR unknown ALGO. Supported: EULER MST MAXCLIQUE COUNTCLQ3P HAMILTON")]
    UnknownAlgo,
    /// Numeric header fields failed to parse.
    #[error("ERR bad params. Usage: <ALGO> <edges> <vertices> <seed> [-p]")]
    BadParams,
    /// A fifth token that is not `-p`.
    #[error("ERR bad flag. Use -p or omit.")]
    BadFlag,
    /// `V < 1` or `E < 0`.
    #[error("ERR invalid: V >= 1, E >= 0")]
    BadRange,
    /// More edges requested than a simple graph admits.
    #[error("ERR invalid: E <= V*(V-1)/2 (max={0})")]
    TooManyEdges(i64),
    /// An explicit-mode edge line that is not `u v [w]`.
    #[error("ERR edge line: expected \"u v [w]\"")]
    BadEdgeLine,
    /// An edge endpoint outside `0..V`.
    #[error("ERR edge endpoints")]
    BadEndpoints,
    /// An explicit weight `<= 0`.
    #[error("ERR weight must be positive")]
    BadWeight,
    /// The client closed before sending all announced edge lines.
    #[error("ERR short input: expected {0} edge lines")]
    ShortInput(i64),
}

/// Parses a request from its header line, pulling edge lines from `rest`
/// when the header announces explicit mode.
///
/// # Errors
/// Returns the wire-level [`ParseError`] for any malformed or out-of-range
/// input; the caller emits it and closes the connection.
pub fn parse_request(header: &str, rest: &mut dyn BufRead) -> Result<Request, ParseError> {
    let tok: Vec<&str> = header.split_whitespace().collect();
    if tok.len() < 4 || tok.len() > 5 {
        return Err(ParseError::Usage);
    }

    let algorithm = Algorithm::from_token(tok[0]).ok_or(ParseError::UnknownAlgo)?;

    if tok[1] == "GRAPH" {
        parse_explicit(algorithm, &tok, rest)
    } else {
        parse_random(algorithm, &tok)
    }
}

/// `<ALGO> <E> <V> <SEED> [-p]`
fn parse_random(algorithm: Algorithm, tok: &[&str]) -> Result<Request, ParseError> {
    let e: i64 = tok[1].parse().map_err(|_| ParseError::BadParams)?;
    let v: i64 = tok[2].parse().map_err(|_| ParseError::BadParams)?;
    let seed: u32 = tok[3].parse().map_err(|_| ParseError::BadParams)?;
    let want_print = parse_flag(tok)?;

    check_bounds(v, e)?;
    let graph = Graph::random(v as usize, e as usize, seed);
    Ok(Request {
        algorithm,
        want_print,
        graph,
    })
}

/// `<ALGO> GRAPH <E> <V> [-p]`, followed by `E` lines of `u v [w]`.
fn parse_explicit(
    algorithm: Algorithm,
    tok: &[&str],
    rest: &mut dyn BufRead,
) -> Result<Request, ParseError> {
    let e: i64 = tok[2].parse().map_err(|_| ParseError::BadParams)?;
    let v: i64 = tok[3].parse().map_err(|_| ParseError::BadParams)?;
    let want_print = parse_flag(tok)?;

    check_bounds(v, e)?;
    let mut graph = Graph::new(v as usize);

    // Exactly E lines are consumed, whether or not each one lands an edge:
    // duplicates and self-loops are dropped silently but still count.
    let mut line = String::new();
    for _ in 0..e {
        line.clear();
        let n = rest.read_line(&mut line).map_err(|_| ParseError::ShortInput(e))?;
        if n == 0 {
            return Err(ParseError::ShortInput(e));
        }
        add_edge_line(&mut graph, &line)?;
    }

    Ok(Request {
        algorithm,
        want_print,
        graph,
    })
}

/// Validates and applies one `u v [w]` line; weight defaults to 1.
fn add_edge_line(graph: &mut Graph, line: &str) -> Result<(), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Err(ParseError::BadEdgeLine);
    }
    let u: i64 = fields[0].parse().map_err(|_| ParseError::BadEdgeLine)?;
    let v: i64 = fields[1].parse().map_err(|_| ParseError::BadEdgeLine)?;
    let w: i64 = match fields.get(2) {
        Some(f) => f.parse().map_err(|_| ParseError::BadEdgeLine)?,
        None => 1,
    };

    let range = 0..graph.vertex_count() as i64;
    if !range.contains(&u) || !range.contains(&v) {
        return Err(ParseError::BadEndpoints);
    }
    if w <= 0 {
        return Err(ParseError::BadWeight);
    }

    // Self-loops and duplicates are silently dropped (add_edge refuses them).
    let _ = graph.add_edge(u as usize, v as usize, w);
    Ok(())
}

fn parse_flag(tok: &[&str]) -> Result<bool, ParseError> {
    match tok.get(4) {
        None => Ok(false),
        Some(&"-p") => Ok(true),
        Some(_) => Err(ParseError::BadFlag),
    }
}

fn check_bounds(v: i64, e: i64) -> Result<(), ParseError> {
    if v < 1 || e < 0 {
        return Err(ParseError::BadRange);
    }
    let max_e = v * (v - 1) / 2;
    if e > max_e {
        return Err(ParseError::TooManyEdges(max_e));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
