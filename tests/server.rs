//! End-to-end wire-protocol tests: a real server on an ephemeral port, real
//! TCP clients, byte-exact response assertions.

use graphd::server::{Server, ServerConfig};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;

fn spawn_server() -> SocketAddr {
    let server = Server::bind(&ServerConfig {
        port: 0,
        acceptors: 2,
    })
    .expect("bind ephemeral port");
    let addr = server.local_addr().expect("local addr");
    thread::spawn(move || server.serve());
    addr
}

/// One request, the full response, connection closed by the server.
fn roundtrip(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.write_all(request.as_bytes()).expect("send request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .expect("read until server close");
    response
}

#[test]
fn euler_positive_on_explicit_square() {
    let addr = spawn_server();
    let response = roundtrip(addr, "EULER GRAPH 4 4\n0 1\n1 2\n2 3\n3 0\n");
    let mut lines = response.lines();
    assert_eq!(
        lines.next(),
        Some("Euler circuit exists. Sequence of vertices:")
    );
    let seq: Vec<usize> = lines
        .next()
        .expect("sequence line")
        .split(" -> ")
        .map(|t| t.parse().expect("vertex"))
        .collect();
    assert_eq!(lines.next(), None);

    // E+1 vertices, closed, and the walk covers the four edges exactly once.
    assert_eq!(seq.len(), 5);
    assert_eq!(seq.first(), seq.last());
    let mut walked: Vec<(usize, usize)> = seq
        .windows(2)
        .map(|w| (w[0].min(w[1]), w[0].max(w[1])))
        .collect();
    walked.sort_unstable();
    assert_eq!(walked, vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
}

#[test]
fn euler_odd_degree_path() {
    let addr = spawn_server();
    let response = roundtrip(addr, "EULER GRAPH 3 4\n0 1\n1 2\n2 3\n");
    assert_eq!(response, "No Euler circuit: 2 vertices have odd degree.\n");
}

#[test]
fn euler_duplicate_edge_leaves_single_edge() {
    let addr = spawn_server();
    let response = roundtrip(addr, "EULER GRAPH 2 3\n0 1\n0 1\n");
    assert_eq!(response, "No Euler circuit: 2 vertices have odd degree.\n");
}

#[test]
fn euler_empty_graph_is_a_trivial_circuit() {
    let addr = spawn_server();
    let response = roundtrip(addr, "EULER GRAPH 0 4\n");
    assert_eq!(response, "Euler circuit exists. Sequence of vertices:\n0\n");
}

#[test]
fn mst_cycle_with_expensive_chord() {
    let addr = spawn_server();
    let response = roundtrip(addr, "MST GRAPH 5 5\n0 1 1\n1 2 2\n2 3 3\n3 4 4\n0 4 10\n");
    assert_eq!(response, "MST total weight: 10\n");
}

#[test]
fn mst_isolated_vertex_is_disconnected() {
    let addr = spawn_server();
    let response = roundtrip(addr, "MST GRAPH 1 3\n0 1 5\n");
    assert_eq!(response, "MST: graph is not connected (no spanning tree)\n");
}

#[test]
fn maxclique_on_k4() {
    let addr = spawn_server();
    let response = roundtrip(addr, "MAXCLIQUE GRAPH 6 4\n0 1\n0 2\n0 3\n1 2\n1 3\n2 3\n");
    assert_eq!(response, "Max clique size = 4\nVertices: 0 1 2 3\n");
}

#[test]
fn countclq3p_on_k4() {
    let addr = spawn_server();
    let response = roundtrip(addr, "COUNTCLQ3P GRAPH 6 4\n0 1\n0 2\n0 3\n1 2\n1 3\n2 3\n");
    assert_eq!(response, "Number of cliques (size >= 3): 5\n");
}

#[test]
fn hamilton_pentagon_with_chord() {
    let addr = spawn_server();
    let response = roundtrip(addr, "HAMILTON GRAPH 6 5\n0 1\n1 2\n2 3\n3 4\n0 4\n0 2\n");
    assert_eq!(
        response,
        "Hamiltonian cycle found:\n0 -> 1 -> 2 -> 3 -> 4 -> 0\n"
    );
}

#[test]
fn hamilton_negative() {
    let addr = spawn_server();
    let response = roundtrip(addr, "HAMILTON GRAPH 3 4\n0 1\n1 2\n2 3\n");
    assert_eq!(response, "No Hamiltonian cycle.\n");
}

#[test]
fn adjacency_prefix_is_byte_exact() {
    let addr = spawn_server();
    let response = roundtrip(addr, "MAXCLIQUE GRAPH 2 3 -p\n0 1\n1 2\n");
    assert_eq!(
        response,
        "Graph: V=3, E=2\nAdjacency matrix:\n\
         0 1 0 \n\
         1 0 1 \n\
         0 1 0 \n\
         Max clique size = 2\nVertices: 0 1\n"
    );
}

#[test]
fn adjacency_prefix_reflects_deduplicated_edges() {
    // Three lines announced, one distinct edge: the prefix shows E=1.
    let addr = spawn_server();
    let response = roundtrip(addr, "COUNTCLQ3P GRAPH 3 3 -p\n0 1\n0 1\n1 1\n");
    assert_eq!(
        response,
        "Graph: V=3, E=1\nAdjacency matrix:\n\
         0 1 0 \n\
         1 0 0 \n\
         0 0 0 \n\
         Number of cliques (size >= 3): 0\n"
    );
}

#[test]
fn random_mode_is_deterministic_per_seed() {
    let addr = spawn_server();
    let first = roundtrip(addr, "MAXCLIQUE 8 6 31337 -p\n");
    let second = roundtrip(addr, "MAXCLIQUE 8 6 31337 -p\n");
    assert_eq!(first, second);
    assert!(first.starts_with("Graph: V=6, E=8\nAdjacency matrix:\n"));
    assert!(first.contains("Max clique size = "));
}

#[test]
fn random_mode_euler_has_a_well_formed_answer() {
    let addr = spawn_server();
    let response = roundtrip(addr, "EULER 4 4 0\n");
    assert!(
        response.starts_with("Euler circuit exists. Sequence of vertices:\n")
            || response.starts_with("No Euler circuit: "),
        "unexpected response: {response:?}"
    );
}

#[test]
fn error_lines_close_the_connection() {
    let addr = spawn_server();
    assert_eq!(
        roundtrip(addr, "DIJKSTRA 1 2 3\n"),
        "ERR unknown ALGO. Supported: EULER MST MAXCLIQUE COUNTCLQ3P HAMILTON\n"
    );
    assert_eq!(
        roundtrip(addr, "MST 3 4\n"),
        "ERR usage: <ALGO> <edges> <vertices> <seed> [-p]\n"
    );
    assert_eq!(
        roundtrip(addr, "MST 99 4 0\n"),
        "ERR invalid: E <= V*(V-1)/2 (max=6)\n"
    );
    assert_eq!(
        roundtrip(addr, "MST 1 4 0 -x\n"),
        "ERR bad flag. Use -p or omit.\n"
    );
    assert_eq!(
        roundtrip(addr, "MST GRAPH 1 3\n0 9\n"),
        "ERR edge endpoints\n"
    );
    assert_eq!(
        roundtrip(addr, "MST GRAPH 1 3\n0 1 -2\n"),
        "ERR weight must be positive\n"
    );
}

#[test]
fn short_explicit_input_is_an_error() {
    let addr = spawn_server();
    // The client half-closes after too few edge lines; the server must not
    // wait forever for the rest.
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.write_all(b"MST GRAPH 3 4\n0 1\n").expect("send");
    stream
        .shutdown(std::net::Shutdown::Write)
        .expect("half-close");
    let mut response = String::new();
    stream.read_to_string(&mut response).expect("read");
    assert_eq!(response, "ERR short input: expected 3 edge lines\n");
}

#[test]
fn same_algorithm_requests_stay_paired_with_their_connections() {
    let addr = spawn_server();

    // Both requests land in the same stage mailbox; each response must
    // come back on the connection that carried its request.
    let mut a = TcpStream::connect(addr).expect("connect");
    let mut b = TcpStream::connect(addr).expect("connect");
    a.write_all(b"MST GRAPH 1 2\n0 1 3\n").expect("send");
    b.write_all(b"MST GRAPH 1 2\n0 1 8\n").expect("send");

    let mut ra = String::new();
    a.read_to_string(&mut ra).expect("read");
    let mut rb = String::new();
    b.read_to_string(&mut rb).expect("read");
    assert_eq!(ra, "MST total weight: 3\n");
    assert_eq!(rb, "MST total weight: 8\n");
}

#[test]
fn one_request_per_connection() {
    let addr = spawn_server();
    let mut stream = TcpStream::connect(addr).expect("connect");
    // A second header on the same connection is ignored: the server answers
    // the first request and closes.
    stream
        .write_all(b"COUNTCLQ3P GRAPH 0 3\nMST GRAPH 0 1\n")
        .expect("send");
    let mut response = String::new();
    stream.read_to_string(&mut response).expect("read");
    assert_eq!(response, "Number of cliques (size >= 3): 0\n");
}

#[test]
fn many_concurrent_clients() {
    let addr = spawn_server();
    let mut joins = Vec::new();
    for i in 0..12 {
        joins.push(thread::spawn(move || {
            let (request, expected): (&str, String) = match i % 3 {
                0 => ("EULER GRAPH 3 3\n0 1\n1 2\n0 2\n", "Euler circuit exists. Sequence of vertices:\n0 -> 2 -> 1 -> 0\n".to_string()),
                1 => ("MST GRAPH 3 3\n0 1 1\n1 2 1\n0 2 5\n", "MST total weight: 2\n".to_string()),
                _ => ("MAXCLIQUE GRAPH 3 3\n0 1\n1 2\n0 2\n", "Max clique size = 3\nVertices: 0 1 2\n".to_string()),
            };
            assert_eq!(roundtrip(addr, request), expected);
        }));
    }
    for join in joins {
        join.join().expect("client thread");
    }
}
