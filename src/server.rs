//! Listener lifecycle and the Leader–Follower acceptor pool.
//!
//! `T` worker threads share one listening socket. A `has_leader` flag under a
//! mutex, paired with a condvar, ensures at most one thread blocks in
//! `accept` at any instant. The leader hands the role off *before* doing any
//! per-connection work: it clears the flag, wakes one follower, and only then
//! reads and parses the request on the connection it just accepted.
//!
//! Parsing happens inline on the promoted thread; the validated request is
//! then moved into the pipeline and the acceptor goes back to waiting for
//! the leader role. Parse failures are answered with their one-line `ERR`
//! message through the sender stage, which also closes the connection.

use crate::parser::parse_request;
use crate::pipeline::{Job, Pipeline};
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use tracing::{debug, info, warn};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces).
    pub port: u16,
    /// Number of acceptor threads. The six pipeline stages come on top.
    pub acceptors: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7070,
            acceptors: default_acceptors(),
        }
    }
}

/// Default acceptor count: one per logical core, at least one.
pub fn default_acceptors() -> usize {
    thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// The leader-election state shared by the acceptor pool.
#[derive(Default)]
struct AcceptRole {
    has_leader: Mutex<bool>,
    handoff: Condvar,
}

/// A bound, not-yet-serving server.
pub struct Server {
    listener: TcpListener,
    acceptors: usize,
}

impl Server {
    /// Binds the listening socket.
    ///
    /// # Errors
    /// Returns the underlying I/O error when binding fails (port in use,
    /// insufficient privileges); callers treat this as fatal.
    pub fn bind(cfg: &ServerConfig) -> io::Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", cfg.port))?;
        info!(addr = %listener.local_addr()?, "listening");
        Ok(Self {
            listener,
            acceptors: cfg.acceptors.max(1),
        })
    }

    /// The bound address (useful when binding port 0).
    ///
    /// # Errors
    /// Propagates the socket-name lookup failure, which on a healthy socket
    /// does not happen.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Starts the pipeline and the acceptor pool, then serves forever.
    ///
    /// There is no normal return path; the process runs until it is killed.
    pub fn serve(self) {
        let pipeline = Pipeline::start();
        let listener = Arc::new(self.listener);
        let role = Arc::new(AcceptRole::default());

        let mut handles = Vec::with_capacity(self.acceptors);
        for i in 0..self.acceptors {
            let listener = Arc::clone(&listener);
            let role = Arc::clone(&role);
            let pipeline = pipeline.clone();
            let handle = thread::Builder::new()
                .name(format!("acceptor-{i}"))
                .spawn(move || acceptor_loop(&listener, &role, &pipeline))
                .expect("spawning an acceptor thread");
            handles.push(handle);
        }
        for handle in handles {
            let _ = handle.join();
        }
    }
}

/// One worker of the Leader–Follower pool.
fn acceptor_loop(listener: &TcpListener, role: &AcceptRole, pipeline: &Pipeline) {
    loop {
        // Wait for the leader role.
        {
            let mut leader = role.has_leader.lock().expect("leader lock");
            while *leader {
                leader = role.handoff.wait(leader).expect("leader lock");
            }
            *leader = true;
        }

        // Sole owner of the listening socket until the handoff below.
        let accepted = loop {
            match listener.accept() {
                Ok((stream, peer)) => break Some((stream, peer)),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "accept failed");
                    break None;
                }
            }
        };

        // Promote a follower before touching the connection.
        {
            let mut leader = role.has_leader.lock().expect("leader lock");
            *leader = false;
            role.handoff.notify_one();
        }

        if let Some((stream, peer)) = accepted {
            debug!(%peer, "connection accepted");
            handle_connection(stream, pipeline);
        }
    }
}

/// Reads and parses one request, then hands it to the pipeline. All response
/// bytes — including error lines — go through the sender stage.
fn handle_connection(stream: TcpStream, pipeline: &Pipeline) {
    let mut reader = BufReader::new(stream);

    let mut header = String::new();
    match reader.read_line(&mut header) {
        Ok(0) | Err(_) => return, // client went away before saying anything
        Ok(_) => {}
    }

    match parse_request(&header, &mut reader) {
        Ok(request) => pipeline.submit(Job {
            request,
            // Unconsumed buffered bytes are dropped with the reader; a
            // connection carries exactly one request.
            stream: reader.into_inner(),
        }),
        Err(e) => {
            debug!(error = %e, "request rejected");
            pipeline.submit_raw(reader.into_inner(), format!("{e}\n"));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
