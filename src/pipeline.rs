//! The request pipeline: one Active Object per algorithm plus a single
//! sender stage.
//!
//! Each stage is a long-lived worker thread owning an unbounded FIFO mailbox
//! (a `crossbeam-channel`; producers clone the sender, only the stage holds
//! the receiver, so the discipline is strictly multi-producer /
//! single-consumer). Requests to the same algorithm complete in submission
//! order; requests to different algorithms complete in any order.
//!
//! The sender stage is the only component that writes to client sockets or
//! closes them. Concentrating the writes keeps every response contiguous and
//! keeps slow clients from stalling the CPU-bound algorithm stages.

use crate::parser::Request;
use crate::strategy::Algorithm;
use crossbeam_channel::{unbounded, Sender};
use std::io::Write;
use std::net::{Shutdown, TcpStream};
use std::thread;
use tracing::{debug, warn};

/// A parsed request travelling to its algorithm stage together with the
/// connection it arrived on.
#[derive(Debug)]
pub struct Job {
    /// The validated request; the graph is owned by this job.
    pub request: Request,
    /// The client connection; ownership moves stage to stage and ends at
    /// the sender.
    pub stream: TcpStream,
}

/// A finished response travelling to the sender stage.
#[derive(Debug)]
pub struct SendTask {
    /// The client connection, closed by the sender after the final byte.
    pub stream: TcpStream,
    /// The complete response text.
    pub text: String,
}

/// Handles to the six running stages. Cloning is cheap (senders only); the
/// worker threads run for the life of the process.
#[derive(Clone)]
pub struct Pipeline {
    algo_tx: Vec<Sender<Job>>,
    sender_tx: Sender<SendTask>,
}

impl Pipeline {
    /// Spawns the five algorithm workers and the sender worker.
    pub fn start() -> Self {
        let (sender_tx, sender_rx) = unbounded::<SendTask>();
        spawn_worker("sender", move || {
            for task in sender_rx {
                deliver(task);
            }
        });

        let mut algo_tx = Vec::with_capacity(Algorithm::ALL.len());
        for algo in Algorithm::ALL {
            let (tx, rx) = unbounded::<Job>();
            let to_sender = sender_tx.clone();
            spawn_worker(algo.name(), move || {
                for job in rx {
                    let text = assemble_response(&job.request);
                    debug!(algo = %algo, bytes = text.len(), "job finished");
                    // The graph dies with the request here; only the text
                    // and the connection travel on.
                    if to_sender
                        .send(SendTask {
                            stream: job.stream,
                            text,
                        })
                        .is_err()
                    {
                        return; // sender stage is gone; shut down with it
                    }
                }
            });
            algo_tx.push(tx);
        }

        Self { algo_tx, sender_tx }
    }

    /// Enqueues a job into its algorithm's mailbox.
    pub fn submit(&self, job: Job) {
        let idx = job.request.algorithm.stage_index();
        // The stage threads outlive every producer; a send can only fail
        // during process teardown, when the response is moot anyway.
        let _ = self.algo_tx[idx].send(job);
    }

    /// Enqueues a pre-assembled response (used for parse errors, which skip
    /// the algorithm stages but must still reach the client through the one
    /// writing component).
    pub fn submit_raw(&self, stream: TcpStream, text: String) {
        let _ = self.sender_tx.send(SendTask { stream, text });
    }
}

fn spawn_worker(name: &str, body: impl FnOnce() + Send + 'static) {
    // Worker threads are never joined; they live until the process exits.
    let _ = thread::Builder::new()
        .name(format!("stage-{}", name.to_ascii_lowercase()))
        .spawn(body);
}

/// Builds the full response text: the optional adjacency prefix followed by
/// the algorithm body.
fn assemble_response(request: &Request) -> String {
    let mut text = String::new();
    if request.want_print {
        text.push_str(&request.graph.render_adjacency());
    }
    request.algorithm.run(&request.graph, &mut |line| text.push_str(line));
    text
}

/// Writes the response and closes the connection.
///
/// `write_all` already loops over short writes and retries
/// `ErrorKind::Interrupted`; any other error abandons the task — the client
/// is not told, the connection just closes.
fn deliver(mut task: SendTask) {
    if let Err(e) = task.stream.write_all(task.text.as_bytes()) {
        warn!(error = %e, "dropping response; client write failed");
    }
    let _ = task.stream.shutdown(Shutdown::Write);
    // Dropping the stream closes the socket; the task owned the only handle.
}

// ============================================================================
// Tests
// ============================================================================
