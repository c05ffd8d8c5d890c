//! Tree walker: streams a tree's in-order sequence into a channel.

use std::panic;

use crossbeam::channel::{bounded, Receiver, Sender};
use crossbeam::thread;
use tracing::{debug, instrument, trace};

use crate::domain::Tree;

/// What a walker did with its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every value was handed off and the channel closed.
    Completed { emitted: usize },
    /// The receiver went away; the walk stopped after `emitted` values.
    Abandoned { emitted: usize },
}

impl WalkOutcome {
    pub fn emitted(&self) -> usize {
        match self {
            Self::Completed { emitted } | Self::Abandoned { emitted } => *emitted,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Zero-capacity channel: every send waits for a matching receive.
pub fn rendezvous<T>() -> (Sender<T>, Receiver<T>) {
    bounded(0)
}

/// Sends the in-order sequence of `tree` into `sink`, then closes it.
///
/// Closing is dropping the sender. An empty tree closes the channel without
/// sending anything. If the receiver disconnects the walk stops at once and
/// reports [`WalkOutcome::Abandoned`].
#[instrument(level = "debug", skip_all)]
pub fn walk<T: Clone>(tree: &Tree<T>, sink: Sender<T>) -> WalkOutcome {
    let mut emitted = 0;
    for value in tree {
        if sink.send(value.clone()).is_err() {
            debug!(emitted, "receiver disconnected, abandoning walk");
            return WalkOutcome::Abandoned { emitted };
        }
        emitted += 1;
    }
    trace!(emitted, "walk completed");
    WalkOutcome::Completed { emitted }
}

/// Runs a walker on its own thread and gathers the emission sequence.
#[instrument(level = "debug", skip_all)]
pub fn emissions<T>(tree: &Tree<T>) -> Vec<T>
where
    T: Clone + Send + Sync,
{
    let (tx, rx) = rendezvous();
    thread::scope(|s| {
        s.spawn(move |_| walk(tree, tx));
        rx.iter().collect::<Vec<_>>()
    })
    .unwrap_or_else(|e| panic::resume_unwind(e))
}
