//! Equivalence comparator: two concurrent walkers, one lockstep consumer.
//!
//! Walkers run on scoped threads. The consumer owns both receivers and drops
//! them as soon as it reaches a verdict, so a walker blocked in `send` wakes
//! up disconnected and returns before the scope joins it.

use std::fmt;
use std::panic;

use crossbeam::channel::Receiver;
use crossbeam::thread;
use tracing::{debug, instrument};

use crate::application::walker::{rendezvous, walk, WalkOutcome};
use crate::domain::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Result of comparing two emission sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    /// Both sequences ended together after `len` equal pairs.
    Equivalent { len: usize },
    /// First differing pair, at zero-based `position`.
    ValueMismatch { position: usize, left: T, right: T },
    /// The shorter sequence ended after `position` values while `longer` still had one pending.
    LengthMismatch { position: usize, longer: Side },
}

impl<T> Verdict<T> {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Verdict::Equivalent { .. })
    }
}

impl<T: fmt::Display> fmt::Display for Verdict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Equivalent { len } => write!(f, "equivalent ({len} values)"),
            Verdict::ValueMismatch {
                position,
                left,
                right,
            } => write!(f, "values differ at position {position}: {left} != {right}"),
            Verdict::LengthMismatch { position, longer } => write!(
                f,
                "lengths differ: {} side has more than {position} values",
                longer
            ),
        }
    }
}

/// Verdict plus what each walker ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    pub verdict: Verdict<T>,
    pub left: WalkOutcome,
    pub right: WalkOutcome,
}

/// True iff both trees walk to the same sequence.
pub fn same<T>(a: &Tree<T>, b: &Tree<T>) -> bool
where
    T: PartialEq + Clone + Send + Sync,
{
    compare(a, b).verdict.is_equivalent()
}

/// Walks both trees concurrently and compares their sequences in lockstep.
///
/// Returns only after both walkers have finished. A walker panic is
/// re-raised on the calling thread.
#[instrument(level = "debug", skip_all)]
pub fn compare<T>(a: &Tree<T>, b: &Tree<T>) -> Comparison<T>
where
    T: PartialEq + Clone + Send + Sync,
{
    thread::scope(|s| {
        let (left_tx, left_rx) = rendezvous();
        let (right_tx, right_rx) = rendezvous();

        let left = s.spawn(move |_| walk(a, left_tx));
        let right = s.spawn(move |_| walk(b, right_tx));

        let verdict = lockstep(left_rx, right_rx);

        let left = left.join().unwrap_or_else(|e| panic::resume_unwind(e));
        let right = right.join().unwrap_or_else(|e| panic::resume_unwind(e));
        debug!(?left, ?right, equivalent = verdict.is_equivalent(), "comparison done");

        Comparison {
            verdict,
            left,
            right,
        }
    })
    .unwrap_or_else(|e| panic::resume_unwind(e))
}

// Takes the receivers by value: returning drops them and releases any blocked walker.
fn lockstep<T: PartialEq>(left: Receiver<T>, right: Receiver<T>) -> Verdict<T> {
    let mut position = 0;
    loop {
        match (left.recv().ok(), right.recv().ok()) {
            (None, None) => return Verdict::Equivalent { len: position },
            (Some(_), None) => {
                return Verdict::LengthMismatch {
                    position,
                    longer: Side::Left,
                }
            }
            (None, Some(_)) => {
                return Verdict::LengthMismatch {
                    position,
                    longer: Side::Right,
                }
            }
            (Some(l), Some(r)) if l != r => {
                return Verdict::ValueMismatch {
                    position,
                    left: l,
                    right: r,
                }
            }
            (Some(_), Some(_)) => position += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;

    fn receiver(values: &[i64]) -> Receiver<i64> {
        let (tx, rx) = unbounded();
        for v in values {
            tx.send(*v).unwrap();
        }
        rx
    }

    #[test]
    fn given_equal_streams_when_lockstep_then_equivalent() {
        let verdict = lockstep(receiver(&[1, 2, 3]), receiver(&[1, 2, 3]));
        assert_eq!(verdict, Verdict::Equivalent { len: 3 });
    }

    #[test]
    fn given_two_empty_streams_when_lockstep_then_equivalent_with_zero_len() {
        let verdict = lockstep(receiver(&[]), receiver(&[]));
        assert_eq!(verdict, Verdict::Equivalent { len: 0 });
    }

    #[test]
    fn given_differing_value_when_lockstep_then_reports_first_mismatch() {
        let verdict = lockstep(receiver(&[1, 2, 3, 9]), receiver(&[1, 5, 3, 0]));
        assert_eq!(
            verdict,
            Verdict::ValueMismatch {
                position: 1,
                left: 2,
                right: 5
            }
        );
    }

    #[test]
    fn given_shorter_left_when_lockstep_then_right_is_longer() {
        let verdict = lockstep(receiver(&[1, 2, 3]), receiver(&[1, 2, 3, 4]));
        assert_eq!(
            verdict,
            Verdict::LengthMismatch {
                position: 3,
                longer: Side::Right
            }
        );
    }

    #[test]
    fn given_verdicts_when_displayed_then_describe_difference() {
        let mismatch: Verdict<i64> = Verdict::ValueMismatch {
            position: 0,
            left: 1,
            right: 2,
        };
        assert_eq!(mismatch.to_string(), "values differ at position 0: 1 != 2");

        let length: Verdict<i64> = Verdict::LengthMismatch {
            position: 3,
            longer: Side::Left,
        };
        assert_eq!(length.to_string(), "lengths differ: left side has more than 3 values");
    }
}
