//! Concurrent binary tree equivalence.
//!
//! Each tree is walked in order on its own thread and streamed through a
//! rendezvous channel; a consumer compares both streams in lockstep and
//! stops at the first difference. Two trees are the same when they walk to
//! the same sequence, whatever their shapes.
//!
//! ```
//! use treesame::{same, Tree};
//!
//! let balanced = Tree::balanced(&[1, 2, 3]);
//! let chain = Tree::from_values([1, 2, 3]);
//! assert!(same(&balanced, &chain));
//! assert!(!same(&chain, &Tree::from_values([1, 2])));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{compare, emissions, same, walk, Comparison, Side, Verdict, WalkOutcome};
pub use domain::{fixture, seeded_rng, InOrder, Node, Tree, TreeSource};
