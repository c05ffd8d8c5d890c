//! Application layer: walking, comparing and the tree service
//!
//! This layer orchestrates domain logic and runs the walker threads.

pub mod comparator;
pub mod error;
pub mod error_ext;
pub mod services;
pub mod walker;

pub use comparator::{compare, same, Comparison, Side, Verdict};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use walker::{emissions, rendezvous, walk, WalkOutcome};
