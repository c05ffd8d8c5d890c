//! Domain layer: trees, tree sources and fixtures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod fixture;
pub mod source;
pub mod tree;

pub use error::DomainError;
pub use fixture::{fixture, seeded_rng, DEFAULT_FIXTURE_SIZE};
pub use source::TreeSource;
pub use tree::{InOrder, Node, Tree, MAX_DISPLAY_DEPTH};
