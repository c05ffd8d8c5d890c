//! Tree service
//!
//! Turns tree sources into trees using the configured fixture size and seed,
//! and renders walks for output.

use itertools::Itertools;
use rand::rngs::SmallRng;
use tracing::{debug, instrument};

use crate::application::{compare, emissions, Comparison};
use crate::config::Settings;
use crate::domain::{fixture, seeded_rng, Tree, TreeSource};

/// Service for building, walking and comparing trees.
///
/// Holds a single generator, so successive `fixture:K` sources produce
/// differently shaped trees (reproducibly, when a seed is configured).
pub struct TreeService {
    settings: Settings,
    rng: SmallRng,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(settings: Settings) -> Self {
        let rng = seeded_rng(settings.seed);
        Self { settings, rng }
    }

    /// Build the tree described by `source`.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self, source: &TreeSource) -> Tree<i64> {
        let tree = match source {
            TreeSource::Empty => Tree::new(),
            TreeSource::Fixture(k) => fixture(*k, self.settings.fixture_size, &mut self.rng),
            TreeSource::Values(values) => Tree::from_values(values.iter().copied()),
        };
        debug!(len = tree.len(), depth = tree.depth(), "built tree");
        tree
    }

    /// Walk `tree` on a separate thread and join the values with the configured separator.
    pub fn render_walk(&self, tree: &Tree<i64>) -> String {
        emissions(tree).iter().join(&self.settings.separator)
    }

    /// Build both sources and compare them.
    pub fn compare_sources(&mut self, left: &TreeSource, right: &TreeSource) -> Comparison<i64> {
        let left = self.build(left);
        let right = self.build(right);
        compare(&left, &right)
    }
}
