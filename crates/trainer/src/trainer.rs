//! Random forest trainer
//!
//! Trains a deterministic bagged forest of classification trees: each
//! tree sees a bootstrap sample of the rows and a random feature
//! subset at every split, all driven by a seeded LCG.

use supplycast_core::forest::ForestModel;

use crate::cart::{CartBuilder, TreeConfig};
use crate::deterministic::LcgRng;
use crate::errors::TrainerError;

/// Forest training configuration
#[derive(Clone, Debug)]
pub struct ForestConfig {
    pub num_trees: usize,
    pub max_depth: usize,
    pub min_samples_leaf: usize,
    pub seed: i64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            num_trees: 100,
            max_depth: 8,
            min_samples_leaf: 1,
            seed: 42,
        }
    }
}

/// Forest trainer
pub struct ForestTrainer {
    config: ForestConfig,
}

impl ForestTrainer {
    pub fn new(config: ForestConfig) -> Self {
        Self { config }
    }

    /// Train a forest on parallel feature/label slices.
    ///
    /// `labels` must hold codes in `[0, class_count)`. A training set
    /// with a single distinct class trains normally: every leaf votes
    /// that class.
    pub fn train(
        &self,
        features: &[Vec<i64>],
        labels: &[i64],
        class_count: usize,
    ) -> Result<ForestModel, TrainerError> {
        if features.is_empty() {
            return Err(TrainerError::EmptyTrainingSet);
        }
        if features.len() != labels.len() {
            return Err(TrainerError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }

        let feature_count = features[0].len();
        let features_per_split = floor_sqrt(feature_count).max(1);

        let mut trees = Vec::with_capacity(self.config.num_trees);

        for tree_idx in 0..self.config.num_trees {
            tracing::debug!("training tree {}/{}", tree_idx + 1, self.config.num_trees);

            let mut rng = LcgRng::for_tree(self.config.seed, tree_idx);
            let sample = rng.bootstrap_indices(features.len());

            let tree_config = TreeConfig {
                max_depth: self.config.max_depth,
                min_samples_leaf: self.config.min_samples_leaf,
                features_per_split,
            };

            let mut builder = CartBuilder::new(features, labels, class_count, tree_config, rng);
            trees.push(builder.build(&sample));
        }

        Ok(ForestModel { trees, class_count })
    }
}

/// Integer floor(sqrt(n)), the usual per-split feature budget.
fn floor_sqrt(n: usize) -> usize {
    let mut k = 0usize;
    while (k + 1) * (k + 1) <= n {
        k += 1;
    }
    k
}
