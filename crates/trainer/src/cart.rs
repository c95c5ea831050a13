//! Classification tree construction
//!
//! Implements deterministic exact-greedy decision tree building with
//! gini-derived split scoring in fixed-point integer arithmetic.

use std::collections::BTreeSet;

use supplycast_core::forest::{Node, Tree};

use crate::deterministic::{LcgRng, SplitTieBreaker};

/// Fixed-point scale for purity scores.
const PURITY_SCALE: i64 = 1_000_000;

/// Training parameters for a single tree
#[derive(Clone, Debug)]
pub struct TreeConfig {
    pub max_depth: usize,
    pub min_samples_leaf: usize,
    /// Features considered per split; 0 means all features.
    pub features_per_split: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            min_samples_leaf: 1,
            features_per_split: 0,
        }
    }
}

/// Split candidate with score and tie-breaker
#[derive(Debug, Clone)]
struct SplitCandidate {
    feature_idx: usize,
    threshold: i64,
    score: i64,
    tie_breaker: SplitTieBreaker,
}

/// Builds one classification tree over integer features.
pub struct CartBuilder<'a> {
    config: TreeConfig,
    features: &'a [Vec<i64>],
    labels: &'a [i64],
    class_count: usize,
    feature_count: usize,
    rng: LcgRng,
}

impl<'a> CartBuilder<'a> {
    pub fn new(
        features: &'a [Vec<i64>],
        labels: &'a [i64],
        class_count: usize,
        config: TreeConfig,
        rng: LcgRng,
    ) -> Self {
        assert_eq!(features.len(), labels.len());

        let feature_count = features.first().map(|row| row.len()).unwrap_or(0);

        Self {
            config,
            features,
            labels,
            class_count,
            feature_count,
            rng,
        }
    }

    /// Build a tree over the given sample of row indices.
    pub fn build(&mut self, indices: &[usize]) -> Tree {
        let mut nodes = Vec::new();
        self.build_node(indices, 0, &mut nodes, 0);
        Tree { nodes }
    }

    /// Recursively build tree nodes
    fn build_node(
        &mut self,
        indices: &[usize],
        depth: usize,
        nodes: &mut Vec<Node>,
        node_id: usize,
    ) -> u16 {
        let current_idx = nodes.len() as u16;

        let counts = self.class_counts(indices);
        let leaf_class = majority_class(&counts);
        let is_pure = counts.iter().filter(|&&count| count > 0).count() <= 1;

        // Check stopping conditions
        if is_pure
            || depth >= self.config.max_depth
            || indices.len() < 2 * self.config.min_samples_leaf
        {
            nodes.push(leaf(leaf_class));
            return current_idx;
        }

        let split = match self.find_best_split(indices, node_id) {
            Some(s) => s,
            None => {
                // No valid split, create leaf
                nodes.push(leaf(leaf_class));
                return current_idx;
            }
        };

        let (left_indices, right_indices) =
            self.split_samples(indices, split.feature_idx, split.threshold);

        if left_indices.len() < self.config.min_samples_leaf
            || right_indices.len() < self.config.min_samples_leaf
        {
            // Split would violate min_samples_leaf, create leaf
            nodes.push(leaf(leaf_class));
            return current_idx;
        }

        // Reserve space for current node
        nodes.push(Node {
            feature_index: split.feature_idx as u16,
            threshold: split.threshold,
            left: 0,
            right: 0,
            value: None,
        });

        let left_idx = self.build_node(&left_indices, depth + 1, nodes, node_id * 2 + 1);
        let right_idx = self.build_node(&right_indices, depth + 1, nodes, node_id * 2 + 2);

        // Update current node with child indices
        nodes[current_idx as usize].left = left_idx;
        nodes[current_idx as usize].right = right_idx;

        current_idx
    }

    /// Find best split over a random feature subset using exact-greedy
    /// search with deterministic tie-breaking.
    ///
    /// When the sampled subset offers no usable threshold, the search
    /// falls back to all features before giving up on the node.
    fn find_best_split(&mut self, indices: &[usize], node_id: usize) -> Option<SplitCandidate> {
        let candidate_features = if self.config.features_per_split == 0 {
            (0..self.feature_count).collect::<Vec<_>>()
        } else {
            self.rng
                .feature_subset(self.feature_count, self.config.features_per_split)
        };

        let subset_size = candidate_features.len();
        let best = self.best_split_over(&candidate_features, indices, node_id);

        if best.is_none() && subset_size < self.feature_count {
            let all: Vec<usize> = (0..self.feature_count).collect();
            return self.best_split_over(&all, indices, node_id);
        }

        best
    }

    fn best_split_over(
        &self,
        candidate_features: &[usize],
        indices: &[usize],
        node_id: usize,
    ) -> Option<SplitCandidate> {
        let parent_score = purity_score(&self.class_counts(indices), indices.len());
        let mut best_split: Option<SplitCandidate> = None;

        for &feature_idx in candidate_features {
            for threshold in self.candidate_thresholds(indices, feature_idx) {
                let (left, right) = self.split_samples(indices, feature_idx, threshold);

                if left.len() < self.config.min_samples_leaf
                    || right.len() < self.config.min_samples_leaf
                {
                    continue;
                }

                let score = purity_score(&self.class_counts(&left), left.len())
                    .saturating_add(purity_score(&self.class_counts(&right), right.len()))
                    .saturating_sub(parent_score);

                let candidate = SplitCandidate {
                    feature_idx,
                    threshold,
                    score,
                    tie_breaker: SplitTieBreaker::new(feature_idx, threshold, node_id),
                };

                let better = match &best_split {
                    None => true,
                    Some(current) => {
                        candidate.score > current.score
                            || (candidate.score == current.score
                                && candidate.tie_breaker < current.tie_breaker)
                    }
                };

                if better {
                    best_split = Some(candidate);
                }
            }
        }

        best_split
    }

    /// Candidate thresholds: sorted unique feature values in the node.
    fn candidate_thresholds(&self, indices: &[usize], feature_idx: usize) -> Vec<i64> {
        let values: BTreeSet<i64> = indices
            .iter()
            .map(|&idx| self.features[idx][feature_idx])
            .collect();

        let mut thresholds: Vec<i64> = values.into_iter().collect();
        // Splitting at the maximum sends every row left; drop it.
        thresholds.pop();
        thresholds
    }

    /// Split samples based on threshold
    fn split_samples(
        &self,
        indices: &[usize],
        feature_idx: usize,
        threshold: i64,
    ) -> (Vec<usize>, Vec<usize>) {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for &idx in indices {
            if self.features[idx][feature_idx] <= threshold {
                left.push(idx);
            } else {
                right.push(idx);
            }
        }

        (left, right)
    }

    /// Count class occurrences for a set of samples
    fn class_counts(&self, indices: &[usize]) -> Vec<u64> {
        let mut counts = vec![0u64; self.class_count];

        for &idx in indices {
            if let Ok(class) = usize::try_from(self.labels[idx]) {
                if class < counts.len() {
                    counts[class] += 1;
                }
            }
        }

        counts
    }
}

fn leaf(class: i32) -> Node {
    Node {
        feature_index: 0,
        threshold: 0,
        left: 0,
        right: 0,
        value: Some(class),
    }
}

/// Majority class; count ties go to the smallest class code.
fn majority_class(counts: &[u64]) -> i32 {
    let mut winner = 0usize;
    for (idx, &count) in counts.iter().enumerate() {
        if count > counts[winner] {
            winner = idx;
        }
    }
    winner as i32
}

/// Gini-derived purity score: sum of squared class counts over the
/// node size, in fixed-point. Higher means purer children.
fn purity_score(counts: &[u64], total: usize) -> i64 {
    if total == 0 {
        return 0;
    }

    // Use i128 to avoid overflow
    let squared_sum: i128 = counts
        .iter()
        .map(|&count| count as i128 * count as i128)
        .sum();

    ((squared_sum * PURITY_SCALE as i128) / total as i128) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tree(features: &[Vec<i64>], labels: &[i64], class_count: usize) -> Tree {
        let config = TreeConfig {
            max_depth: 4,
            min_samples_leaf: 1,
            features_per_split: 0,
        };
        let indices: Vec<usize> = (0..features.len()).collect();
        let mut builder =
            CartBuilder::new(features, labels, class_count, config, LcgRng::new(42));
        builder.build(&indices)
    }

    #[test]
    fn test_separable_classes_are_learned() {
        let features = vec![vec![1, 0], vec![2, 0], vec![7, 1], vec![8, 1]];
        let labels = vec![0, 0, 1, 1];

        let tree = build_tree(&features, &labels, 2);

        assert_eq!(tree.eval(&[1, 0]), 0);
        assert_eq!(tree.eval(&[8, 1]), 1);
    }

    #[test]
    fn test_pure_node_is_single_leaf() {
        let features = vec![vec![1, 0], vec![2, 1], vec![3, 0]];
        let labels = vec![1, 1, 1];

        let tree = build_tree(&features, &labels, 2);

        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].value, Some(1));
    }

    #[test]
    fn test_identical_rows_cannot_split() {
        let features = vec![vec![5, 5], vec![5, 5]];
        let labels = vec![0, 1];

        let tree = build_tree(&features, &labels, 2);

        // Mixed labels but no usable threshold; majority tie goes to
        // the smaller class code.
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].value, Some(0));
    }

    #[test]
    fn test_build_determinism() {
        let features = vec![vec![1, 0], vec![2, 1], vec![7, 0], vec![8, 1]];
        let labels = vec![0, 1, 0, 1];
        let indices: Vec<usize> = (0..features.len()).collect();
        let config = TreeConfig {
            max_depth: 4,
            min_samples_leaf: 1,
            features_per_split: 1,
        };

        let mut builder1 =
            CartBuilder::new(&features, &labels, 2, config.clone(), LcgRng::new(42));
        let mut builder2 = CartBuilder::new(&features, &labels, 2, config, LcgRng::new(42));

        assert_eq!(builder1.build(&indices), builder2.build(&indices));
    }

    #[test]
    fn test_purity_score_prefers_pure_partitions() {
        // Pure split of 4 samples scores higher than a mixed one.
        let pure = purity_score(&[2, 0], 2) + purity_score(&[0, 2], 2);
        let mixed = purity_score(&[1, 1], 2) + purity_score(&[1, 1], 2);
        assert!(pure > mixed);
    }
}
