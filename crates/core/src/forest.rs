//! Integer-only random forest evaluator
//!
//! Deterministic, reproducible evaluation of bagged classification
//! trees using only integer arithmetic. Each tree votes a class code
//! and the forest returns the majority.

use serde::{Deserialize, Serialize};

/// A decision tree node (internal or leaf)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Feature index to compare (for internal nodes)
    pub feature_index: u16,
    /// Threshold value for comparison
    pub threshold: i64,
    /// Index of left child node
    pub left: u16,
    /// Index of right child node
    pub right: u16,
    /// Leaf class code (None for internal nodes, Some for leaves)
    pub value: Option<i32>,
}

/// A single classification tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tree {
    /// Nodes in depth-first order
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Evaluate the tree on a feature vector, returning the class
    /// code of the reached leaf.
    pub fn eval(&self, features: &[i64]) -> i32 {
        let mut idx = 0usize;

        loop {
            if idx >= self.nodes.len() {
                // Safety: invalid tree structure
                return 0;
            }

            let node = &self.nodes[idx];

            if let Some(value) = node.value {
                return value;
            }

            let feature_idx = node.feature_index as usize;
            if feature_idx >= features.len() {
                // Safety: feature index out of bounds
                return 0;
            }

            idx = if features[feature_idx] <= node.threshold {
                node.left as usize
            } else {
                node.right as usize
            };
        }
    }
}

/// A trained forest of classification trees.
///
/// Read-only after training; safe to share between prediction
/// callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForestModel {
    /// Collection of trees
    pub trees: Vec<Tree>,
    /// Number of distinct class codes the forest can emit
    pub class_count: usize,
}

impl ForestModel {
    /// Predict a class code by majority vote across all trees.
    ///
    /// A vote tie resolves to the smallest class code so the
    /// prediction stays deterministic.
    pub fn predict(&self, features: &[i64]) -> i64 {
        let mut votes = vec![0u32; self.class_count.max(1)];

        for tree in &self.trees {
            let class = tree.eval(features);
            if let Ok(idx) = usize::try_from(class) {
                if idx < votes.len() {
                    votes[idx] += 1;
                }
            }
        }

        let mut winner = 0usize;
        for (idx, &count) in votes.iter().enumerate() {
            if count > votes[winner] {
                winner = idx;
            }
        }

        winner as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(class: i32) -> Node {
        Node {
            feature_index: 0,
            threshold: 0,
            left: 0,
            right: 0,
            value: Some(class),
        }
    }

    fn create_simple_tree() -> Tree {
        Tree {
            nodes: vec![
                // Root: if feature[0] <= 50 go left, else right
                Node {
                    feature_index: 0,
                    threshold: 50,
                    left: 1,
                    right: 2,
                    value: None,
                },
                leaf(0),
                leaf(1),
            ],
        }
    }

    #[test]
    fn test_eval_left_branch() {
        let tree = create_simple_tree();
        assert_eq!(tree.eval(&[30]), 0);
    }

    #[test]
    fn test_eval_right_branch() {
        let tree = create_simple_tree();
        assert_eq!(tree.eval(&[60]), 1);
    }

    #[test]
    fn test_eval_threshold_boundary() {
        let tree = create_simple_tree();
        assert_eq!(tree.eval(&[50]), 0); // <= 50 goes left
    }

    #[test]
    fn test_eval_invalid_feature_index() {
        let tree = create_simple_tree();
        assert_eq!(tree.eval(&[]), 0); // Returns 0 for safety
    }

    #[test]
    fn test_majority_vote() {
        let model = ForestModel {
            trees: vec![
                Tree { nodes: vec![leaf(1)] },
                Tree { nodes: vec![leaf(1)] },
                Tree { nodes: vec![leaf(0)] },
            ],
            class_count: 2,
        };

        assert_eq!(model.predict(&[0]), 1);
    }

    #[test]
    fn test_vote_tie_goes_to_smallest_code() {
        let model = ForestModel {
            trees: vec![
                Tree { nodes: vec![leaf(2)] },
                Tree { nodes: vec![leaf(1)] },
            ],
            class_count: 3,
        };

        assert_eq!(model.predict(&[0]), 1);
    }

    #[test]
    fn test_votes_follow_features() {
        let model = ForestModel {
            trees: vec![create_simple_tree(), create_simple_tree()],
            class_count: 2,
        };

        assert_eq!(model.predict(&[30]), 0);
        assert_eq!(model.predict(&[60]), 1);
    }
}
