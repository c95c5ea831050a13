//! Deterministic randomness for reproducible training
//!
//! A fixed-constant LCG drives bootstrap sampling and per-split
//! feature subsetting, so identical data and seed produce an
//! identical forest on every platform and run.

use std::num::Wrapping;

/// Linear Congruential Generator for deterministic pseudo-randomness
/// Uses constants from Numerical Recipes (glibc)
#[derive(Clone, Debug)]
pub struct LcgRng {
    state: Wrapping<i64>,
}

impl LcgRng {
    const MULTIPLIER: i64 = 1103515245;
    const INCREMENT: i64 = 12345;
    const MODULUS: i64 = 1 << 31;

    pub fn new(seed: i64) -> Self {
        Self {
            state: Wrapping(seed.abs() % Self::MODULUS),
        }
    }

    /// Derive an independent generator for one tree of the forest.
    pub fn for_tree(seed: i64, tree_idx: usize) -> Self {
        Self::new(seed.wrapping_add((tree_idx as i64).wrapping_mul(0x9E37_79B9)))
    }

    /// Generate next random i64 in range [0, MODULUS)
    pub fn next_i64(&mut self) -> i64 {
        self.state = self.state * Wrapping(Self::MULTIPLIER) + Wrapping(Self::INCREMENT);
        (self.state.0 & (Self::MODULUS - 1)).abs()
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: i64) -> i64 {
        if max <= 0 {
            return 0;
        }
        self.next_i64() % max
    }

    /// Draw `n` row indices with replacement from [0, n).
    pub fn bootstrap_indices(&mut self, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.next_range(n as i64) as usize).collect()
    }

    /// Choose `k` distinct feature indices out of `count`.
    ///
    /// Returned sorted so split search visits features in a stable
    /// order.
    pub fn feature_subset(&mut self, count: usize, k: usize) -> Vec<usize> {
        if k >= count {
            return (0..count).collect();
        }

        let mut pool: Vec<usize> = (0..count).collect();
        let mut chosen = Vec::with_capacity(k);
        for _ in 0..k {
            let pick = self.next_range(pool.len() as i64) as usize;
            chosen.push(pool.swap_remove(pick));
        }
        chosen.sort_unstable();
        chosen
    }
}

/// Deterministic tie-breaker for split selection
/// Returns consistent ordering based on (feature_idx, threshold, node_id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SplitTieBreaker {
    pub feature_idx: usize,
    pub threshold: i64,
    pub node_id: usize,
}

impl SplitTieBreaker {
    pub fn new(feature_idx: usize, threshold: i64, node_id: usize) -> Self {
        Self {
            feature_idx,
            threshold,
            node_id,
        }
    }
}
