//! Categorical string encoding
//!
//! Maps category and supplier names to dense integer codes for the
//! tree model, keeping the reverse mapping so predictions can be
//! decoded back to names.

use std::collections::BTreeSet;

use crate::errors::{CoreError, Result};

/// Bidirectional mapping between strings and dense integer codes.
///
/// The vocabulary is fixed at construction. Codes are assigned in
/// sorted order, so the mapping is deterministic for a given value
/// set, and encoding is injective over the vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingTable {
    classes: Vec<String>,
}

impl EncodingTable {
    /// Build a table over the given values, deduplicated and sorted.
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        Self {
            classes: unique.into_iter().collect(),
        }
    }

    /// Encode a value into its integer code.
    pub fn encode(&self, value: &str) -> Result<i64> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .map(|idx| idx as i64)
            .map_err(|_| CoreError::UnknownValue(value.to_string()))
    }

    /// Decode a code back into its string value.
    pub fn decode(&self, code: i64) -> Result<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| self.classes.get(idx))
            .map(String::as_str)
            .ok_or(CoreError::UnknownCode(code))
    }

    /// Vocabulary in encoded order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of distinct values in the vocabulary.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
