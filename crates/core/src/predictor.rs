//! Supplier prediction
//!
//! Encodes a (month, category) query, takes the forest vote, and
//! decodes the result. An unseen category is a normal outcome, not an
//! error: the caller gets back the categories the model knows.

use std::fmt;

use crate::encoding::EncodingTable;
use crate::errors::{CoreError, Result};
use crate::forest::ForestModel;

/// Outcome of a supplier prediction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prediction {
    /// The supplier the forest voted for.
    Supplier(String),
    /// The requested category was not in the training vocabulary.
    UnknownCategory {
        requested: String,
        /// Every valid category, in encoded (sorted) order.
        known: Vec<String>,
    },
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Supplier(name) => f.write_str(name),
            Prediction::UnknownCategory { requested, known } => write!(
                f,
                "Unknown category '{}'. Please use one of: {}",
                requested,
                known.join(", ")
            ),
        }
    }
}

/// Predict the supplier for a (month, category) query.
///
/// The month is passed through to the model unvalidated; a value
/// outside 1..=12 routes through the learned thresholds like any
/// other out-of-distribution input.
///
/// A decode failure on the voted supplier code means the model emitted
/// a code the table never produced; that is an invariant violation and
/// surfaces as a fatal [`CoreError::UnknownCode`].
pub fn predict_supplier(
    model: &ForestModel,
    category_table: &EncodingTable,
    supplier_table: &EncodingTable,
    month: u32,
    category: &str,
) -> Result<Prediction> {
    let category_code = match category_table.encode(category) {
        Ok(code) => code,
        Err(CoreError::UnknownValue(_)) => {
            return Ok(Prediction::UnknownCategory {
                requested: category.to_string(),
                known: category_table.classes().to_vec(),
            });
        }
        Err(err) => return Err(err),
    };

    let features = [i64::from(month), category_code];
    let supplier_code = model.predict(&features);
    let supplier = supplier_table.decode(supplier_code)?;

    Ok(Prediction::Supplier(supplier.to_string()))
}
