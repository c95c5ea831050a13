//! End-to-end forecasting pipeline
//!
//! One call takes an order-history CSV to a prediction string:
//! load, aggregate, encode, train, predict.

use std::path::Path;

use supplycast_core::{aggregate, load_orders, predict_supplier, EncodingTable};

use crate::errors::TrainerError;
use crate::trainer::{ForestConfig, ForestTrainer};

/// Train on the order history at `path` and predict the supplier for
/// the given month and category.
///
/// Returns the predicted supplier name, or the valid-category listing
/// when the category was never seen in training. Everything is built
/// fresh per call; nothing is persisted.
pub fn predict_from_csv<P: AsRef<Path>>(
    path: P,
    month: u32,
    category: &str,
    config: ForestConfig,
) -> Result<String, TrainerError> {
    let records = load_orders(path.as_ref())?;
    let labels = aggregate(&records)?;
    tracing::info!(
        "aggregated {} orders into {} month/category groups",
        records.len(),
        labels.len()
    );

    let category_table = EncodingTable::fit(labels.iter().map(|label| label.category.as_str()));
    let supplier_table = EncodingTable::fit(labels.iter().map(|label| label.supplier.as_str()));

    let mut features = Vec::with_capacity(labels.len());
    let mut targets = Vec::with_capacity(labels.len());
    for label in &labels {
        let category_code = category_table.encode(&label.category)?;
        let supplier_code = supplier_table.encode(&label.supplier)?;
        features.push(vec![i64::from(label.month), category_code]);
        targets.push(supplier_code);
    }

    let trainer = ForestTrainer::new(config);
    let model = trainer.train(&features, &targets, supplier_table.len())?;
    tracing::info!("trained forest with {} trees", model.trees.len());

    let prediction = predict_supplier(&model, &category_table, &supplier_table, month, category)?;
    Ok(prediction.to_string())
}
