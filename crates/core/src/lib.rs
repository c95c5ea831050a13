//! Supplycast core - order history aggregation, label encoding, and
//! forest model evaluation for supplier forecasting.
//!
//! The pipeline runs strictly forward: raw order records are reduced
//! to one winning supplier per (month, category) group, the string
//! fields are encoded to dense integer codes, and a trained forest
//! votes a supplier code back for a (month, category) query.

pub mod aggregate;
pub mod encoding;
pub mod errors;
pub mod forest;
pub mod orders;
pub mod predictor;

pub use aggregate::{aggregate, AggregatedLabel};
pub use encoding::EncodingTable;
pub use errors::CoreError;
pub use forest::{ForestModel, Node, Tree};
pub use orders::{load_orders, OrderRecord};
pub use predictor::{predict_supplier, Prediction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
