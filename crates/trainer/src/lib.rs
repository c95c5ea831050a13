//! Supplycast trainer - deterministic random-forest training and the
//! end-to-end supplier forecasting pipeline.
//!
//! Training is reproducible by construction: bootstrap sampling and
//! feature subsetting run off a fixed-constant LCG, splits score in
//! integer arithmetic, and every tie has a defined winner.

pub mod cart;
pub mod deterministic;
pub mod errors;
pub mod pipeline;
pub mod trainer;

pub use cart::{CartBuilder, TreeConfig};
pub use deterministic::{LcgRng, SplitTieBreaker};
pub use errors::TrainerError;
pub use pipeline::predict_from_csv;
pub use trainer::{ForestConfig, ForestTrainer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
