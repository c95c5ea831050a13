use supplycast_core::CoreError;
use thiserror::Error;

/// Errors returned by the forest trainer and pipeline.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// Loading, aggregation, or encoding failed
    #[error("data error: {0}")]
    Data(#[from] CoreError),

    /// No training rows were provided
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Feature and label slices differ in length
    #[error("feature/label length mismatch: {features} features, {labels} labels")]
    LengthMismatch { features: usize, labels: usize },
}
