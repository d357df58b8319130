//! Dataset export
//!
//! Turns a solved table into training records, writes them as CSV and reads
//! them back. [`FeatureVector`] fixes the input layout a move predictor
//! trained on the dataset must accept.

mod dataset_csv;
mod features;
mod summary;

pub use dataset_csv::{
    COLUMN_COUNT, DatasetCsvExporter, DatasetRecord, header, load_dataset, read_dataset,
};
pub use features::{FEATURE_COUNT, FeatureVector};
pub use summary::DatasetSummary;
