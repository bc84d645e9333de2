use std::path::PathBuf;
use thiserror::Error;
use crate::types::LabelField;
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset column `{column}`: {source}")]
    Parse {
        column: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset has no `{0}` column")]
    MissingColumn(&'static str),
    #[error("column `{column}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("record {index} out of range (dataset holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("label `{}` is not available in this dataset", .0.key())]
    MissingField(LabelField),
    #[error("no catalog entry at index {index} (catalog holds {len} files)")]
    UnknownCatalogIndex { index: usize, len: usize },
}
