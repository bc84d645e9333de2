// src/dataset/mod.rs
pub mod catalog;
pub mod error;
pub mod json;
pub mod repository;
pub mod selector;
pub use error::DatasetError;
pub use json::{load_json_dataset, parse_json_dataset};
pub use repository::{MemoryRepository, RecordLabels, RecordRepository};
pub use selector::{FixedSelector, IndexSelector, RandomSelector};
