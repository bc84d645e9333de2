// src/analysis/mod.rs
pub mod config;
pub mod error;
pub mod extract;
pub mod regression;
pub mod waveform;
pub use config::{AnalysisConfig, TailWindow, DEFAULT_TAIL_WINDOW};
pub use error::AnalysisError;
pub use extract::{extract_peak_and_tail_slope, extract_with_window, FeatureResult};
pub use regression::{linear_fit, LinearFit};
pub use waveform::Waveform;
