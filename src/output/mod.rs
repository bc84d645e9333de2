// src/output/mod.rs
pub mod annotation;
pub mod error;
pub mod export;
pub mod plot;
pub use annotation::Annotation;
pub use error::OutputError;
pub use export::{FeatureRecord, ResultsFormat, ResultsWriter};
pub use plot::{render_waveform_png, save_waveform_png, PlotRequest, PlotStyle};
