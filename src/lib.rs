//! Peak and tail-slope extraction for digitized detector pulses, with the
//! dataset, plotting and export glue around it.
pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod output;
pub mod session;
pub mod types;
pub use analysis::{extract_peak_and_tail_slope, extract_with_window, FeatureResult, Waveform};
