use log::debug;
use ndarray::{s, ArrayView1};
use crate::analysis::config::TailWindow;
use crate::analysis::regression::linear_fit;
use crate::analysis::AnalysisError;
/// Scalar features of a single pulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureResult {
    pub peak_index: usize,
    pub peak_value: f64,
    pub tail_slope: f64,
}
/// Peak position and the decay slope over the last 500 samples.
pub fn extract_peak_and_tail_slope(
    waveform: ArrayView1<'_, f64>,
) -> Result<FeatureResult, AnalysisError> {
    extract_with_window(waveform, TailWindow::default())
}
/// Same as [`extract_peak_and_tail_slope`] with a caller-chosen tail window.
///
/// The tail is always the trailing `min(window, len)` samples. The peak is not
/// excluded from it, so a late peak takes part in the decay fit.
pub fn extract_with_window(
    waveform: ArrayView1<'_, f64>,
    window: TailWindow,
) -> Result<FeatureResult, AnalysisError> {
    let len = waveform.len();
    if len == 0 {
        return Err(AnalysisError::invalid("waveform is empty"));
    }
    if len < 2 {
        return Err(AnalysisError::invalid(format!(
            "waveform needs at least 2 samples for a tail fit, got {len}"
        )));
    }
    let peak_index = argmax(waveform);
    let peak_value = waveform[peak_index];
    let tail_len = window.effective_len(len);
    let tail = waveform.slice(s![len - tail_len..]);
    let fit = linear_fit(tail)?;
    debug!(
        "tail fit over {tail_len} samples: slope={} intercept={} r={} stderr={}",
        fit.slope, fit.intercept, fit.rvalue, fit.stderr
    );
    Ok(FeatureResult {
        peak_index,
        peak_value,
        tail_slope: fit.slope,
    })
}
/// First index of the maximum. A NaN sample wins outright, first NaN first.
fn argmax(values: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            return i;
        }
        if v > values[best] {
            best = i;
        }
    }
    best
}
