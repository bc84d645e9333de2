use crate::analysis::AnalysisError;
/// Number of trailing samples used for the decay fit unless overridden.
pub const DEFAULT_TAIL_WINDOW: usize = 500;
/// Trailing window used for the tail slope fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TailWindow {
    samples: usize,
}
impl TailWindow {
    /// A regression needs two points, so anything smaller is rejected.
    pub fn new(samples: usize) -> Result<Self, AnalysisError> {
        if samples < 2 {
            return Err(AnalysisError::invalid(format!(
                "tail window must cover at least 2 samples, got {samples}"
            )));
        }
        Ok(Self { samples })
    }
    pub fn samples(&self) -> usize {
        self.samples
    }
    /// Length of the window actually applied to a waveform of `len` samples.
    pub fn effective_len(&self, len: usize) -> usize {
        self.samples.min(len)
    }
}
impl Default for TailWindow {
    fn default() -> Self {
        TailWindow {
            samples: DEFAULT_TAIL_WINDOW,
        }
    }
}
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalysisConfig {
    pub tail_window: TailWindow,
}
impl AnalysisConfig {
    pub fn with_tail_window(samples: usize) -> Result<Self, AnalysisError> {
        Ok(Self {
            tail_window: TailWindow::new(samples)?,
        })
    }
}
