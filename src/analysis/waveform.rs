use ndarray::{Array1, ArrayView1};
/// One digitized detector pulse, samples in ADC counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Waveform {
    samples: Array1<f64>,
}
impl Waveform {
    pub fn from_vec(samples: Vec<f64>) -> Self {
        Self {
            samples: Array1::from(samples),
        }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }
    /// Finite (min, max) of the samples, ignoring NaN/Inf.
    pub fn finite_bounds(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
impl From<Vec<f64>> for Waveform {
    fn from(samples: Vec<f64>) -> Self {
        Waveform::from_vec(samples)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn view_exposes_samples_in_order() {
        let wf = Waveform::from(vec![-3.0, 0.0, 12.0]);
        assert_eq!(wf.len(), 3);
        assert_eq!(wf.view()[0], -3.0);
        assert_eq!(wf.view()[2], 12.0);
    }
    #[test]
    fn finite_bounds_skip_nan() {
        let wf = Waveform::from_vec(vec![1.0, f64::NAN, -2.0, f64::INFINITY, 4.0]);
        assert_eq!(wf.finite_bounds(), Some((-2.0, 4.0)));
        assert_eq!(Waveform::from_vec(vec![]).finite_bounds(), None);
    }
}
