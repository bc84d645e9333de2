use std::fmt;
use crate::analysis::FeatureResult;
use crate::dataset::RecordLabels;
use crate::types::LabelField;
/// Text block shown next to a plotted pulse.
pub struct Annotation<'a> {
    features: &'a FeatureResult,
    labels: &'a RecordLabels,
}
impl<'a> Annotation<'a> {
    pub fn new(features: &'a FeatureResult, labels: &'a RecordLabels) -> Self {
        Self { features, labels }
    }
}
impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Peak Index: {}", self.features.peak_index)?;
        write!(f, "\nPeak Value: {}", self.features.peak_value)?;
        write!(f, "\nTail Slope: {}", self.features.tail_slope)?;
        for field in LabelField::ALL {
            write!(f, "\n{}: {}", field.caption(), self.labels.value(field))?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabelValue;
    #[test]
    fn lines_follow_fixed_order() {
        let features = FeatureResult {
            peak_index: 1000,
            peak_value: 1000.0,
            tail_slope: -0.5,
        };
        let labels = RecordLabels {
            energy_label: LabelValue::Float(1592.5),
            psd_label_low_avse: LabelValue::Int(1),
            psd_label_high_avse: LabelValue::Int(0),
            psd_label_dcr: LabelValue::Int(1),
            psd_label_lq: LabelValue::Int(1),
            tp0: LabelValue::Float(980.25),
            detector: LabelValue::Int(692),
            run_number: LabelValue::Int(11510),
            id: LabelValue::Int(17),
        };
        let text = Annotation::new(&features, &labels).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Peak Index: 1000",
                "Peak Value: 1000",
                "Tail Slope: -0.5",
                "Energy Label: 1592.5",
                "PSD Label Low Avse: 1",
                "PSD Label High Avse: 0",
                "PSD Label DCR: 1",
                "PSD Label LQ: 1",
                "Start of Rising Edge: 980.25",
                "Detector: 692",
                "Run Number: 11510",
                "ID: 17",
            ]
        );
    }
}
