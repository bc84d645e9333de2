use std::collections::BTreeMap;
use crate::analysis::Waveform;
use crate::dataset::DatasetError;
use crate::types::{LabelField, LabelValue};
/// Record-indexed access to waveforms and their sibling label columns.
pub trait RecordRepository {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn waveform(&self, index: usize) -> Result<Waveform, DatasetError>;
    fn get(&self, field: LabelField, index: usize) -> Result<LabelValue, DatasetError>;
}
/// Columnar in-memory store; every label column runs parallel to the waveforms.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    waveforms: Vec<Waveform>,
    labels: BTreeMap<LabelField, Vec<LabelValue>>,
}
impl MemoryRepository {
    pub fn new(
        waveforms: Vec<Waveform>,
        labels: BTreeMap<LabelField, Vec<LabelValue>>,
    ) -> Result<Self, DatasetError> {
        for (field, column) in &labels {
            if column.len() != waveforms.len() {
                return Err(DatasetError::LengthMismatch {
                    column: field.key(),
                    expected: waveforms.len(),
                    actual: column.len(),
                });
            }
        }
        Ok(Self { waveforms, labels })
    }
    fn check_index(&self, index: usize) -> Result<(), DatasetError> {
        if index >= self.waveforms.len() {
            return Err(DatasetError::IndexOutOfRange {
                index,
                len: self.waveforms.len(),
            });
        }
        Ok(())
    }
}
impl RecordRepository for MemoryRepository {
    fn len(&self) -> usize {
        self.waveforms.len()
    }
    fn waveform(&self, index: usize) -> Result<Waveform, DatasetError> {
        self.check_index(index)?;
        Ok(self.waveforms[index].clone())
    }
    fn get(&self, field: LabelField, index: usize) -> Result<LabelValue, DatasetError> {
        self.check_index(index)?;
        let column = self
            .labels
            .get(&field)
            .ok_or(DatasetError::MissingField(field))?;
        Ok(column[index])
    }
}
/// All labels attached to one record.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordLabels {
    pub energy_label: LabelValue,
    pub psd_label_low_avse: LabelValue,
    pub psd_label_high_avse: LabelValue,
    pub psd_label_dcr: LabelValue,
    pub psd_label_lq: LabelValue,
    pub tp0: LabelValue,
    pub detector: LabelValue,
    pub run_number: LabelValue,
    pub id: LabelValue,
}
impl RecordLabels {
    pub fn collect<R: RecordRepository + ?Sized>(
        repo: &R,
        index: usize,
    ) -> Result<Self, DatasetError> {
        Ok(Self {
            energy_label: repo.get(LabelField::Energy, index)?,
            psd_label_low_avse: repo.get(LabelField::PsdLowAvse, index)?,
            psd_label_high_avse: repo.get(LabelField::PsdHighAvse, index)?,
            psd_label_dcr: repo.get(LabelField::PsdDcr, index)?,
            psd_label_lq: repo.get(LabelField::PsdLq, index)?,
            tp0: repo.get(LabelField::Tp0, index)?,
            detector: repo.get(LabelField::Detector, index)?,
            run_number: repo.get(LabelField::RunNumber, index)?,
            id: repo.get(LabelField::Id, index)?,
        })
    }
    pub fn value(&self, field: LabelField) -> LabelValue {
        match field {
            LabelField::Energy => self.energy_label,
            LabelField::PsdLowAvse => self.psd_label_low_avse,
            LabelField::PsdHighAvse => self.psd_label_high_avse,
            LabelField::PsdDcr => self.psd_label_dcr,
            LabelField::PsdLq => self.psd_label_lq,
            LabelField::Tp0 => self.tp0,
            LabelField::Detector => self.detector,
            LabelField::RunNumber => self.run_number,
            LabelField::Id => self.id,
        }
    }
}
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    /// Small fully-labelled repository shared by tests across the crate.
    pub(crate) fn sample_repository(records: usize) -> MemoryRepository {
        let waveforms = (0..records)
            .map(|r| {
                let samples: Vec<f64> = (0..800)
                    .map(|i| {
                        if i < 100 {
                            10.0 * i as f64
                        } else {
                            1000.0 + r as f64 - 0.5 * (i - 100) as f64
                        }
                    })
                    .collect();
                Waveform::from_vec(samples)
            })
            .collect();
        let mut labels = BTreeMap::new();
        for field in LabelField::ALL {
            let column = (0..records)
                .map(|r| match field {
                    LabelField::Energy => LabelValue::Float(1500.0 + r as f64),
                    LabelField::Tp0 => LabelValue::Float(95.0),
                    LabelField::Detector => LabelValue::Int(692),
                    LabelField::RunNumber => LabelValue::Int(11510),
                    LabelField::Id => LabelValue::Int(r as i64),
                    _ => LabelValue::Int((r % 2) as i64),
                })
                .collect();
            labels.insert(field, column);
        }
        MemoryRepository::new(waveforms, labels).unwrap()
    }
    #[test]
    fn get_reads_parallel_columns() {
        let repo = sample_repository(3);
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.get(LabelField::Id, 2).unwrap(), LabelValue::Int(2));
        assert_eq!(
            repo.get(LabelField::Energy, 1).unwrap(),
            LabelValue::Float(1501.0)
        );
        assert_eq!(repo.waveform(0).unwrap().len(), 800);
    }
    #[test]
    fn out_of_range_and_missing_field() {
        let repo = sample_repository(2);
        assert!(matches!(
            repo.waveform(2),
            Err(DatasetError::IndexOutOfRange { index: 2, len: 2 })
        ));
        let bare = MemoryRepository::new(vec![Waveform::from_vec(vec![1.0, 2.0])], BTreeMap::new())
            .unwrap();
        assert!(matches!(
            bare.get(LabelField::Tp0, 0),
            Err(DatasetError::MissingField(LabelField::Tp0))
        ));
    }
    #[test]
    fn column_length_is_checked() {
        let mut labels = BTreeMap::new();
        labels.insert(LabelField::Id, vec![LabelValue::Int(1)]);
        let err = MemoryRepository::new(
            vec![
                Waveform::from_vec(vec![0.0, 1.0]),
                Waveform::from_vec(vec![0.0, 1.0]),
            ],
            labels,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                column: "id",
                expected: 2,
                actual: 1
            }
        ));
    }
    #[test]
    fn record_labels_collects_every_field() {
        let repo = sample_repository(4);
        let labels = RecordLabels::collect(&repo, 3).unwrap();
        assert_eq!(labels.id, LabelValue::Int(3));
        assert_eq!(labels.detector, LabelValue::Int(692));
        for field in LabelField::ALL {
            assert_eq!(labels.value(field), repo.get(field, 3).unwrap());
        }
    }
}
