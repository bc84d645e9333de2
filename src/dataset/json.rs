use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::analysis::Waveform;
use crate::dataset::{DatasetError, MemoryRepository, RecordRepository};
use crate::types::{LabelField, LabelValue};
/// Column holding one waveform (array of samples) per record.
pub const WAVEFORM_COLUMN: &str = "raw_waveform";
/// Loads a columnar JSON dataset: an object whose keys are column names
/// (`raw_waveform`, `energy_label`, `tp0`, ...) and whose values are arrays
/// indexed by record.
pub fn load_json_dataset(path: impl AsRef<Path>) -> Result<MemoryRepository, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let repo = parse_json_dataset(&text)?;
    info!("loaded {} records from {}", repo.len(), path.display());
    Ok(repo)
}
pub fn parse_json_dataset(text: &str) -> Result<MemoryRepository, DatasetError> {
    let mut document: Map<String, Value> =
        serde_json::from_str(text).map_err(|source| DatasetError::Parse {
            column: "<document>".into(),
            source,
        })?;
    let raw = document
        .remove(WAVEFORM_COLUMN)
        .ok_or(DatasetError::MissingColumn(WAVEFORM_COLUMN))?;
    let waveforms: Vec<Vec<f64>> = column(WAVEFORM_COLUMN, raw)?;
    let waveforms: Vec<Waveform> = waveforms.into_iter().map(Waveform::from_vec).collect();
    let mut labels = BTreeMap::new();
    for field in LabelField::ALL {
        match document.remove(field.key()) {
            Some(value) => {
                let values: Vec<LabelValue> = column(field.key(), value)?;
                labels.insert(field, values);
            }
            None => debug!("dataset has no `{}` column", field.key()),
        }
    }
    for extra in document.keys() {
        debug!("ignoring unrecognised column `{extra}`");
    }
    MemoryRepository::new(waveforms, labels)
}
fn column<T: DeserializeOwned>(name: &str, value: Value) -> Result<T, DatasetError> {
    serde_json::from_value(value).map_err(|source| DatasetError::Parse {
        column: name.to_string(),
        source,
    })
}
#[cfg(test)]
mod tests {
    use super::*;
    const DOC: &str = r#"{
        "raw_waveform": [[0, 5, 9, 7, 6], [1, 2, 3, 4, 5]],
        "energy_label": [1592.3, 2614.5],
        "psd_label_low_avse": [1, 0],
        "psd_label_high_avse": [1, 1],
        "psd_label_dcr": [0, 1],
        "psd_label_lq": [1, 1],
        "tp0": [1.5, 0.0],
        "detector": [692, 693],
        "run_number": [11510, 11511],
        "id": [40, 41],
        "comment": "calibration subset"
    }"#;
    #[test]
    fn parses_columns_by_name() {
        let repo = parse_json_dataset(DOC).unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.waveform(0).unwrap().view()[2], 9.0);
        assert_eq!(
            repo.get(LabelField::Energy, 1).unwrap(),
            LabelValue::Float(2614.5)
        );
        assert_eq!(repo.get(LabelField::Id, 0).unwrap(), LabelValue::Int(40));
    }
    #[test]
    fn missing_waveform_column_is_an_error() {
        let err = parse_json_dataset(r#"{"energy_label": [1.0]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("raw_waveform")));
    }
    #[test]
    fn missing_label_column_fails_on_access() {
        let repo = parse_json_dataset(r#"{"raw_waveform": [[1, 2]]}"#).unwrap();
        assert!(matches!(
            repo.get(LabelField::Detector, 0),
            Err(DatasetError::MissingField(LabelField::Detector))
        ));
    }
    #[test]
    fn malformed_column_names_the_column() {
        let err = parse_json_dataset(r#"{"raw_waveform": [[1, 2]], "tp0": ["late"]}"#)
            .unwrap_err();
        match err {
            DatasetError::Parse { column, .. } => assert_eq!(column, "tp0"),
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn mismatched_column_length_is_rejected() {
        let err = parse_json_dataset(r#"{"raw_waveform": [[1, 2]], "id": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::LengthMismatch { column: "id", .. }));
    }
    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("pulsescope_no_such_dataset.json");
        let err = load_json_dataset(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
