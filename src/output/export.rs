use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use clap::ValueEnum;
use log::info;
use serde::Serialize;
use crate::analysis::FeatureResult;
use crate::dataset::RecordLabels;
use crate::output::OutputError;
use crate::types::LabelValue;
/// One analysed record, flattened for export.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub file: String,
    pub sample_index: usize,
    pub energy_label: LabelValue,
    pub psd_label_low_avse: LabelValue,
    pub psd_label_high_avse: LabelValue,
    pub psd_label_dcr: LabelValue,
    pub psd_label_lq: LabelValue,
    pub tp0: LabelValue,
    pub detector: LabelValue,
    pub run_number: LabelValue,
    pub id: LabelValue,
    pub peak_index: usize,
    pub peak_value: f64,
    pub tail_slope: f64,
}
const CSV_HEADER: &str = "file,sample_index,energy_label,psd_label_low_avse,psd_label_high_avse,psd_label_dcr,psd_label_lq,tp0,detector,run_number,id,peak_index,peak_value,tail_slope";
impl FeatureRecord {
    pub fn new(
        file: impl Into<String>,
        sample_index: usize,
        labels: &RecordLabels,
        features: &FeatureResult,
    ) -> Self {
        Self {
            file: file.into(),
            sample_index,
            energy_label: labels.energy_label,
            psd_label_low_avse: labels.psd_label_low_avse,
            psd_label_high_avse: labels.psd_label_high_avse,
            psd_label_dcr: labels.psd_label_dcr,
            psd_label_lq: labels.psd_label_lq,
            tp0: labels.tp0,
            detector: labels.detector,
            run_number: labels.run_number,
            id: labels.id,
            peak_index: features.peak_index,
            peak_value: features.peak_value,
            tail_slope: features.tail_slope,
        }
    }
    fn write_csv_row<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            csv_field(&self.file),
            self.sample_index,
            self.energy_label,
            self.psd_label_low_avse,
            self.psd_label_high_avse,
            self.psd_label_dcr,
            self.psd_label_lq,
            self.tp0,
            self.detector,
            self.run_number,
            self.id,
            self.peak_index,
            self.peak_value,
            self.tail_slope,
        )
    }
}
/// Quote a text field when it would break the row.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResultsFormat {
    Json,
    Csv,
}
impl ResultsFormat {
    /// `.csv` selects CSV, anything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ResultsFormat::Csv,
            _ => ResultsFormat::Json,
        }
    }
}
/// Serializes analysed records in the order they were produced.
pub struct ResultsWriter {
    format: ResultsFormat,
}
impl ResultsWriter {
    pub fn new(format: ResultsFormat) -> Self {
        Self { format }
    }
    pub fn write<W: Write>(&self, records: &[FeatureRecord], mut w: W) -> Result<(), OutputError> {
        match self.format {
            ResultsFormat::Json => {
                serde_json::to_writer_pretty(&mut w, records)?;
                writeln!(w)?;
            }
            ResultsFormat::Csv => {
                writeln!(w, "{CSV_HEADER}")?;
                for record in records {
                    record.write_csv_row(&mut w)?;
                }
            }
        }
        w.flush()?;
        Ok(())
    }
    pub fn write_file(&self, records: &[FeatureRecord], path: &Path) -> Result<(), OutputError> {
        let file = File::create(path).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write(records, BufWriter::new(file))?;
        info!("saved {} records to {}", records.len(), path.display());
        Ok(())
    }
}
