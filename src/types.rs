// src/types.rs
use std::fmt;
use serde::{Deserialize, Serialize};
// 每条记录附带的标量标签
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelField {
    Energy,
    PsdLowAvse,
    PsdHighAvse,
    PsdDcr,
    PsdLq,
    Tp0,
    Detector,
    RunNumber,
    Id,
}
impl LabelField {
    pub const ALL: [LabelField; 9] = [
        LabelField::Energy,
        LabelField::PsdLowAvse,
        LabelField::PsdHighAvse,
        LabelField::PsdDcr,
        LabelField::PsdLq,
        LabelField::Tp0,
        LabelField::Detector,
        LabelField::RunNumber,
        LabelField::Id,
    ];
    /// Column name in the dataset file.
    pub fn key(self) -> &'static str {
        match self {
            LabelField::Energy => "energy_label",
            LabelField::PsdLowAvse => "psd_label_low_avse",
            LabelField::PsdHighAvse => "psd_label_high_avse",
            LabelField::PsdDcr => "psd_label_dcr",
            LabelField::PsdLq => "psd_label_lq",
            LabelField::Tp0 => "tp0",
            LabelField::Detector => "detector",
            LabelField::RunNumber => "run_number",
            LabelField::Id => "id",
        }
    }
    /// Human-readable caption used in annotations.
    pub fn caption(self) -> &'static str {
        match self {
            LabelField::Energy => "Energy Label",
            LabelField::PsdLowAvse => "PSD Label Low Avse",
            LabelField::PsdHighAvse => "PSD Label High Avse",
            LabelField::PsdDcr => "PSD Label DCR",
            LabelField::PsdLq => "PSD Label LQ",
            LabelField::Tp0 => "Start of Rising Edge",
            LabelField::Detector => "Detector",
            LabelField::RunNumber => "Run Number",
            LabelField::Id => "ID",
        }
    }
}
// 标签值：整数或浮点，序列化时保持原样
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Int(i64),
    Float(f64),
}
impl LabelValue {
    pub fn as_f64(self) -> f64 {
        match self {
            LabelValue::Int(v) => v as f64,
            LabelValue::Float(v) => v,
        }
    }
}
impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Int(v) => write!(f, "{v}"),
            LabelValue::Float(v) => write!(f, "{v}"),
        }
    }
}
