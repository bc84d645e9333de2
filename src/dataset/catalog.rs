use std::path::{Path, PathBuf};
use crate::dataset::DatasetError;
/// MJD data release files, in their published order.
pub const MJD_FILES: [&str; 24] = [
    "MJD_NPML_1",
    "MJD_NPML_2",
    "MJD_Test_0",
    "MJD_Test_1",
    "MJD_Test_2",
    "MJD_Test_3",
    "MJD_Test_4",
    "MJD_Test_5",
    "MJD_Train_0",
    "MJD_Train_1",
    "MJD_Train_2",
    "MJD_Train_3",
    "MJD_Train_4",
    "MJD_Train_5",
    "MJD_Train_6",
    "MJD_Train_7",
    "MJD_Train_8",
    "MJD_Train_9",
    "MJD_Train_10",
    "MJD_Train_11",
    "MJD_Train_12",
    "MJD_Train_13",
    "MJD_Train_14",
    "MJD_Train_15",
];
/// `MJD_Test_0`.
pub const DEFAULT_FILE_INDEX: usize = 2;
pub const DATASET_EXTENSION: &str = "json";
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub index: usize,
    pub name: &'static str,
    pub path: PathBuf,
    pub present: bool,
}
pub fn resolve(data_dir: &Path, index: usize) -> Result<PathBuf, DatasetError> {
    let name = MJD_FILES
        .get(index)
        .ok_or(DatasetError::UnknownCatalogIndex {
            index,
            len: MJD_FILES.len(),
        })?;
    Ok(data_dir.join(name).with_extension(DATASET_EXTENSION))
}
pub fn list(data_dir: &Path) -> Vec<CatalogEntry> {
    MJD_FILES
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            let path = data_dir.join(name).with_extension(DATASET_EXTENSION);
            let present = path.is_file();
            CatalogEntry {
                index,
                name,
                path,
                present,
            }
        })
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_entry_is_first_test_file() {
        let path = resolve(Path::new("data"), DEFAULT_FILE_INDEX).unwrap();
        assert_eq!(path, Path::new("data").join("MJD_Test_0.json"));
    }
    #[test]
    fn unknown_index_is_rejected() {
        assert!(matches!(
            resolve(Path::new("data"), 24),
            Err(DatasetError::UnknownCatalogIndex { index: 24, len: 24 })
        ));
    }
    #[test]
    fn list_marks_present_files() {
        let dir = std::env::temp_dir().join(format!("pulsescope_catalog_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("MJD_Train_3.json"), "{}").unwrap();
        let entries = list(&dir);
        assert_eq!(entries.len(), MJD_FILES.len());
        let present: Vec<&str> = entries.iter().filter(|e| e.present).map(|e| e.name).collect();
        assert_eq!(present, vec!["MJD_Train_3"]);
        std::fs::remove_dir_all(&dir).ok();
    }
}
