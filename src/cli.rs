use std::path::{Path, PathBuf};
use clap::{Args, Parser, Subcommand};
use crate::analysis::DEFAULT_TAIL_WINDOW;
use crate::dataset::catalog::{self, DEFAULT_FILE_INDEX};
use crate::dataset::DatasetError;
use crate::output::ResultsFormat;
/// Peak and tail-slope inspection of detector pulses
#[derive(Parser, Debug)]
#[command(name = "pulsescope", version)]
pub struct Cli {
    /// Directory holding the MJD catalog files
    #[arg(long, global = true, default_value = "data", env = "PULSESCOPE_DATA_DIR")]
    pub data_dir: PathBuf,
    /// Trailing samples used for the tail slope fit
    #[arg(long, global = true, default_value_t = DEFAULT_TAIL_WINDOW)]
    pub tail_window: usize,
    #[command(subcommand)]
    pub command: Command,
}
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyse one record and plot it with its labels
    Inspect(InspectArgs),
    /// Analyse random records from one or more datasets and export the results
    Sample(SampleArgs),
    /// List catalog files and whether they exist under the data directory
    Catalog,
}
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Dataset file; defaults to the catalog entry picked by --file-index
    #[arg(conflicts_with = "file_index")]
    pub dataset: Option<PathBuf>,
    /// Catalog entry to open (default: MJD_Test_0)
    #[arg(long)]
    pub file_index: Option<usize>,
    /// Record to inspect; a random record is chosen when omitted
    #[arg(long)]
    pub index: Option<usize>,
    /// Seed for the random record choice (ignored with --index)
    #[arg(long, env = "PULSESCOPE_SEED")]
    pub seed: Option<u64>,
    /// Where to save the plot
    #[arg(short, long, default_value = "waveform.png")]
    pub output: PathBuf,
    /// Also save the analysed record to this results file
    #[arg(long)]
    pub results: Option<PathBuf>,
    /// Results format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<ResultsFormat>,
}
impl InspectArgs {
    pub fn dataset_path(&self, data_dir: &Path) -> Result<PathBuf, DatasetError> {
        match &self.dataset {
            Some(path) => Ok(path.clone()),
            None => catalog::resolve(data_dir, self.file_index.unwrap_or(DEFAULT_FILE_INDEX)),
        }
    }
}
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Dataset files to draw from
    pub datasets: Vec<PathBuf>,
    /// Catalog entries to draw from (repeatable)
    #[arg(long = "file-index")]
    pub file_indices: Vec<usize>,
    /// Records drawn from each dataset
    #[arg(long, default_value_t = 1)]
    pub per_file: usize,
    /// Seed for the random record choice
    #[arg(long, env = "PULSESCOPE_SEED")]
    pub seed: Option<u64>,
    /// Results file
    #[arg(short, long, default_value = "results.json")]
    pub output: PathBuf,
    /// Results format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<ResultsFormat>,
    /// Save a plot of every sampled record into this directory
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,
}
impl SampleArgs {
    /// Explicit paths first, then catalog entries; the default catalog entry if neither is given.
    pub fn dataset_paths(&self, data_dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
        let mut paths = self.datasets.clone();
        for &index in &self.file_indices {
            paths.push(catalog::resolve(data_dir, index)?);
        }
        if paths.is_empty() {
            paths.push(catalog::resolve(data_dir, DEFAULT_FILE_INDEX)?);
        }
        Ok(paths)
    }
}
