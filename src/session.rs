// src/session.rs
use std::fs;
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use crate::analysis::{extract_with_window, AnalysisConfig, FeatureResult, Waveform};
use crate::cli::{Cli, Command, InspectArgs, SampleArgs};
use crate::dataset::{
    catalog, load_json_dataset, DatasetError, FixedSelector, IndexSelector, RandomSelector, RecordLabels,
    RecordRepository,
};
use crate::output::{
    save_waveform_png, Annotation, FeatureRecord, PlotRequest, PlotStyle, ResultsFormat,
    ResultsWriter,
};
/// Result of inspecting a single record.
#[derive(Debug)]
pub struct Inspection {
    pub record: FeatureRecord,
    pub annotation: String,
}
pub fn run(cli: Cli) -> Result<()> {
    let config =
        AnalysisConfig::with_tail_window(cli.tail_window).context("invalid --tail-window")?;
    match cli.command {
        Command::Inspect(args) => {
            let inspection = inspect(&args, &cli.data_dir, &config)?;
            println!("{}", inspection.annotation);
        }
        Command::Sample(args) => {
            let records = sample(&args, &cli.data_dir, &config)?;
            println!("{} records written to {}", records.len(), args.output.display());
        }
        Command::Catalog => {
            for entry in catalog::list(&cli.data_dir) {
                let state = if entry.present { "present" } else { "missing" };
                println!("{:>2}  {:<8} {}", entry.index, state, entry.path.display());
            }
        }
    }
    Ok(())
}
pub fn inspect(
    args: &InspectArgs,
    data_dir: &Path,
    config: &AnalysisConfig,
) -> Result<Inspection> {
    let path = args.dataset_path(data_dir)?;
    let repo = load_json_dataset(&path)?;
    let mut selector: Box<dyn IndexSelector> = match args.index {
        Some(index) if index >= repo.len() => {
            return Err(DatasetError::IndexOutOfRange {
                index,
                len: repo.len(),
            })
            .with_context(|| format!("selecting a record of {}", path.display()));
        }
        Some(index) => Box::new(FixedSelector::new(index)),
        None => Box::new(random_selector(args.seed)),
    };
    let file = display_name(&path);
    let inspection = inspect_record(
        &repo,
        &file,
        &mut *selector,
        config,
        &args.output,
        &PlotStyle::default(),
    )?;
    if let Some(results) = &args.results {
        let format = args
            .format
            .unwrap_or_else(|| ResultsFormat::from_path(results));
        ResultsWriter::new(format).write_file(std::slice::from_ref(&inspection.record), results)?;
    }
    Ok(inspection)
}
/// Picks one record, extracts its features and saves an annotated plot.
pub fn inspect_record<R, S>(
    repo: &R,
    file: &str,
    selector: &mut S,
    config: &AnalysisConfig,
    plot_path: &Path,
    style: &PlotStyle,
) -> Result<Inspection>
where
    R: RecordRepository + ?Sized,
    S: IndexSelector + ?Sized,
{
    let index = selector
        .pick(repo.len())
        .ok_or_else(|| anyhow!("no record to inspect in {file} ({} records)", repo.len()))?;
    info!("inspecting record {index} of {file}");
    let waveform = repo
        .waveform(index)
        .with_context(|| format!("reading waveform {index} of {file}"))?;
    let features = extract_with_window(waveform.view(), config.tail_window)
        .with_context(|| format!("analysing record {index} of {file}"))?;
    let labels = RecordLabels::collect(repo, index)
        .with_context(|| format!("reading labels of record {index} of {file}"))?;
    let annotation = plot_record(&waveform, index, &features, &labels, style, plot_path)?;
    Ok(Inspection {
        record: FeatureRecord::new(file, index, &labels, &features),
        annotation,
    })
}
pub fn sample(
    args: &SampleArgs,
    data_dir: &Path,
    config: &AnalysisConfig,
) -> Result<Vec<FeatureRecord>> {
    let paths = args.dataset_paths(data_dir)?;
    if let Some(dir) = &args.plot_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    // One selector for the whole run so a seed reproduces every file's draw.
    let mut selector = random_selector(args.seed);
    let style = PlotStyle::default();
    let mut records = Vec::new();
    for path in &paths {
        let repo = load_json_dataset(path)?;
        let file = display_name(path);
        records.extend(sample_records(
            &repo,
            &file,
            &mut selector,
            args.per_file,
            config,
            args.plot_dir.as_deref(),
            &style,
        )?);
    }
    let format = args
        .format
        .unwrap_or_else(|| ResultsFormat::from_path(&args.output));
    ResultsWriter::new(format).write_file(&records, &args.output)?;
    Ok(records)
}
/// Draws `count` records and analyses them in index order. Records the
/// extractor rejects are skipped; dataset errors abort.
pub fn sample_records<R, S>(
    repo: &R,
    file: &str,
    selector: &mut S,
    count: usize,
    config: &AnalysisConfig,
    plot_dir: Option<&Path>,
    style: &PlotStyle,
) -> Result<Vec<FeatureRecord>>
where
    R: RecordRepository + ?Sized,
    S: IndexSelector + ?Sized,
{
    if repo.is_empty() {
        warn!("{file} holds no records");
        return Ok(Vec::new());
    }
    let indices = selector.sample(repo.len(), count);
    info!("sampling {} of {} records from {file}", indices.len(), repo.len());
    let mut records = Vec::with_capacity(indices.len());
    for index in indices {
        let waveform = repo
            .waveform(index)
            .with_context(|| format!("reading waveform {index} of {file}"))?;
        let features = match extract_with_window(waveform.view(), config.tail_window) {
            Ok(features) => features,
            Err(err) => {
                warn!("skipping record {index} of {file}: {err}");
                continue;
            }
        };
        let labels = RecordLabels::collect(repo, index)
            .with_context(|| format!("reading labels of record {index} of {file}"))?;
        if let Some(dir) = plot_dir {
            let stem = Path::new(file)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_string());
            let plot_path = dir.join(format!("{stem}_{index}.png"));
            plot_record(&waveform, index, &features, &labels, style, &plot_path)?;
        }
        records.push(FeatureRecord::new(file, index, &labels, &features));
    }
    Ok(records)
}
fn plot_record(
    waveform: &Waveform,
    index: usize,
    features: &FeatureResult,
    labels: &RecordLabels,
    style: &PlotStyle,
    path: &Path,
) -> Result<String> {
    let annotation = Annotation::new(features, labels).to_string();
    let request = PlotRequest::for_record(index)
        .with_annotation(annotation.clone())
        .with_marker(labels.tp0.as_f64());
    save_waveform_png(waveform, &request, style, path)
        .with_context(|| format!("saving plot {}", path.display()))?;
    info!("plot saved to {}", path.display());
    Ok(annotation)
}
fn random_selector(seed: Option<u64>) -> RandomSelector {
    match seed {
        Some(seed) => RandomSelector::from_seed(seed),
        None => RandomSelector::from_entropy(),
    }
}
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
