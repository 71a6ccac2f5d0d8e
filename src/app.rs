use std::path::PathBuf;

use log::info;

use crate::config::RunConfig;
use crate::data::loader;
use crate::data::model::CombinedDataset;
use crate::error::Result;
use crate::render;

// ---------------------------------------------------------------------------
// One run: load every series, render one figure
// ---------------------------------------------------------------------------

/// How a run finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The figure was written.
    Rendered { output: PathBuf, rows: usize },
    /// No input file existed; nothing was written.
    NoData,
}

/// Load all series under `config.input_dir` and render the comparison figure.
///
/// Missing inputs are skipped with a warning. If none exist the run ends
/// cleanly with [`RunOutcome::NoData`]. A malformed input aborts before any
/// image is written.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let tables = loader::load_all(&config.input_dir)?;

    if tables.is_empty() {
        info!(
            "No data to plot. Make sure the CSV files exist in {}.",
            config.input_dir.display()
        );
        return Ok(RunOutcome::NoData);
    }

    let dataset = CombinedDataset::concat(&tables);
    info!(
        "Loaded {} file(s), {} samples in total",
        tables.len(),
        dataset.len()
    );

    render::render_figure(&dataset, &config.figure, &config.output_path)?;
    info!(
        "Comparison plot saved as: {}",
        config.output_path.display()
    );

    Ok(RunOutcome::Rendered {
        output: config.output_path.clone(),
        rows: dataset.len(),
    })
}
