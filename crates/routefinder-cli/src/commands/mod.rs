// Subcommand handlers. main.rs parses arguments and dispatches here.

pub mod inspect;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use routefinder_lib::{Airport, CsvDataset, FinderOptions, PathFinder};

/// Open the dataset under `data_dir` and start a finder over it.
pub fn load_finder(data_dir: &Path, options: FinderOptions) -> Result<PathFinder<Airport>> {
    let dataset = CsvDataset::open(data_dir)
        .with_context(|| format!("failed to open dataset in {}", data_dir.display()))?;
    let finder = PathFinder::from_provider(&dataset, options)
        .with_context(|| format!("failed to load dataset from {}", dataset.root().display()))?;
    Ok(finder)
}
