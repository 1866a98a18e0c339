// src/runner.rs
use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::info;

use crate::{
    config::options::AppOptions,
    core::Fetch,
    error::ExportError,
    file::write_flyers_json,
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub flyers: usize,
}

/// One full run: scrape everything, then write the file once.
///
/// Only the final write can fail. Fetch problems have already been logged
/// and show up as fewer flyers.
pub fn run(
    options: &AppOptions,
    fetcher: &dyn Fetch,
    now: NaiveDateTime,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ExportError> {
    let flyers = scrape::collect_flyers(fetcher, &options.scrape, now, progress);

    let path = write_flyers_json(&options.export, &flyers)?;
    info!(path = %path.display(), flyers = flyers.len(), "wrote flyers");

    Ok(RunSummary { path, flyers: flyers.len() })
}
