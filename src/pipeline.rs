use std::path::PathBuf;

use tracing::{info, instrument};

use crate::config::Config;
use crate::error::PipelineError;
use crate::ics;
use crate::onefootball::OneFootball;

/// Outcome of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub fixtures: usize,
    pub events: usize,
    pub skipped_cards: usize,
    pub path: PathBuf,
}

/// Fetch, extract, serialize, write. Fully sequential; a fetch or filesystem
/// failure propagates before anything reaches disk.
#[instrument(skip(config))]
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    let page = OneFootball::fetch(&config.fixtures_url)?;
    let fixtures = page.fixtures();

    let calendar = ics::build_calendar(fixtures, config.event_duration);
    let events = calendar.components.len();
    let path = ics::write_calendar(&calendar, &config.output_dir, &config.output_file)?;

    info!(
        fixtures = fixtures.len(),
        events,
        path = %path.display(),
        "Created ICS file"
    );

    Ok(RunSummary {
        fixtures: fixtures.len(),
        events,
        skipped_cards: page.skipped_cards(),
        path,
    })
}
