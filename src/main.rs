use tracing::info;

use premier_fixture_calendar::config::Config;
use premier_fixture_calendar::error::PipelineError;
use premier_fixture_calendar::pipeline;

fn main() -> Result<(), PipelineError> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();

    let config = Config::default();
    let summary = pipeline::run(&config)?;
    info!(
        fixtures = summary.fixtures,
        events = summary.events,
        skipped_cards = summary.skipped_cards,
        path = %summary.path.display(),
        "Done"
    );
    Ok(())
}
