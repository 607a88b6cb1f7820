use std::path::PathBuf;

use chrono::Duration;

/// Process-wide constants, carried as a value so the pipeline can be run
/// against fixture markup in tests without touching the network.
#[derive(Debug, Clone)]
pub struct Config {
    pub fixtures_url: String,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub event_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixtures_url: "https://onefootball.com/en/competition/premier-league-9/fixtures"
                .to_string(),
            output_dir: PathBuf::from("ICS_Files"),
            output_file: "premier_league_fixtures.ics".to_string(),
            // No real duration data is published; assume two hours per match.
            event_duration: Duration::hours(2),
        }
    }
}
