use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use icalendar::{Calendar, Component, Event, EventLike};
use tracing::{info, warn};

use crate::error::UnresolvedTimeError;
use crate::model::fixture::Fixture;

/// Build one VEVENT for a fixture with a resolvable kickoff.
///
/// The kickoff is already UTC (the site strips the zone from a UTC timestamp),
/// so the zone is attached, not converted.
pub fn event_for(fixture: &Fixture, duration: Duration) -> Result<Event, UnresolvedTimeError> {
    let (Some(date), Some(time)) = (fixture.date, fixture.time) else {
        return Err(UnresolvedTimeError {
            home_team: fixture.home_team.clone(),
            away_team: fixture.away_team.clone(),
        });
    };

    let start: DateTime<Utc> = Utc.from_utc_datetime(&date.and_time(time));
    let end = start + duration;

    Ok(Event::new()
        .summary(&format!("{} vs {}", fixture.home_team, fixture.away_team))
        .starts(start)
        .ends(end)
        .description(&format!("Status: {}", fixture.status_str()))
        .done())
}

/// Build the calendar: one VEVENT per fixture with a resolvable kickoff, in
/// input order. Unresolved fixtures are logged and skipped; they still count
/// toward the fixture tally, just not toward the calendar.
pub fn build_calendar(fixtures: &[Fixture], duration: Duration) -> Calendar {
    let mut calendar = Calendar::new();
    for fixture in fixtures {
        match event_for(fixture, duration) {
            Ok(event) => {
                calendar.push(event);
            }
            Err(e) => {
                warn!(error = %e, "Skipping fixture without a kickoff time");
            }
        }
    }
    calendar
}

/// Serialize the calendar and write it to `<dir>/<filename>`, creating the
/// directory if absent. The payload is fully assembled in memory before the
/// single write, so no failure path leaves a partial file. An existing file
/// is overwritten; the artifact is regenerated from live data each run.
pub fn write_calendar(calendar: &Calendar, dir: &Path, filename: &str) -> io::Result<PathBuf> {
    let payload = calendar.to_string();
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, payload.as_bytes())?;
    info!(path = %path.display(), bytes = payload.len(), "Wrote calendar file");
    Ok(path)
}
