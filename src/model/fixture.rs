use chrono::{NaiveDate, NaiveTime};

/// One parsed match, in document order from the fixtures page.
///
/// Date, time and status are optional: the page omits them for fixtures that
/// are not yet scheduled, and the record is still worth keeping. Team names
/// are required; a card without both never becomes a `Fixture`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub home_team: String,
    pub away_team: String,
    pub status: Option<String>,
}

impl Fixture {
    /// Kickoff date as `DD/MM/YYYY`, or `Unknown Date`.
    pub fn date_str(&self) -> String {
        match self.date {
            Some(d) => d.format("%d/%m/%Y").to_string(),
            None => "Unknown Date".to_string(),
        }
    }

    /// Kickoff time as `HH:MM`, or `Unknown Time`.
    pub fn time_str(&self) -> String {
        match self.time {
            Some(t) => t.format("%H:%M").to_string(),
            None => "Unknown Time".to_string(),
        }
    }

    /// Free-text match status, or `Unknown Status`.
    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("Unknown Status")
    }
}
