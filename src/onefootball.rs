use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::{error, info, info_span, instrument, warn};

use crate::error::{FetchError, StructuralParseError};
use crate::model::fixture::Fixture;

const MATCH_DAY_CSS: &str = "ul.MatchCardsList_matches__8_UwB";
const MATCH_CARD_CSS: &str = "a.MatchCard_matchCard__iOv4G";
const TEAM_NAME_CSS: &str = "span.SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D";
const KICKOFF_CSS: &str = "time.title-8-bold";
const STATUS_CSS: &str = "span.SimpleMatchCard_simpleMatchCard__infoMessage___NJqW";

/// The set of CSS selectors that locate one day's matches, the match cards
/// within a day, and the named sub-fields of a card. Extraction depends only
/// on this value, so a site redesign is a selector change, not a code change.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    match_day: Selector,
    match_card: Selector,
    team_name: Selector,
    kickoff: Selector,
    status: Selector,
}

impl PageSelectors {
    pub fn new(
        match_day: &str,
        match_card: &str,
        team_name: &str,
        kickoff: &str,
        status: &str,
    ) -> Result<Self, String> {
        Ok(Self {
            match_day: Selector::parse(match_day)
                .map_err(|e| format!("bad match-day selector: {}", e))?,
            match_card: Selector::parse(match_card)
                .map_err(|e| format!("bad match-card selector: {}", e))?,
            team_name: Selector::parse(team_name)
                .map_err(|e| format!("bad team-name selector: {}", e))?,
            kickoff: Selector::parse(kickoff)
                .map_err(|e| format!("bad kickoff selector: {}", e))?,
            status: Selector::parse(status)
                .map_err(|e| format!("bad status selector: {}", e))?,
        })
    }
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self::new(
            MATCH_DAY_CSS,
            MATCH_CARD_CSS,
            TEAM_NAME_CSS,
            KICKOFF_CSS,
            STATUS_CSS,
        )
        .expect("built-in selectors are valid CSS")
    }
}

/// OneFootball fixtures-page client. Holds the extracted fixture list plus a
/// count of match cards dropped for missing team names.
#[derive(Debug)]
pub struct OneFootball {
    fixtures: Vec<Fixture>,
    skipped_cards: usize,
}

impl OneFootball {
    /// Fetch the fixtures page over HTTP and extract its fixtures.
    #[instrument(level = "info", skip(url))]
    pub fn fetch(url: &str) -> Result<Self, FetchError> {
        let response_result = {
            let _span = info_span!("fixtures_fetch", url = %url).entered();
            ureq::get(url).call()
        };
        match response_result {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut body_reader = response.into_body();
                let body = match body_reader.read_to_string() {
                    Ok(body) => body,
                    Err(e) => {
                        error!(error = %e, "Failed to read fixtures page body");
                        return Err(FetchError::Body(Box::new(e)));
                    }
                };
                if !(200..300).contains(&status) {
                    error!(status, url = %url, "Fixtures page returned non-success status");
                    return Err(FetchError::Status { status });
                }
                Ok(Self::from_html(&body))
            }
            Err(ureq::Error::StatusCode(status)) => {
                error!(status, url = %url, "Fixtures page returned non-success status");
                Err(FetchError::Status { status })
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request for fixtures page failed");
                Err(FetchError::Transport(Box::new(e)))
            }
        }
    }

    /// Extract fixtures from raw page markup using the built-in OneFootball
    /// selectors (no network).
    pub fn from_html(html: &str) -> Self {
        Self::from_html_with(html, &PageSelectors::default())
    }

    /// Extract fixtures from raw page markup with caller-supplied selectors.
    ///
    /// Match-day groups are walked in document order and the cards of each
    /// group concatenated, never interleaved or sorted. Cards missing team
    /// names are skipped and counted; missing kickoff or status degrade the
    /// record, not the run.
    pub fn from_html_with(html: &str, selectors: &PageSelectors) -> Self {
        let document = Html::parse_document(html);
        let mut fixtures: Vec<Fixture> = Vec::new();
        let mut skipped_cards = 0usize;

        for match_day in document.select(&selectors.match_day) {
            for card in match_day.select(&selectors.match_card) {
                match parse_card(card, selectors) {
                    Ok(fixture) => {
                        info!(
                            date = %fixture.date_str(),
                            time = %fixture.time_str(),
                            home_team = %fixture.home_team,
                            away_team = %fixture.away_team,
                            status = %fixture.status_str(),
                            "Extracted fixture"
                        );
                        fixtures.push(fixture);
                    }
                    Err(e) => {
                        warn!(error = %e, "Skipping malformed match card");
                        skipped_cards += 1;
                    }
                }
            }
        }

        info!(fixtures = fixtures.len(), skipped_cards, "Extraction complete");
        Self { fixtures, skipped_cards }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn into_fixtures(self) -> Vec<Fixture> {
        self.fixtures
    }

    /// Number of match cards dropped for missing team names.
    pub fn skipped_cards(&self) -> usize {
        self.skipped_cards
    }
}

fn parse_card(
    card: ElementRef<'_>,
    selectors: &PageSelectors,
) -> Result<Fixture, StructuralParseError> {
    let names: Vec<String> = card
        .select(&selectors.team_name)
        .map(element_text)
        .collect();
    if names.len() < 2 {
        return Err(StructuralParseError::MissingTeamNames(names.len()));
    }
    let home_team = names[0].clone();
    let away_team = names[1].clone();
    if home_team.is_empty() || away_team.is_empty() {
        return Err(StructuralParseError::EmptyTeamName);
    }

    let kickoff = card
        .select(&selectors.kickoff)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .and_then(parse_kickoff);
    let (date, time) = match kickoff {
        Some(dt) => (Some(dt.date()), Some(dt.time())),
        None => (None, None),
    };

    let status = card
        .select(&selectors.status)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty());

    Ok(Fixture { date, time, home_team, away_team, status })
}

/// Parse the machine-readable `datetime` attribute, e.g.
/// `2024-05-01T15:00:00Z`. The site publishes UTC; strip the designator and
/// keep the naive timestamp.
fn parse_kickoff(raw: &str) -> Option<NaiveDateTime> {
    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S").ok()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
