use thiserror::Error;

/// Failure retrieving the fixtures page. Fatal: nothing is written.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] Box<ureq::Error>),
    #[error("fixtures page returned HTTP status {status}")]
    Status { status: u16 },
    #[error("failed to read response body: {0}")]
    Body(#[source] Box<ureq::Error>),
}

/// A match card missing its required team names. The card is skipped and
/// counted; the run continues.
#[derive(Debug, Error)]
pub enum StructuralParseError {
    #[error("expected 2 team-name nodes, found {0}")]
    MissingTeamNames(usize),
    #[error("team-name node is empty")]
    EmptyTeamName,
}

/// A fixture whose kickoff date or time is unknown at serialization time.
/// Expected for not-yet-scheduled fixtures; the record contributes no event.
#[derive(Debug, Error)]
#[error("no resolvable kickoff for {home_team} vs {away_team}")]
pub struct UnresolvedTimeError {
    pub home_team: String,
    pub away_team: String,
}

/// Fatal pipeline outcomes, propagated to main for a non-zero exit.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to write calendar file: {0}")]
    Filesystem(#[from] std::io::Error),
}
