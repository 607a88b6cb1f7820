use chrono::{Duration, NaiveDateTime};
use icalendar::{CalendarComponent, Component};

use premier_fixture_calendar::ics;
use premier_fixture_calendar::model::fixture::Fixture;
use premier_fixture_calendar::onefootball::OneFootball;

/// One match day, two cards: a fully scheduled fixture and one with no
/// kickoff or status published yet.
const SCENARIO_HTML: &str = r#"
    <ul class="MatchCardsList_matches__8_UwB">
      <a class="MatchCard_matchCard__iOv4G">
        <time class="title-8-bold" datetime="2024-05-01T15:00:00Z">1 May</time>
        <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Arsenal</span>
        <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Chelsea</span>
        <span class="SimpleMatchCard_simpleMatchCard__infoMessage___NJqW">Scheduled</span>
      </a>
      <a class="MatchCard_matchCard__iOv4G">
        <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Liverpool</span>
        <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Everton</span>
      </a>
    </ul>"#;

fn parse_dt(s: &str) -> NaiveDateTime {
    let s = s.strip_suffix('Z').unwrap_or(s);
    NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S").expect("unparseable ICS datetime")
}

fn parse_back(payload: &str) -> icalendar::Calendar {
    icalendar::parser::read_calendar(payload)
        .expect("emitted payload should parse back")
        .into()
}

#[test]
fn scenario_two_cards_one_event() {
    let page = OneFootball::from_html(SCENARIO_HTML);
    let fixtures = page.fixtures();
    assert_eq!(fixtures.len(), 2);

    // Card A fully resolved, card B all sentinels
    assert_eq!(fixtures[0].date_str(), "01/05/2024");
    assert_eq!(fixtures[0].time_str(), "15:00");
    assert_eq!(fixtures[1].date_str(), "Unknown Date");
    assert_eq!(fixtures[1].time_str(), "Unknown Time");
    assert_eq!(fixtures[1].status_str(), "Unknown Status");

    let calendar = ics::build_calendar(fixtures, Duration::hours(2));
    let payload = calendar.to_string();
    let parsed = parse_back(&payload);

    let events: Vec<_> = parsed
        .components
        .iter()
        .filter_map(|c| match c {
            CalendarComponent::Event(e) => Some(e),
            _ => None,
        })
        .collect();
    assert_eq!(events.len(), 1, "payload was: {}", payload);

    let event = events[0];
    assert_eq!(event.property_value("SUMMARY"), Some("Arsenal vs Chelsea"));
    assert_eq!(event.property_value("DESCRIPTION"), Some("Status: Scheduled"));
    let start = parse_dt(event.property_value("DTSTART").expect("missing DTSTART"));
    let end = parse_dt(event.property_value("DTEND").expect("missing DTEND"));
    assert_eq!(start.to_string(), "2024-05-01 15:00:00");
    assert_eq!(end.to_string(), "2024-05-01 17:00:00");
}

#[test]
fn event_count_matches_resolvable_fixtures() {
    let html = std::fs::read_to_string("tests/fixtures_page.html")
        .expect("failed to read fixtures_page.html");
    let page = OneFootball::from_html(&html);
    let fixtures = page.fixtures();

    let resolvable = fixtures
        .iter()
        .filter(|f| f.date.is_some() && f.time.is_some())
        .count();
    let calendar = ics::build_calendar(fixtures, Duration::hours(2));
    assert_eq!(calendar.components.len(), resolvable);
}

#[test]
fn every_event_lasts_exactly_two_hours() {
    let html = std::fs::read_to_string("tests/fixtures_page.html")
        .expect("failed to read fixtures_page.html");
    let page = OneFootball::from_html(&html);
    let calendar = ics::build_calendar(page.fixtures(), Duration::hours(2));
    let parsed = parse_back(&calendar.to_string());

    let mut seen = 0;
    for component in &parsed.components {
        if let CalendarComponent::Event(event) = component {
            let start = parse_dt(event.property_value("DTSTART").expect("missing DTSTART"));
            let end = parse_dt(event.property_value("DTEND").expect("missing DTEND"));
            assert_eq!(end - start, Duration::hours(2));
            seen += 1;
        }
    }
    assert!(seen > 0, "expected at least one event");
}

#[test]
fn round_trip_preserves_event_fields() {
    let page = OneFootball::from_html(SCENARIO_HTML);
    let duration = Duration::hours(2);
    let calendar = ics::build_calendar(page.fixtures(), duration);
    let parsed = parse_back(&calendar.to_string());

    for (fixture, component) in page
        .fixtures()
        .iter()
        .filter(|f| f.date.is_some() && f.time.is_some())
        .zip(parsed.components.iter())
    {
        let CalendarComponent::Event(event) = component else {
            panic!("expected a VEVENT");
        };
        let expected_summary = format!("{} vs {}", fixture.home_team, fixture.away_team);
        let expected_description = format!("Status: {}", fixture.status_str());
        assert_eq!(event.property_value("SUMMARY"), Some(expected_summary.as_str()));
        assert_eq!(
            event.property_value("DESCRIPTION"),
            Some(expected_description.as_str())
        );

        let start = parse_dt(event.property_value("DTSTART").expect("missing DTSTART"));
        let end = parse_dt(event.property_value("DTEND").expect("missing DTEND"));
        let expected_start = fixture.date.unwrap().and_time(fixture.time.unwrap());
        assert_eq!(start, expected_start);
        assert_eq!(end, expected_start + duration);
    }
}

#[test]
fn unresolved_fixture_yields_error_not_event() {
    let fixture = Fixture {
        date: None,
        time: None,
        home_team: "Liverpool".to_string(),
        away_team: "Everton".to_string(),
        status: None,
    };
    let err = ics::event_for(&fixture, Duration::hours(2))
        .expect_err("fixture without kickoff must not become an event");
    assert_eq!(err.home_team, "Liverpool");
    assert_eq!(err.away_team, "Everton");
}

#[test]
fn writes_full_payload_to_created_directory() {
    let page = OneFootball::from_html(SCENARIO_HTML);
    let calendar = ics::build_calendar(page.fixtures(), Duration::hours(2));

    let dir = std::env::temp_dir().join(format!(
        "premier_fixture_calendar_test_{}",
        std::process::id()
    ));
    let path = ics::write_calendar(&calendar, &dir, "premier_league_fixtures.ics")
        .expect("write should succeed");

    let written = std::fs::read_to_string(&path).expect("written file should be readable");
    assert!(written.starts_with("BEGIN:VCALENDAR"));
    assert!(written.contains("SUMMARY:Arsenal vs Chelsea"));
    let parsed = parse_back(&written);
    assert_eq!(parsed.components.len(), 1);

    std::fs::remove_dir_all(&dir).expect("cleanup failed");
}
