//! End-to-end pipeline tests over fixture HTML pages.
//!
//! Drives discovery, roster and score extraction, reconciliation,
//! ranking, and the CSV sink without touching the network.

use band_scores::types::{DiscoveredEvent, RankSource, ScoreRecord};
use band_scores::window::ReportWindow;
use band_scores::{events, ranking, roster, scores, storage};
use chrono::NaiveDate;

const INDEX_PAGE: &str = r##"
<html><body>
  <div class="card shadow mb-3 bg-white border-0 shadow">
    <div class="row">
      <div class="col-md-9">
        <h5 class="card-title">Sat, Oct 05</h5>
        <div class="event past">
          <a class="eventtitle" href="#">Garden State Classic</a>
          <div class="location">Clifton, NJ</div>
        </div>
      </div>
      <div class="col-md-3">
        <a class="btn btn-primary" href="garden-state-classic">Register/Results</a>
      </div>
    </div>
  </div>
  <div class="card shadow mb-3 bg-white border-0 shadow">
    <div class="row">
      <div class="col-md-9">
        <h5 class="card-title">Sun, Oct 06</h5>
        <div class="event past">
          <a class="eventtitle" href="#">Keystone Invitational</a>
          <div class="location">Allentown, PA</div>
        </div>
      </div>
      <div class="col-md-3">
        <a class="btn btn-primary" href="keystone-invitational">Register/Results</a>
      </div>
    </div>
  </div>
  <div class="card shadow mb-3 bg-white border-0 shadow">
    <div class="row">
      <div class="col-md-9">
        <h5 class="card-title">Sat, Oct 05</h5>
        <div class="event past">
          <a class="eventtitle" href="#">New England Showcase</a>
          <div class="location">Lowell, MA</div>
        </div>
      </div>
      <div class="col-md-3">
        <a class="btn btn-primary" href="new-england-showcase">Register/Results</a>
      </div>
    </div>
  </div>
</body></html>"##;

// Event page with both a schedule roster and a results table.
const EVENT_WITH_SCHEDULE: &str = r#"
<html><body><main>
  <h2>Schedule</h2>
  <table>
    <tr class="performingUnit">
      <td class="unit"><a href="/units/1">Wayne Hills High School Marching Band</a>
        <div class="cityState">Wayne, NJ</div></td>
    </tr>
    <tr class="performingUnit">
      <td class="unit"><a href="/units/2">Clifton High School</a>
        <div class="cityState">Clifton, NJ, Clifton, NJ</div></td>
    </tr>
  </table>
  <h2>Results</h2>
  <div class="container-fluid">
    <table>
      <tr class="divisionName"><td>I A Class</td></tr>
      <tr><td class="rank">1</td><td class="name">Wayne Hills High School</td><td class="score">95.0</td></tr>
      <tr><td class="rank">1</td><td class="name">Clifton High School</td><td class="score">95.0</td></tr>
      <tr><td class="rank">3</td><td class="name">Passaic Valley High School</td><td class="score">90.125</td></tr>
    </table>
  </div>
</main></body></html>"#;

// Event page with no Schedule heading: every location falls through to
// the High-School-stripping fallback or the sentinel.
const EVENT_WITHOUT_SCHEDULE: &str = r#"
<html><body><main>
  <div class="container-fluid">
    <table>
      <tr class="divisionName"><td>I A Class</td></tr>
      <tr><td class="rank">1</td><td class="name">Allentown High School</td><td class="score">89.4</td></tr>
      <tr class="divisionName"><td>II A Class</td></tr>
      <tr><td class="rank">1</td><td class="name">The Blue Knights</td><td class="score">84.2</td></tr>
    </table>
  </div>
</main></body></html>"#;

fn test_window() -> ReportWindow {
    // Saturday run; window covers 2024-09-28..2024-10-12
    ReportWindow::compute(NaiveDate::from_ymd_opt(2024, 10, 12).unwrap(), None)
}

fn target_states() -> Vec<String> {
    vec!["NJ".to_string(), "NY".to_string(), "PA".to_string()]
}

fn discover_fixture_events() -> Vec<DiscoveredEvent> {
    events::discover(
        INDEX_PAGE,
        "https://usbands.org/events/",
        &target_states(),
        &test_window(),
    )
}

fn collect_records(html: &str, event: &DiscoveredEvent) -> Vec<ScoreRecord> {
    let event_roster = roster::extract(html);
    scores::extract(html)
        .unwrap_or_default()
        .iter()
        .filter_map(|raw| scores::build_record(raw, &event_roster, event))
        .collect()
}

#[test]
fn test_discovery_filters_state_and_keeps_order() {
    let discovered = discover_fixture_events();

    // the MA event is outside the target states
    assert_eq!(discovered.len(), 2);
    assert_eq!(discovered[0].host, "Garden State Classic");
    assert_eq!(
        discovered[0].url,
        "https://usbands.org/events/garden-state-classic"
    );
    assert_eq!(discovered[1].host, "Keystone Invitational");
    assert_eq!(discovered[1].state, "PA");
}

#[test]
fn test_full_pipeline_with_schedule() {
    let discovered = discover_fixture_events();
    let records = collect_records(EVENT_WITH_SCHEDULE, &discovered[0]);
    assert_eq!(records.len(), 3);

    // roster hit through the substring fallback (the scored name is a
    // prefix of the roster name) and duplicate-town cleanup
    let wayne = records
        .iter()
        .find(|r| r.school.starts_with("Wayne"))
        .unwrap();
    assert_eq!(wayne.location, "Wayne, NJ");
    let clifton = records
        .iter()
        .find(|r| r.school.starts_with("Clifton"))
        .unwrap();
    assert_eq!(clifton.location, "Clifton, NJ");

    // no roster entry at all: High School fallback
    let passaic = records
        .iter()
        .find(|r| r.school.starts_with("Passaic"))
        .unwrap();
    assert_eq!(passaic.location, "Passaic Valley");

    // tied top scores share 1st, next distinct score takes 3rd
    let rows = ranking::build_rows(&records, RankSource::Recomputed);
    assert_eq!(rows[0].rank, "1st");
    assert_eq!(rows[1].rank, "1st");
    assert_eq!(rows[2].rank, "3rd");
    assert_eq!(rows[2].school, "Passaic Valley High School");
}

#[test]
fn test_full_pipeline_without_schedule() {
    let discovered = discover_fixture_events();
    let records = collect_records(EVENT_WITHOUT_SCHEDULE, &discovered[1]);

    // the run still completes with both records present
    assert_eq!(records.len(), 2);
    let allentown = records
        .iter()
        .find(|r| r.school.starts_with("Allentown"))
        .unwrap();
    assert_eq!(allentown.location, "Allentown");
    let knights = records
        .iter()
        .find(|r| r.school.starts_with("The Blue"))
        .unwrap();
    assert_eq!(knights.location, "Unknown Location");
}

#[test]
fn test_aggregate_ranking_and_sink() {
    let discovered = discover_fixture_events();

    let mut all_records = collect_records(EVENT_WITH_SCHEDULE, &discovered[0]);
    all_records.extend(collect_records(EVENT_WITHOUT_SCHEDULE, &discovered[1]));

    let rows = ranking::build_rows(&all_records, RankSource::Recomputed);
    assert_eq!(rows.len(), 5);

    // I A Class is ranked across both events: 95.0, 95.0, 90.125, 89.4
    let allentown = rows
        .iter()
        .find(|r| r.school == "Allentown High School")
        .unwrap();
    assert_eq!(allentown.rank, "4th");

    // dates ascend; the Oct 5 event precedes the Oct 6 event
    assert_eq!(rows[0].date, "Saturday, October 05, 2024");
    assert_eq!(rows[4].date, "Sunday, October 06, 2024");

    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let path = storage::write_report(&rows, &test_window(), root).unwrap();

    let read_back = storage::read_report(&path).unwrap();
    assert_eq!(read_back, rows);

    // blank separator between the I A and II A groups
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(",,,,,,"));
}
