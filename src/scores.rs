//! Score table extraction and record assembly.
//!
//! The results table interleaves division header rows with score rows.
//! A score row only counts once a division header has been seen; rows
//! with no division context are dropped.

use crate::events::{element_text, select_first};
use crate::locations;
use crate::types::{DiscoveredEvent, RawScore, RosterEntry, ScoreRecord};
use regex::Regex;
use scraper::{CaseSensitivity, Html, Selector};

/// Pull raw score tuples from the event page's results table.
/// Returns None when the table itself is absent so the caller can warn.
pub fn extract(html: &str) -> Option<Vec<RawScore>> {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse("main div.container-fluid table").ok()?;
    let table = document.select(&table_selector).next()?;

    let row_selector = Selector::parse("tr").ok()?;
    let mut raw_scores = Vec::new();
    let mut current_division: Option<String> = None;

    for row in table.select(&row_selector) {
        if row
            .value()
            .has_class("divisionName", CaseSensitivity::CaseSensitive)
        {
            if let Some(cell) = select_first(row, "td") {
                current_division = Some(element_text(cell));
            }
            continue;
        }

        let rank = select_first(row, "td.rank").map(element_text);
        let name = select_first(row, "td.name").map(element_text);
        let score = select_first(row, "td.score").map(element_text);

        if let (Some(rank), Some(name), Some(score)) = (rank, name, score) {
            let Some(division) = current_division.clone() else {
                continue;
            };
            raw_scores.push(RawScore {
                division,
                rank,
                school: name,
                score,
            });
        }
    }

    Some(raw_scores)
}

/// Assemble a ScoreRecord from a raw tuple. Returns None when the score
/// text has no parseable number; a rank without digits degrades to None.
pub fn build_record(
    raw: &RawScore,
    roster: &[RosterEntry],
    event: &DiscoveredEvent,
) -> Option<ScoreRecord> {
    let score = parse_score(&raw.score)?;
    let rank = parse_rank(&raw.rank);
    let location = locations::dedupe_segments(&locations::resolve(&raw.school, roster));

    Some(ScoreRecord {
        event_host: event.host.clone(),
        event_date: event.date,
        division: raw.division.clone(),
        school: raw.school.clone(),
        rank,
        score,
        location,
    })
}

fn parse_score(text: &str) -> Option<f64> {
    let re = Regex::new(r"\d+(?:\.\d+)?").ok()?;
    re.find(text.trim())?.as_str().parse().ok()
}

/// Ranks are printed as plain integers or ordinals ("3" or "3rd");
/// either way the digits are the rank.
fn parse_rank(text: &str) -> Option<u32> {
    let re = Regex::new(r"\d+").ok()?;
    re.find(text.trim())?.as_str().parse().ok()
}
