//! Ranking and report row construction.
//!
//! The weekly report compares schools across every competition in the
//! same division, so by default ranks are recomputed over the whole run
//! aggregate rather than trusted from the individual event pages.

use crate::types::{RankSource, ReportRow, ScoreRecord, ROW_DATE_FORMAT};
use std::collections::BTreeMap;

/// Build the final, ordered report rows from the run's score aggregate.
pub fn build_rows(records: &[ScoreRecord], rank_source: RankSource) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = match rank_source {
        RankSource::Recomputed => {
            let ranks = competition_ranks(records);
            records
                .iter()
                .zip(ranks)
                .map(|(record, rank)| to_row(record, ordinal(rank)))
                .collect()
        }
        // verbatim ranks only exist for rows that printed one
        RankSource::Verbatim => records
            .iter()
            .filter_map(|record| {
                let rank = record.rank?;
                Some(to_row(record, rank.to_string()))
            })
            .collect(),
    };

    rows.sort_by(|a, b| {
        let date_a = parse_row_date(&a.date);
        let date_b = parse_row_date(&b.date);
        date_a
            .cmp(&date_b)
            .then_with(|| a.division.cmp(&b.division))
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| a.host.cmp(&b.host))
            .then_with(|| a.school.cmp(&b.school))
    });

    rows
}

/// Standard competition ranking ("1224"): within each division, rank by
/// score descending; ties share the minimum rank and the next distinct
/// score resumes at its position + 1. Returns one rank per input record,
/// in input order.
pub fn competition_ranks(records: &[ScoreRecord]) -> Vec<u32> {
    let mut by_division: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        by_division.entry(&record.division).or_default().push(idx);
    }

    let mut ranks = vec![0u32; records.len()];
    for indices in by_division.values_mut() {
        indices.sort_by(|&a, &b| records[b].score.total_cmp(&records[a].score));

        let mut previous: Option<f64> = None;
        let mut rank = 0u32;
        for (position, &idx) in indices.iter().enumerate() {
            let score = records[idx].score;
            if previous != Some(score) {
                rank = position as u32 + 1;
                previous = Some(score);
            }
            ranks[idx] = rank;
        }
    }

    ranks
}

/// Render a rank as an ordinal: 1st, 2nd, 3rd, 4th... The teens all take
/// "th" regardless of their last digit.
pub fn ordinal(rank: u32) -> String {
    let suffix = if (10..=20).contains(&(rank % 100)) {
        "th"
    } else {
        match rank % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", rank, suffix)
}

fn to_row(record: &ScoreRecord, rank: String) -> ReportRow {
    ReportRow {
        date: record.event_date.format(ROW_DATE_FORMAT).to_string(),
        rank,
        division: record.division.clone(),
        school: record.school.clone(),
        score: record.score,
        location: record.location.clone(),
        host: format!("@ {}", record.event_host),
    }
}

fn parse_row_date(text: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(text, ROW_DATE_FORMAT)
        .unwrap_or(chrono::NaiveDate::MIN)
}
