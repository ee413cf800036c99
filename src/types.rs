use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for the Date column of the report.
pub const ROW_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// An event card accepted from the index page.
#[derive(Debug, Clone)]
pub struct DiscoveredEvent {
    pub url: String,
    pub host: String,
    /// Date string as printed on the card, e.g. "Sat, Sep 28".
    pub date_text: String,
    pub date: NaiveDate,
    /// Two-letter state code taken from the card's location line.
    pub state: String,
}

/// One row of an event's published schedule table.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub unit_name: String,
    /// Lowercased unit name, the lookup key for reconciliation.
    pub normalized_name: String,
    pub location: String,
    pub division_number: Option<String>,
    pub division_class: Option<String>,
}

/// Raw score tuple pulled from a results table row, before numeric parsing.
#[derive(Debug, Clone)]
pub struct RawScore {
    pub division: String,
    pub rank: String,
    pub school: String,
    pub score: String,
}

/// A fully assembled score for one school at one event.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub event_host: String,
    pub event_date: NaiveDate,
    pub division: String,
    pub school: String,
    /// Rank as printed on the event page; None when the rank cell
    /// carried no number (exhibition or unranked row).
    pub rank: Option<u32>,
    pub score: f64,
    pub location: String,
}

/// One CSV row of the weekly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Host")]
    pub host: String,
}

/// Where the Rank column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankSource {
    /// Trust the integer rank printed on each event page.
    Verbatim,
    /// Recompute ranks per division across all events of the run
    /// and render them as ordinals ("1st", "2nd", ...).
    Recomputed,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub events_url: String,
    pub target_states: Vec<String>,
    pub rank_source: RankSource,
    /// Year used when parsing the index page's year-less date strings.
    /// Dates near a year boundary are mis-parsed unless this is set.
    pub year_override: Option<i32>,
    /// Report recipient; email is skipped when unset.
    pub recipient: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_url: "https://usbands.org/events/".to_string(),
            target_states: vec!["NJ".to_string(), "NY".to_string(), "PA".to_string()],
            rank_source: RankSource::Recomputed,
            year_override: None,
            recipient: None,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
        }
    }
}
