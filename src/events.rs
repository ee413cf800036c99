//! Event discovery from the events index page.
//!
//! Each event is rendered as a Bootstrap card; cards missing any of the
//! expected pieces are skipped without failing the run.

use crate::types::DiscoveredEvent;
use crate::window::ReportWindow;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

/// Parse the index page and keep the cards that fall inside the window
/// and the target state set. Output preserves document order.
pub fn discover(
    html: &str,
    base_url: &str,
    target_states: &[String],
    window: &ReportWindow,
) -> Vec<DiscoveredEvent> {
    let document = Html::parse_document(html);
    let mut events = Vec::new();

    let card_selector = match Selector::parse("div.card.shadow.mb-3.bg-white.border-0") {
        Ok(sel) => sel,
        Err(_) => return events,
    };

    for card in document.select(&card_selector) {
        let Some(candidate) = parse_card(card, base_url) else {
            continue;
        };

        if !target_states.iter().any(|s| s == &candidate.state) {
            continue;
        }

        // The card omits the year; parse against the run's assumed year.
        let dated = format!("{}, {}", candidate.date_text, window.year);
        let Ok(date) = NaiveDate::parse_from_str(&dated, "%a, %b %d, %Y") else {
            continue;
        };

        if !window.contains(date) {
            continue;
        }

        events.push(DiscoveredEvent {
            url: candidate.url,
            host: candidate.host,
            date_text: candidate.date_text,
            date,
            state: candidate.state,
        });
    }

    events
}

struct CardFields {
    url: String,
    host: String,
    date_text: String,
    state: String,
}

/// Pull the raw fields out of one card, or None when the markup is off.
fn parse_card(card: ElementRef, base_url: &str) -> Option<CardFields> {
    let row = select_first(card, "div.row")?;
    let col = select_first(row, "div.col-md-9")?;
    let event_div = select_first(col, "div.event.past")?;

    let date_text = element_text(select_first(col, "h5.card-title")?);
    let host = element_text(select_first(event_div, "a.eventtitle")?);

    let location = element_text(select_first(event_div, "div.location")?);
    let state = location.split(',').next_back()?.trim().to_string();

    let button_col = select_first(row, "div.col-md-3")?;
    let button = select_first(button_col, "a.btn.btn-primary")?;
    let href = button.value().attr("href")?;

    Some(CardFields {
        url: format!("{}{}", base_url, href),
        host,
        date_text,
        state,
    })
}

pub(crate) fn select_first<'a>(element: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    element.select(&sel).next()
}

pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
