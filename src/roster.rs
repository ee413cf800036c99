//! Schedule roster extraction from an event detail page.
//!
//! The roster maps performing units to their home city/state. Not every
//! event publishes one; an empty roster is a normal outcome.

use crate::events::{element_text, select_first};
use crate::types::RosterEntry;
use scraper::{ElementRef, Html, Selector};

/// Extract the schedule roster, in schedule order. Returns an empty Vec
/// when the page has no "Schedule" heading or no table after it.
pub fn extract(html: &str) -> Vec<RosterEntry> {
    let document = Html::parse_document(html);

    let Some(table) = find_schedule_table(&document) else {
        return Vec::new();
    };

    let Ok(row_selector) = Selector::parse("tr.performingUnit") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for row in table.select(&row_selector) {
        if let Some(entry) = parse_unit_row(row) {
            entries.push(entry);
        }
    }
    entries
}

/// The schedule table is the first table after the "Schedule" heading,
/// in document order.
fn find_schedule_table<'a>(document: &'a Html) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("h2, table").ok()?;
    let mut past_heading = false;

    for element in document.select(&selector) {
        match element.value().name() {
            "h2" if !past_heading => {
                if element_text(element) == "Schedule" {
                    past_heading = true;
                }
            }
            "table" if past_heading => return Some(element),
            _ => {}
        }
    }
    None
}

fn parse_unit_row(row: ElementRef) -> Option<RosterEntry> {
    // unit name comes from the link nested in the unit cell
    let unit_cell = select_first(row, "td.unit")?;
    let unit_name = element_text(select_first(unit_cell, "a")?);
    let location = element_text(select_first(row, "div.cityState")?);

    if unit_name.is_empty() || location.is_empty() {
        return None;
    }

    let division_number = select_first(row, "td.divisionNumber")
        .map(element_text)
        .filter(|s| !s.is_empty());
    let division_class = select_first(row, "td.divisionClass")
        .map(element_text)
        .filter(|s| !s.is_empty());

    Some(RosterEntry {
        normalized_name: unit_name.to_lowercase(),
        unit_name,
        location,
        division_number,
        division_class,
    })
}
