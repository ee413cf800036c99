use anyhow::Result;
use band_scores::window::ReportWindow;
use band_scores::{events, fetch, notify, ranking, roster, scores, storage};

fn main() -> Result<()> {
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());

    let config = storage::load_config(&root)?;
    let window = ReportWindow::compute(chrono::Local::now().date_naive(), config.year_override);

    let client = fetch::build_client()?;
    let index_html = fetch::get_page(&client, &config.events_url)?;

    let discovered = events::discover(
        &index_html,
        &config.events_url,
        &config.target_states,
        &window,
    );
    println!(
        "Found {} events between {} and {}",
        discovered.len(),
        window.start,
        window.today
    );

    let mut all_scores = Vec::new();
    for event in &discovered {
        println!("Fetching scores from: {}", event.url);
        let html = match fetch::get_page(&client, &event.url) {
            Ok(html) => html,
            Err(e) => {
                println!("  Error: unable to access {}: {}", event.url, e);
                continue;
            }
        };

        let Some(raw_scores) = scores::extract(&html) else {
            println!(
                "  Warning: no score table found for event: {} ({})",
                event.host, event.url
            );
            continue;
        };

        let event_roster = roster::extract(&html);
        for raw in &raw_scores {
            if let Some(record) = scores::build_record(raw, &event_roster, event) {
                all_scores.push(record);
            }
        }
    }

    if all_scores.is_empty() {
        println!("No scores were collected. Something went wrong with table extraction.");
        return Ok(());
    }
    println!("Collected {} scores.", all_scores.len());

    let rows = ranking::build_rows(&all_scores, config.rank_source);
    let path = storage::write_report(&rows, &window, &root)?;

    if let Err(e) = notify::send_report(&path, &config) {
        println!("Failed to send email: {}", e);
    }

    Ok(())
}
