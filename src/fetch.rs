use anyhow::{bail, Result};
use reqwest::blocking::Client;
use std::time::Duration;

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent("Mozilla/5.0 (compatible; BandScoresBot/1.0)")
        .timeout(Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body; non-success statuses are errors.
pub fn get_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        bail!("status code: {}", response.status().as_u16());
    }
    Ok(response.text()?)
}
