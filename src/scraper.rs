use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;

use crate::parser::parse_status_fields;
use crate::types::Facility;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a facility's live status page and extract its field map.
    /// Non-2xx responses are treated as transport failures.
    pub async fn fetch_status_fields(
        &self,
        facility: Facility,
    ) -> Result<HashMap<String, String>, ScraperError> {
        let url = facility.status_url();
        log::info!("Fetching {facility} status from {url}");

        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let fields = parse_status_fields(&html);
        log::debug!("Extracted {} fields for {facility}", fields.len());
        Ok(fields)
    }
}
