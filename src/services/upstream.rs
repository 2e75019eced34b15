// src/services/upstream.rs
use log::{error, info};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::Record;

const PERIOD: &str = "annual";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream response is not a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the annual income-statement endpoint of one symbol.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self {
            client,
            url: config.income_statement_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the full annual income-statement history, in upstream order.
    pub async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        info!("Fetching income statements from {} (period={})", self.url, PERIOD);

        let response = self
            .client
            .get(&self.url)
            .query(&[("period", PERIOD), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Upstream responded with {}", status);
            // An unreadable error body must not hide the status.
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;

        let records: Vec<Record> = serde_json::from_str(&body)?;
        info!("Fetched {} income statement records", records.len());
        Ok(records)
    }
}
