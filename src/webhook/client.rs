use std::time::Duration;

use anyhow::{Result, anyhow};
use log::debug;
use serde::Deserialize;

use crate::domain::email::RawEmail;
use crate::webhook::MailWebhook;

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    output: Option<String>,
}

/// Blocking HTTP client for the two workflow-automation endpoints.
pub struct WebhookClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { base_url, http })
    }
}

impl MailWebhook for WebhookClient {
    fn fetch_unread(&self) -> Result<Vec<RawEmail>> {
        let url = format!("{}/webhook/get-unread-emails", self.base_url);
        debug!("GET {url}");

        let res = self.http.get(&url).send()?;
        if !res.status().is_success() {
            return Err(anyhow!("unread-mail endpoint returned {}", res.status()));
        }

        let batch: Vec<RawEmail> = res.json()?;
        debug!("fetched {} unread emails", batch.len());
        Ok(batch)
    }

    fn summarize_unread(&self) -> Result<String> {
        let url = format!("{}/webhook/summarize-unread", self.base_url);
        debug!("POST {url}");

        // The endpoint takes no request body; it summarizes whatever the
        // workflow engine currently considers unread.
        let res = self.http.post(&url).send()?;
        if !res.status().is_success() {
            return Err(anyhow!("summarize endpoint returned {}", res.status()));
        }

        let body: SummarizeResponse = res.json()?;
        match body.output {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(anyhow!("summarize endpoint returned no output")),
        }
    }
}
