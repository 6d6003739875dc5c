use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::{ResultsSink, SessionSummary};

const USER_AGENT: &str = concat!("notebeat/", env!("CARGO_PKG_VERSION"));

/// Posts the summary as JSON to a results endpoint.
pub struct HttpResultsSink {
    client: Client,
    url: String,
}

impl HttpResultsSink {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ResultsSink for HttpResultsSink {
    fn submit(&mut self, summary: &SessionSummary) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(summary)
            .send()
            .with_context(|| format!("failed to post results to {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("results endpoint returned {status}");
        }
        Ok(())
    }
}
