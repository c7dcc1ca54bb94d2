use crate::config::Config;
use crate::core::{DeliveryMode, RequestDescriptor};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

/// Delivers a resolved request. One attempt, no retry.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<()>;
}

/// Talks to the viewer service on the local machine: dispatches over HTTP or
/// opens the page in the default browser.
pub struct LocalSender {
    client: reqwest::Client,
    pub host: String,
    pub port: u16,
}

impl LocalSender {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("streamledge-link/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .no_proxy()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            host: config.server.host.clone(),
            port: config.server.port,
        })
    }

    pub fn url_for(&self, request: &RequestDescriptor) -> String {
        request.local_url(&self.host, self.port)
    }

    async fn dispatch(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Viewer service not reachable at {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Viewer service answered HTTP {} for {}", status, url);
        }

        info!("Dispatched {} (HTTP {})", url, status);
        Ok(())
    }

    fn open_tab(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open browser tab for {}", url))?;
        info!("Opened {} in a new tab", url);
        Ok(())
    }
}

#[async_trait]
impl Sender for LocalSender {
    async fn send(&self, request: &RequestDescriptor) -> Result<()> {
        let url = self.url_for(request);

        let result = match request.delivery_mode {
            DeliveryMode::Dispatch => self.dispatch(&url).await,
            DeliveryMode::NewTab => self.open_tab(&url),
        };

        if let Err(e) = &result {
            warn!("Delivery failed: {:#}", e);
        }
        result
    }
}
