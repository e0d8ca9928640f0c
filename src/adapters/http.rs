use crate::domain::ports::{ConfigProvider, RemoteLookupClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://coding-academy.pl/customer/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 舊有 XML web service 的 HTTP 客戶端：`GET {base_url}{cunbr}`
#[derive(Debug, Clone)]
pub struct XmlServiceClient {
    base_url: String,
    client: Client,
}

impl XmlServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.service_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// cunbr 直接接在 base URL 後面，不做編碼
    pub fn endpoint(&self, customer_id: &str) -> String {
        format!("{}{}", self.base_url, customer_id)
    }
}

#[async_trait]
impl RemoteLookupClient for XmlServiceClient {
    async fn fetch(&self, customer_id: &str) -> Result<String> {
        let url = self.endpoint(customer_id);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            tracing::warn!("No data for cunbr '{}': HTTP {}", customer_id, status);
            return Ok(String::new());
        }

        Ok(response.text().await?)
    }
}
