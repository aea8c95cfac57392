//! HTTP client helpers for tests.

use paiwan::gateway::TranslateResponse;
use paiwan::gateway::error::ErrorResponse;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad request: {0:?}")]
    BadRequest(ErrorResponse),
    #[error("unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

/// Translation plus the `Connection` header the server sent.
pub struct Translated {
    pub body: TranslateResponse,
    pub connection: Option<String>,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn translate(&self, path: &str, text: &str) -> Result<Translated, TestClientError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        let connection = resp
            .headers()
            .get(reqwest::header::CONNECTION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);

        match resp.status().as_u16() {
            200 => Ok(Translated {
                body: resp.json().await?,
                connection,
            }),
            400 => Err(TestClientError::BadRequest(resp.json().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn paiwan_to_chinese(&self, text: &str) -> Result<Translated, TestClientError> {
        self.translate("/translate/paiwan-to-chinese", text).await
    }

    pub async fn chinese_to_paiwan(&self, text: &str) -> Result<Translated, TestClientError> {
        self.translate("/translate/chinese-to-paiwan", text).await
    }

    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, TestClientError> {
        Ok(self.client.get(self.url(path)).send().await?.json().await?)
    }
}
