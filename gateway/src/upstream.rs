//! Client for the upstream numbers service.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur talking to the numbers service
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Numbers service returned status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Payload returned by the numbers service.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NumbersPayload {
    pub num1: i64,
    pub num2: i64,
}

/// Trait for numbers service implementations.
#[async_trait]
pub trait NumbersService: Send + Sync {
    /// Fetch the pair of numbers to be summed.
    async fn fetch_numbers(&self) -> Result<NumbersPayload, UpstreamError>;
}

/// Numbers service reached over HTTP.
pub struct HttpNumbersService {
    url: String,
    client: reqwest::Client,
}

impl HttpNumbersService {
    /// Create a new client for the given service URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NumbersService for HttpNumbersService {
    async fn fetch_numbers(&self) -> Result<NumbersPayload, UpstreamError> {
        tracing::debug!("Fetching numbers from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(
                "User-Agent",
                format!("gateway/{}", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let payload: NumbersPayload = response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidPayload(e.to_string()))?;

        Ok(payload)
    }
}

/// Mock numbers service for testing.
#[derive(Debug)]
pub struct MockNumbersService {
    payload: Option<NumbersPayload>,
}

impl MockNumbersService {
    /// Mock that answers every fetch with the given pair.
    pub fn with_numbers(num1: i64, num2: i64) -> Self {
        Self {
            payload: Some(NumbersPayload { num1, num2 }),
        }
    }

    /// Mock whose fetch always fails.
    pub fn failing() -> Self {
        Self { payload: None }
    }
}

#[async_trait]
impl NumbersService for MockNumbersService {
    async fn fetch_numbers(&self) -> Result<NumbersPayload, UpstreamError> {
        match self.payload {
            Some(payload) => Ok(payload),
            None => Err(UpstreamError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_numbers() {
        let service = MockNumbersService::with_numbers(3, 4);
        let payload = service.fetch_numbers().await.unwrap();
        assert_eq!(payload.num1, 3);
        assert_eq!(payload.num2, 4);
    }

    #[tokio::test]
    async fn test_failing_mock_errors() {
        let service = MockNumbersService::failing();
        assert!(service.fetch_numbers().await.is_err());
    }

    #[test]
    fn test_payload_requires_numeric_fields() {
        let result = serde_json::from_str::<NumbersPayload>(r#"{"num1":"3","num2":4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_parses_plain_pair() {
        let payload: NumbersPayload = serde_json::from_str(r#"{"num1":3,"num2":4}"#).unwrap();
        assert_eq!(payload.num1, 3);
        assert_eq!(payload.num2, 4);
    }
}
