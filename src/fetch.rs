use async_trait::async_trait;

use crate::error::HttpError;
use crate::types::{FetchOptions, ResponseBody};

/// Issues one authenticated GET request.
#[async_trait]
pub trait AuthFetch: Send + Sync {
    async fn get(&self, url: &str, options: &FetchOptions) -> Result<ResponseBody, HttpError>;
}

/// Default fetch backed by a shared `reqwest` client.
///
/// The cookie store is enabled at construction so ambient credentials ride
/// along with every request, matching the upstream's requirement that
/// cookies accompany the bearer header. `Credentials::Omit` is not varied
/// per request here.
#[derive(Clone)]
pub struct BearerFetch {
    http: reqwest::Client,
}

impl BearerFetch {
    pub fn new() -> Result<Self, HttpError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .gzip(true)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl AuthFetch for BearerFetch {
    async fn get(&self, url: &str, options: &FetchOptions) -> Result<ResponseBody, HttpError> {
        tracing::debug!(url, "events API GET");

        let response = self
            .http
            .get(url)
            .bearer_auth(&options.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_status_and_body() {
        let err = HttpError::Status {
            status: 503,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "events API returned 503: upstream down");
    }

    #[test]
    fn test_decode_error_from_bad_json() {
        let err: HttpError = serde_json::from_str::<ResponseBody>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}
