use crate::error::SerpApiError;
use crate::models::SerpApiResponse;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

const SERPAPI_BASE_URL: &str = "https://serpapi.com/search.json";

/// SerpApi search client.
///
/// One outbound call per `search` invocation: no retries, no caching.
/// Retry policy belongs to the caller.
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    /// Create a new client. Fails if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SerpApiError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SerpApiError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SerpApiError::Network)?;

        Ok(Self { client, api_key, base_url: SERPAPI_BASE_URL.to_string() })
    }

    /// Override the endpoint; test hook for mock servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue a single search query against the Google engine.
    pub async fn search(&self, query: &str) -> Result<SerpApiResponse, SerpApiError> {
        info!(%query, "querying SerpApi");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("engine", "google"), ("q", query), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(SerpApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SerpApiError::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body: SerpApiResponse = response.json().await.map_err(SerpApiError::Decode)?;

        if let Some(message) = &body.error {
            return Err(SerpApiError::Upstream(message.clone()));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(SerpApiClient::new(""), Err(SerpApiError::MissingApiKey)));
    }

    #[tokio::test]
    async fn successful_search_decodes_sports_results() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::UrlEncoded("q".into(), "Yomiuri Giants standings 2026".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"search_metadata":{"id":"abc123"},
                    "sports_results":{"league":{"standings":[
                        {"team":{"name":"Yomiuri"},"w":"49","l":"40","gb":"-"}]}}}"#,
            )
            .create_async()
            .await;

        let client = SerpApiClient::new("test-key").unwrap().with_base_url(server.url());
        let response = client.search("Yomiuri Giants standings 2026").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.search_id(), "abc123");
        let standings = response
            .sports_results
            .unwrap()
            .league
            .unwrap()
            .standings
            .unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].w.as_deref(), Some("49"));
    }

    #[tokio::test]
    async fn non_2xx_status_is_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = SerpApiClient::new("test-key").unwrap().with_base_url(server.url());
        let err = client.search("anything").await.unwrap_err();

        match err {
            SerpApiError::Transport { status, .. } => assert_eq!(status, 503),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn payload_error_field_is_an_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Google hasn't returned any results for this query."}"#)
            .create_async()
            .await;

        let client = SerpApiClient::new("test-key").unwrap().with_base_url(server.url());
        let err = client.search("anything").await.unwrap_err();

        match err {
            SerpApiError::Upstream(message) => {
                assert!(message.contains("hasn't returned any results"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
