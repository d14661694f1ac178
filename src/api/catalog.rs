//! Carflix backend API client
//!
//! Issues the three JSON operations the client needs (list shows, show
//! detail, trigger reload) and derives the thumbnail/video URLs that the
//! rendering side consumes directly as byte streams.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::models::{stream_path, ShowDetail, ShowSummary};

/// Backend API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("not found")]
    NotFound,

    #[error("server returned status {0}")]
    Status(u16),
}

/// Client for the Carflix backend API
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// The server base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and decode the JSON body
    ///
    /// The body is read as text first so a malformed payload maps to
    /// [`ApiError::Decode`] rather than a transport error.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|e| ApiError::Decode(format!("JSON parse error: {}", e)))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// List the full catalog (GET /shows)
    pub async fn list_shows(&self) -> Result<Vec<ShowSummary>, ApiError> {
        self.get_json("/shows").await
    }

    /// Fetch one show's metadata including its episode list (GET /shows/{id})
    pub async fn get_show(&self, id: &str) -> Result<ShowDetail, ApiError> {
        self.get_json(&format!("/shows/{}", id)).await
    }

    /// Ask the backend to rescan its library (POST /reload)
    ///
    /// Any 2xx confirms the request was accepted; the scan itself may still
    /// be running when this returns. The body is ignored either way.
    pub async fn trigger_reload(&self) -> Result<(), ApiError> {
        let url = format!("{}/reload", self.base_url);
        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    // -------------------------------------------------------------------------
    // Derived media URLs (fetched by the player/renderer, not this client)
    // -------------------------------------------------------------------------

    /// Thumbnail URL for a show
    pub fn thumb_url(&self, id: &str) -> String {
        format!("{}/shows/{}/thumb", self.base_url, id)
    }

    /// Stream URL for one episode (or a movie's sentinel video)
    pub fn video_url(&self, sid: &str, vid: &str) -> String {
        format!("{}{}", self.base_url, stream_path(sid, vid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = CatalogClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_thumb_url() {
        let client = CatalogClient::new("http://carflix.local:8080");
        assert_eq!(
            client.thumb_url("m1"),
            "http://carflix.local:8080/shows/m1/thumb"
        );
    }

    #[test]
    fn test_video_url() {
        let client = CatalogClient::new("http://carflix.local:8080");
        assert_eq!(
            client.video_url("s1", "e1"),
            "http://carflix.local:8080/shows/s1/episodes/e1/video"
        );
    }
}
