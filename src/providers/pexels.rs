//! Pexels image search provider
//!
//! Pexels serves stock photos over a JSON API authenticated with an API key
//! in the `Authorization` header. The gateway only ever consumes the first
//! hit, so a single result per page is requested.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, LookupResult};
use crate::types::{ImageHit, ImageProvider, Orientation, ProviderId};

const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const PER_PAGE: u32 = 1;

/// Photo entry as returned by the Pexels search endpoint
#[derive(Debug, Deserialize, Serialize)]
struct PexelsPhoto {
    id: Option<u64>,
    photographer: String,
    photographer_url: Option<String>,
    alt: Option<String>,
    src: PexelsSrc,
}

/// Image renditions keyed by size
#[derive(Debug, Deserialize, Serialize)]
struct PexelsSrc {
    large: String,
    original: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

/// Pexels search API provider
#[derive(Debug, Clone)]
pub struct PexelsProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl PexelsProvider {
    /// Create a new Pexels provider with the given API key
    pub fn new(api_key: &str) -> LookupResult<Self> {
        if api_key.trim().is_empty() {
            return Err(LookupError::Config(
                "Pexels API key is required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LookupError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            client,
        })
    }

    /// Set a custom search endpoint (for testing)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Override the fixed request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait::async_trait]
impl ImageProvider for PexelsProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Pexels
    }

    async fn search(
        &self,
        query: &str,
        orientation: &Orientation,
    ) -> LookupResult<Vec<ImageHit>> {
        let params = [
            ("query", query.to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("orientation", orientation.to_string()),
        ];

        log::debug!("Pexels search: query={query} orientation={orientation}");

        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", self.api_key.as_str())
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(LookupError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PexelsResponse = serde_json::from_str(&body)
            .map_err(|e| LookupError::Decode(format!("Unexpected Pexels payload: {e}")))?;

        let hits = parsed
            .photos
            .into_iter()
            .map(|photo| {
                let raw = serde_json::to_value(&photo).ok();
                ImageHit {
                    image_url: photo.src.large,
                    photographer: photo.photographer,
                    provider: ProviderId::Pexels,
                    raw,
                }
            })
            .collect();

        Ok(hits)
    }
}
