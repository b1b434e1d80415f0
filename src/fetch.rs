use crate::error::ScrapeError;
use reqwest::blocking::Client;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Source of product pages and images.
pub trait Fetch {
    /// Body of a product page. Any non-2xx status is an error.
    fn fetch_page(&self, url: &str) -> Result<String, ScrapeError>;

    /// Image bytes, or `None` when the server answers with anything but 200.
    fn fetch_image(&self, url: &str) -> Result<Option<Vec<u8>>, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::http("<client>", e))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        tracing::debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(|e| ScrapeError::http(url, e))
    }

    fn fetch_image(&self, url: &str) -> Result<Option<Vec<u8>>, ScrapeError> {
        tracing::debug!(url, "fetching image");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::http(url, e))?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(url, status = %response.status(), "image not available");
            return Ok(None);
        }

        let bytes = response.bytes().map_err(|e| ScrapeError::http(url, e))?;
        Ok(Some(bytes.to_vec()))
    }
}
