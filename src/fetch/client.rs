use async_trait::async_trait;
use reqwest::Url;

use crate::error::FeedError;

/// Seam over outbound HTTP so operations can run against a stub transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes a GET against `url`, returning the response body on success.
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, FeedError>;
}
