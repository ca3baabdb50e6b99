use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::client::HttpClient;
use crate::error::FeedError;

/// Client-side bound on one feed call. The single suspension point either
/// completes, times out, or errors within this window; there is no retry.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(15);

/// Production client: plain reqwest with the feed timeout applied.
#[derive(Debug)]
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(FEED_TIMEOUT).build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, FeedError> {
        let resp = self.0.get(url.clone()).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }
}
