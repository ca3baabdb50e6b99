//! NASA NeoWs feed client.
//!
//! Holds only stateless read-only configuration (endpoint plus keyed
//! transport), so concurrent invocations share one client without
//! coordination.

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use crate::error::FeedError;
use crate::fetch::auth::UrlParam;
use crate::fetch::{BasicClient, HttpClient};
use crate::model::{DateRange, FetchResult, sort_by_risk};
use crate::parser;
use crate::services::NeoFeed;
use crate::validate;

/// Default NeoWs feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Feed client over a pluggable transport. The production transport is a
/// reqwest client wrapped in the `api_key` query-parameter decorator.
#[derive(Debug)]
pub struct NeoWsClient<C = UrlParam<BasicClient>> {
    base_url: Url,
    http: C,
}

impl NeoWsClient {
    /// Builds the production client from process configuration.
    ///
    /// `NASA_API_KEY` is required; without it this fails with
    /// [`FeedError::Config`] before any network activity. `NEOWS_BASE_URL`
    /// optionally overrides the feed endpoint.
    pub fn from_env() -> Result<Self, FeedError> {
        Self::from_config(
            std::env::var("NASA_API_KEY").ok(),
            std::env::var("NEOWS_BASE_URL").ok(),
        )
    }

    fn from_config(api_key: Option<String>, base_url: Option<String>) -> Result<Self, FeedError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| FeedError::Config("NASA_API_KEY is not set".to_string()))?;

        let http = UrlParam {
            inner: BasicClient::new()
                .map_err(|e| FeedError::Config(format!("failed to build HTTP client: {e}")))?,
            param_name: "api_key".to_string(),
            key: api_key,
        };

        Self::with_client(base_url.as_deref().unwrap_or(DEFAULT_FEED_URL), http)
    }
}

impl<C: HttpClient> NeoWsClient<C> {
    /// Builds a client against `base_url` with a caller-supplied transport.
    pub fn with_client(base_url: &str, http: C) -> Result<Self, FeedError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FeedError::Config(format!("invalid feed URL '{base_url}': {e}")))?;
        Ok(Self { base_url, http })
    }

    /// Feed URL for the range: base plus `start_date`/`end_date` parameters.
    /// The API key is appended by the transport decorator, not here.
    fn feed_url(&self, range: &DateRange) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &range.start_date)
            .append_pair("end_date", &range.end_date);
        url
    }
}

#[async_trait]
impl<C: HttpClient> NeoFeed for NeoWsClient<C> {
    #[tracing::instrument(skip(self, range), fields(start = %range.start_date, end = %range.end_date))]
    async fn fetch_asteroids(&self, range: &DateRange) -> Result<FetchResult, FeedError> {
        validate::date_range(range)?;

        let bytes = self.http.get_bytes(&self.feed_url(range)).await?;
        debug!(bytes = bytes.len(), "Feed body received, normalizing");

        let feed = parser::parse_feed(&bytes);
        let mut asteroids = parser::flatten_feed(&feed);
        sort_by_risk(&mut asteroids);

        info!(count = asteroids.len(), "Feed fetched and classified");
        Ok(FetchResult {
            count: asteroids.len(),
            asteroids,
        })
    }
}
