//! The two operations this crate exposes to its hosting runtime.

use async_trait::async_trait;

use crate::error::FeedError;
use crate::model::{DateRange, FetchResult, SummaryResult};
use crate::summary;

/// Named feed operations with their documented contracts.
///
/// `summarize_asteroid_risk` is a default method so every implementation
/// keeps the invariant that a summary is built atop the detailed fetch for
/// the same range — never an independent fetch with its own rules.
#[async_trait]
pub trait NeoFeed: Send + Sync {
    /// Fetches, normalizes, classifies, and sorts near-earth objects for the
    /// inclusive date range.
    async fn fetch_asteroids(&self, range: &DateRange) -> Result<FetchResult, FeedError>;

    /// Counts per risk level plus the top High-risk objects for the range.
    async fn summarize_asteroid_risk(
        &self,
        range: &DateRange,
    ) -> Result<SummaryResult, FeedError> {
        let fetched = self.fetch_asteroids(range).await?;
        Ok(summary::summarize(&fetched))
    }
}
