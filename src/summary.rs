//! Risk aggregation built atop a detailed fetch.

use crate::model::{FetchResult, HighRiskAsteroid, RiskCounts, SummaryResult};
use crate::risk::RiskLevel;

/// Maximum number of projected High-risk entries in a summary.
pub const TOP_HIGH_RISK: usize = 5;

/// Reduces an already-sorted fetch into per-level counts plus the first
/// [`TOP_HIGH_RISK`] High-risk objects, projected without their level.
pub fn summarize(fetched: &FetchResult) -> SummaryResult {
    let mut by_risk = RiskCounts::default();
    for asteroid in &fetched.asteroids {
        by_risk.bump(asteroid.risk_level);
    }

    let top_high_risk = fetched
        .asteroids
        .iter()
        .filter(|a| a.risk_level == RiskLevel::High)
        .take(TOP_HIGH_RISK)
        .map(HighRiskAsteroid::from)
        .collect();

    SummaryResult {
        total: fetched.count,
        by_risk,
        top_high_risk,
    }
}
