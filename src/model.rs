//! Record and result types for the feed operations.
//!
//! Wire names follow the hosting contract: camelCase fields, UPPERCASE risk
//! keys. Everything here lives for one request/response cycle.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// Inclusive date range, the input contract of both operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// One normalized near-earth object with its computed risk level.
/// Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    pub hazardous: bool,
    pub diameter_meters: f64,
    pub relative_velocity_kps: f64,
    pub miss_distance_km: f64,
    pub close_approach_date: String,
    pub risk_level: RiskLevel,
}

/// Detailed fetch output: the sorted records plus their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub count: usize,
    pub asteroids: Vec<Asteroid>,
}

/// Per-level counts. A struct rather than a map so all three keys are always
/// present on the wire, zeroes included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskCounts {
    /// Increments the counter for `level`.
    pub fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Projection of a High-risk asteroid for the summary view. The risk level
/// is omitted: every element is High by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskAsteroid {
    pub id: String,
    pub name: String,
    pub diameter_meters: f64,
    pub relative_velocity_kps: f64,
    pub miss_distance_km: f64,
}

impl From<&Asteroid> for HighRiskAsteroid {
    fn from(asteroid: &Asteroid) -> Self {
        Self {
            id: asteroid.id.clone(),
            name: asteroid.name.clone(),
            diameter_meters: asteroid.diameter_meters,
            relative_velocity_kps: asteroid.relative_velocity_kps,
            miss_distance_km: asteroid.miss_distance_km,
        }
    }
}

/// Aggregated view built atop a detailed fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub total: usize,
    pub by_risk: RiskCounts,
    pub top_high_risk: Vec<HighRiskAsteroid>,
}

/// Stable descending report order: risk rank first, diameter as tie-break.
/// Records with equal rank and diameter keep their upstream order.
pub fn sort_by_risk(asteroids: &mut [Asteroid]) {
    asteroids.sort_by(|a, b| {
        b.risk_level
            .rank()
            .cmp(&a.risk_level.rank())
            .then_with(|| {
                b.diameter_meters
                    .partial_cmp(&a.diameter_meters)
                    .unwrap_or(Ordering::Equal)
            })
    });
}
