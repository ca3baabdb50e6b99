//! Close-approach risk scoring.
//!
//! A pure additive point score over four physical parameters, thresholded
//! into three levels. Deterministic, no I/O, never fails: zero or missing
//! inputs simply score low.

use serde::{Deserialize, Serialize};

/// Physical parameters of a single close-approach event.
///
/// Values arrive already normalized: non-negative, with 0 standing in for
/// anything the upstream record did not carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseApproach {
    pub hazardous: bool,
    pub diameter_meters: f64,
    pub relative_velocity_kps: f64,
    pub miss_distance_km: f64,
}

/// Derived risk category, ordered `High > Medium > Low`.
///
/// Serialized on the wire as `"LOW"` / `"MEDIUM"` / `"HIGH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Numeric rank used for sorting: High=3, Medium=2, Low=1.
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::High => 3,
            RiskLevel::Medium => 2,
            RiskLevel::Low => 1,
        }
    }
}

/// Computes the additive point score for one approach event.
///
/// | Factor              | +2         | +1           |
/// |---------------------|------------|--------------|
/// | hazardous flag      | set        | —            |
/// | diameter (m)        | >= 140     | >= 50        |
/// | velocity (km/s)     | >= 25      | >= 15        |
/// | miss distance (km)  | <= 500_000 | <= 2_000_000 |
///
/// All boundaries are inclusive. Range 0..=8.
pub fn score(event: &CloseApproach) -> u8 {
    let mut score = 0;

    if event.hazardous {
        score += 2;
    }

    score += match event.diameter_meters {
        d if d >= 140.0 => 2,
        d if d >= 50.0 => 1,
        _ => 0,
    };

    score += match event.relative_velocity_kps {
        v if v >= 25.0 => 2,
        v if v >= 15.0 => 1,
        _ => 0,
    };

    score += match event.miss_distance_km {
        m if m <= 500_000.0 => 2,
        m if m <= 2_000_000.0 => 1,
        _ => 0,
    };

    score
}

/// Maps an event's score to its level: >= 5 is High, >= 3 is Medium,
/// everything else Low.
pub fn classify(event: &CloseApproach) -> RiskLevel {
    match score(event) {
        s if s >= 5 => RiskLevel::High,
        s if s >= 3 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}
