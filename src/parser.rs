//! Lenient decode and flattening of the NeoWs feed payload.
//!
//! The upstream groups objects by calendar date under `near_earth_objects`.
//! Everything here is defensive: missing or malformed nested fields become
//! documented defaults, so one bad record can never abort a batch, and an
//! undecodable body yields an empty feed rather than an error.

use serde_json::Value;
use tracing::warn;

use crate::model::Asteroid;
use crate::risk::{self, CloseApproach};

/// Decodes a raw response body into JSON.
///
/// A body that is not valid JSON is logged and mapped to `Value::Null`,
/// which flattens to an empty feed. Only transport-level failures are
/// errors; payload shape never is.
pub fn parse_feed(bytes: &[u8]) -> Value {
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, bytes = bytes.len(), "Feed body is not valid JSON, treating as empty");
            Value::Null
        }
    }
}

/// Flattens the date-grouped `near_earth_objects` mapping into one sequence:
/// all dates, then all objects per date, in upstream iteration order. The
/// caller owns any further sorting.
pub fn flatten_feed(feed: &Value) -> Vec<Asteroid> {
    let Some(by_date) = feed.get("near_earth_objects").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (date, objects) in by_date {
        let Some(objects) = objects.as_array() else {
            continue;
        };
        for neo in objects {
            if let Some(asteroid) = normalize(date, neo) {
                out.push(asteroid);
            }
        }
    }
    out
}

/// Normalizes one raw record, applying the documented defaults.
///
/// The first `close_approach_data` entry is authoritative. Without one,
/// velocity and miss distance default to 0 and the approach date falls back
/// to the grouping date key. Returns `None` only for records with no usable
/// id or name.
fn normalize(date_key: &str, neo: &Value) -> Option<Asteroid> {
    let (Some(id), Some(name)) = (coerce_string(&neo["id"]), coerce_string(&neo["name"])) else {
        warn!(date = date_key, "Skipping feed record without id/name");
        return None;
    };

    let diameter_meters =
        coerce_f64(&neo["estimated_diameter"]["meters"]["estimated_diameter_max"]);

    let approach = neo["close_approach_data"]
        .as_array()
        .and_then(|entries| entries.first());

    let (relative_velocity_kps, miss_distance_km, close_approach_date) = match approach {
        Some(event) => (
            coerce_f64(&event["relative_velocity"]["kilometers_per_second"]),
            coerce_f64(&event["miss_distance"]["kilometers"]),
            event["close_approach_date"]
                .as_str()
                .unwrap_or(date_key)
                .to_string(),
        ),
        None => (0.0, 0.0, date_key.to_string()),
    };

    let hazardous = neo["is_potentially_hazardous_asteroid"]
        .as_bool()
        .unwrap_or(false);

    let risk_level = risk::classify(&CloseApproach {
        hazardous,
        diameter_meters,
        relative_velocity_kps,
        miss_distance_km,
    });

    Some(Asteroid {
        id,
        name,
        hazardous,
        diameter_meters,
        relative_velocity_kps,
        miss_distance_km,
        close_approach_date,
        risk_level,
    })
}

/// Coerces a JSON number or numeric string to f64. Anything else — absent,
/// null, or unparseable — is the documented 0.0 default.
fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerces a JSON string or number to an owned string; `None` otherwise.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
