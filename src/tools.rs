//! Named-operation contracts for the hosting runtime.
//!
//! Each tool pairs a wire name with declared input/output schemas, and
//! [`dispatch`] routes an invocation by name to the feed service. Tool and
//! field names are wire contract, camelCase included.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::FeedError;
use crate::model::DateRange;
use crate::services::NeoFeed;
use crate::validate;

pub const FETCH_ASTEROIDS: &str = "fetchAsteroids";
pub const SUMMARIZE_ASTEROID_RISK: &str = "summarizeAsteroidRisk";

/// A named operation with its declared contracts, as registered with the
/// hosting collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub output_schema: Value,
}

/// The registration table: one spec per exposed operation.
pub fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: FETCH_ASTEROIDS,
            description: "Fetch near-earth objects from the NASA NeoWs feed for an \
                          inclusive date range and classify each by risk level.",
            input_schema: date_range_schema(),
            output_schema: fetch_output_schema(),
        },
        ToolSpec {
            name: SUMMARIZE_ASTEROID_RISK,
            description: "Summarize asteroid risk for an inclusive date range: counts \
                          per risk level and the top high-risk objects.",
            input_schema: date_range_schema(),
            output_schema: summary_output_schema(),
        },
    ]
}

/// Routes one invocation. Unknown names fail before the arguments are
/// looked at; argument validation failures fail before any fetch.
pub async fn dispatch(
    service: &impl NeoFeed,
    name: &str,
    args: &Value,
) -> Result<Value, FeedError> {
    match name {
        FETCH_ASTEROIDS => {
            let range = parse_range(args)?;
            let fetched = service.fetch_asteroids(&range).await?;
            Ok(serde_json::to_value(fetched).expect("fetch result serializes"))
        }
        SUMMARIZE_ASTEROID_RISK => {
            let range = parse_range(args)?;
            let summary = service.summarize_asteroid_risk(&range).await?;
            Ok(serde_json::to_value(summary).expect("summary result serializes"))
        }
        other => Err(FeedError::UnknownTool(other.to_string())),
    }
}

fn parse_range(args: &Value) -> Result<DateRange, FeedError> {
    let range: DateRange = serde_json::from_value(args.clone())
        .map_err(|e| FeedError::Validation(format!("invalid arguments: {e}")))?;
    validate::date_range(&range)?;
    Ok(range)
}

fn date_range_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "startDate": {
                "type": "string",
                "pattern": validate::DATE_PATTERN,
                "description": "Start of the range, YYYY-MM-DD",
            },
            "endDate": {
                "type": "string",
                "pattern": validate::DATE_PATTERN,
                "description": "End of the range (inclusive), YYYY-MM-DD",
            },
        },
        "required": ["startDate", "endDate"],
    })
}

fn asteroid_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "hazardous": { "type": "boolean" },
            "diameterMeters": { "type": "number" },
            "relativeVelocityKps": { "type": "number" },
            "missDistanceKm": { "type": "number" },
            "closeApproachDate": { "type": "string" },
            "riskLevel": { "type": "string", "enum": ["LOW", "MEDIUM", "HIGH"] },
        },
        "required": [
            "id", "name", "hazardous", "diameterMeters", "relativeVelocityKps",
            "missDistanceKm", "closeApproachDate", "riskLevel",
        ],
    })
}

fn fetch_output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "count": { "type": "integer", "minimum": 0 },
            "asteroids": { "type": "array", "items": asteroid_schema() },
        },
        "required": ["count", "asteroids"],
    })
}

fn summary_output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "total": { "type": "integer", "minimum": 0 },
            "byRisk": {
                "type": "object",
                "properties": {
                    "LOW": { "type": "integer", "minimum": 0 },
                    "MEDIUM": { "type": "integer", "minimum": 0 },
                    "HIGH": { "type": "integer", "minimum": 0 },
                },
                "required": ["LOW", "MEDIUM", "HIGH"],
            },
            "topHighRisk": {
                "type": "array",
                "maxItems": 5,
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "diameterMeters": { "type": "number" },
                        "relativeVelocityKps": { "type": "number" },
                        "missDistanceKm": { "type": "number" },
                    },
                    "required": [
                        "id", "name", "diameterMeters", "relativeVelocityKps",
                        "missDistanceKm",
                    ],
                },
            },
        },
        "required": ["total", "byRisk", "topHighRisk"],
    })
}
