use async_trait::async_trait;
use neows_rater::error::FeedError;
use neows_rater::fetch::HttpClient;
use neows_rater::infra::neows::NeoWsClient;
use neows_rater::model::DateRange;
use neows_rater::parser::{flatten_feed, parse_feed};
use neows_rater::risk::{self, CloseApproach, RiskLevel};
use neows_rater::services::NeoFeed;
use neows_rater::tools;
use reqwest::Url;
use serde_json::json;

// Captured NeoWs feed response, two dates with six objects.
const FEED_FIXTURE: &[u8] = include_bytes!("fixtures/neows_feed.json");

struct FixtureClient;

#[async_trait]
impl HttpClient for FixtureClient {
    async fn get_bytes(&self, _url: &Url) -> Result<Vec<u8>, FeedError> {
        Ok(FEED_FIXTURE.to_vec())
    }
}

struct NoNetwork;

#[async_trait]
impl HttpClient for NoNetwork {
    async fn get_bytes(&self, _url: &Url) -> Result<Vec<u8>, FeedError> {
        panic!("validation failures must not reach the network");
    }
}

fn fixture_service() -> NeoWsClient<FixtureClient> {
    NeoWsClient::with_client("https://feed.test/neo/rest/v1/feed", FixtureClient)
        .expect("fixture service")
}

fn range() -> DateRange {
    DateRange::new("2025-09-01", "2025-09-02")
}

#[test]
fn test_full_pipeline() {
    let feed = parse_feed(FEED_FIXTURE);
    let asteroids = flatten_feed(&feed);

    assert_eq!(asteroids.len(), 6);
}

#[tokio::test]
async fn test_fetch_returns_sorted_records() {
    let fetched = fixture_service().fetch_asteroids(&range()).await.unwrap();

    assert_eq!(fetched.count, 6);
    assert_eq!(fetched.count, fetched.asteroids.len());

    let ids: Vec<&str> = fetched.asteroids.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        ["3542519", "54016476", "2465633", "3836251", "54339874", "3726710"]
    );

    // Rank never increases down the list; within a rank, diameter never grows.
    for pair in fetched.asteroids.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.risk_level.rank() >= b.risk_level.rank());
        if a.risk_level == b.risk_level {
            assert!(a.diameter_meters >= b.diameter_meters);
        }
    }
}

#[tokio::test]
async fn test_equal_rank_and_diameter_keep_upstream_order() {
    let fetched = fixture_service().fetch_asteroids(&range()).await.unwrap();
    let pos = |id: &str| fetched.asteroids.iter().position(|a| a.id == id).unwrap();

    // Both Medium with identical diameter estimates; the 09-01 record
    // flattens first and must stay first.
    assert!(pos("3836251") < pos("54339874"));
}

#[tokio::test]
async fn test_missing_close_approach_gets_defaults() {
    let fetched = fixture_service().fetch_asteroids(&range()).await.unwrap();
    let masked = fetched
        .asteroids
        .iter()
        .find(|a| a.id == "54016476")
        .unwrap();

    assert_eq!(masked.relative_velocity_kps, 0.0);
    assert_eq!(masked.miss_distance_km, 0.0);
    assert_eq!(masked.close_approach_date, "2025-09-02");
    // Zero miss distance counts as a near pass, so the hazardous 160m rock
    // still lands in High.
    assert_eq!(masked.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn test_summary_consistent_with_fetch() {
    let service = fixture_service();
    let fetched = service.fetch_asteroids(&range()).await.unwrap();
    let summary = service.summarize_asteroid_risk(&range()).await.unwrap();

    assert_eq!(summary.total, fetched.count);
    assert_eq!(
        summary.by_risk.low + summary.by_risk.medium + summary.by_risk.high,
        summary.total
    );
    assert_eq!(summary.by_risk.high, 2);
    assert_eq!(summary.by_risk.medium, 3);
    assert_eq!(summary.by_risk.low, 1);

    // Reclassifying the detailed records independently must agree.
    let mut counts = (0, 0, 0);
    for asteroid in &fetched.asteroids {
        let level = risk::classify(&CloseApproach {
            hazardous: asteroid.hazardous,
            diameter_meters: asteroid.diameter_meters,
            relative_velocity_kps: asteroid.relative_velocity_kps,
            miss_distance_km: asteroid.miss_distance_km,
        });
        assert_eq!(level, asteroid.risk_level);
        match level {
            RiskLevel::Low => counts.0 += 1,
            RiskLevel::Medium => counts.1 += 1,
            RiskLevel::High => counts.2 += 1,
        }
    }
    assert_eq!(
        counts,
        (summary.by_risk.low, summary.by_risk.medium, summary.by_risk.high)
    );

    assert!(summary.top_high_risk.len() <= 5);
    assert!(summary.top_high_risk.len() <= summary.by_risk.high);
    let top_ids: Vec<&str> = summary.top_high_risk.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(top_ids, ["3542519", "54016476"]);
    for top in &summary.top_high_risk {
        let detail = fetched.asteroids.iter().find(|a| a.id == top.id).unwrap();
        assert_eq!(detail.risk_level, RiskLevel::High);
    }
}

#[tokio::test]
async fn test_dispatch_round_trip() {
    let service = fixture_service();
    let args = json!({ "startDate": "2025-09-01", "endDate": "2025-09-02" });

    let fetched = tools::dispatch(&service, tools::FETCH_ASTEROIDS, &args)
        .await
        .unwrap();
    assert_eq!(fetched["count"], 6);
    let first = &fetched["asteroids"][0];
    assert_eq!(first["id"], "3542519");
    assert_eq!(first["riskLevel"], "HIGH");
    assert!(first["diameterMeters"].is_number());
    assert!(first["hazardous"].as_bool().unwrap());

    let summary = tools::dispatch(&service, tools::SUMMARIZE_ASTEROID_RISK, &args)
        .await
        .unwrap();
    assert_eq!(summary["total"], 6);
    assert_eq!(summary["byRisk"]["HIGH"], 2);
    assert_eq!(summary["byRisk"]["MEDIUM"], 3);
    assert_eq!(summary["byRisk"]["LOW"], 1);
    assert_eq!(summary["topHighRisk"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_dispatch_rejects_bad_input() {
    let service = fixture_service();

    let err = tools::dispatch(&service, "listAsteroids", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::UnknownTool(_)));

    let err = tools::dispatch(
        &service,
        tools::FETCH_ASTEROIDS,
        &json!({ "startDate": "2025/09/01", "endDate": "2025-09-02" }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, FeedError::Validation(_)));

    let err = tools::dispatch(&service, tools::SUMMARIZE_ASTEROID_RISK, &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::Validation(_)));
}

#[tokio::test]
async fn test_validation_failures_never_reach_network() {
    let service = NeoWsClient::with_client("https://feed.test/feed", NoNetwork).unwrap();
    let err = service
        .fetch_asteroids(&DateRange::new("tomorrow", "2025-09-02"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedError::Validation(_)));
}
