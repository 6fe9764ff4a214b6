//! HTTP API Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.
//!
//! # Test Organization
//!
//! - `health_tests` - Liveness endpoint
//! - `compute_tests` - Inventory computation and error mapping
//! - `lookup_tests` - Asset classification and tax-rate lookup

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_inventory::{Classification, InventoryReport, PropertyRegime, RateSource};
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::dto::inventory::{ClassifyAssetRequest, ClassifyAssetResponse};
use interface_api::dto::tax::TaxRateResponse;
use interface_api::error::ErrorResponse;
use interface_api::handlers::health::HealthResponse;
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use test_utils::*;
use tower::ServiceExt;

fn app() -> Router {
    create_router(ApiConfig::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

fn post_json(uri: &str, json: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// HEALTH TESTS
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = parse(&body);
        assert_eq!(health.status, "healthy");
    }
}

// ============================================================================
// COMPUTE TESTS
// ============================================================================

mod compute_tests {
    use super::*;

    #[tokio::test]
    async fn test_compute_partial_community_couple() {
        let case = CaseFixtures::partial_community_couple();
        let (status, body) = send(post_json(
            "/api/v1/inventories/compute",
            serde_json::to_string(&case).unwrap(),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let report: InventoryReport = parse(&body);
        assert_eq!(report.case_id, case.case_id);
        assert_amount(&report.results[0].marital_share(), dec!(100000));
        assert_amount(&report.results[0].total_tax, dec!(4000));
    }

    #[tokio::test]
    async fn test_every_validation_error_is_listed() {
        let decedent = IdFixtures::decedent();
        let case = CaseBuilder::new()
            .decedent(DecedentBuilder::new().with_id(decedent).build())
            .heir(HeirBuilder::child(IdFixtures::second_decedent()).build())
            .asset(AssetBuilder::new(decedent).with_value(dec!(-10)).build())
            .build();

        let (status, body) = send(post_json(
            "/api/v1/inventories/compute",
            serde_json::to_string(&case).unwrap(),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = parse(&body);
        assert_eq!(error.error, "validation_error");
        assert_eq!(error.details.map(|d| d.len()), Some(2));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, _) = send(post_json(
            "/api/v1/inventories/compute",
            "{not json".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

// ============================================================================
// LOOKUP TESTS
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_classify_clause_asset() {
        let request = ClassifyAssetRequest {
            asset: AssetBuilder::new(IdFixtures::decedent())
                .with_id(IdFixtures::home())
                .with_clause()
                .build(),
            regime: PropertyRegime::UniversalCommunity,
        };

        let (status, body) = send(post_json(
            "/api/v1/assets/classify",
            serde_json::to_string(&request).unwrap(),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: ClassifyAssetResponse = parse(&body);
        assert_eq!(response.asset_id, IdFixtures::home());
        assert_eq!(response.classification, Classification::Separate);
        assert_amount(&response.effective_value, dec!(100000));
    }

    #[tokio::test]
    async fn test_classify_rejects_fraction_outside_unit_interval() {
        for fraction in [dec!(0), dec!(1.5)] {
            let request = ClassifyAssetRequest {
                asset: AssetBuilder::new(IdFixtures::decedent())
                    .with_ownership_fraction(fraction)
                    .build(),
                regime: PropertyRegime::PartialCommunity,
            };

            let (status, body) = send(post_json(
                "/api/v1/assets/classify",
                serde_json::to_string(&request).unwrap(),
            ))
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "Fraction {} should be rejected", fraction);
            let error: ErrorResponse = parse(&body);
            assert_eq!(error.error, "bad_request");
            assert!(error.message.contains("Ownership fraction"));
        }
    }

    #[tokio::test]
    async fn test_classify_half_owned_asset() {
        let request = ClassifyAssetRequest {
            asset: AssetBuilder::new(IdFixtures::decedent())
                .with_ownership_fraction(dec!(0.5))
                .build(),
            regime: PropertyRegime::PartialCommunity,
        };

        let (status, body) = send(post_json(
            "/api/v1/assets/classify",
            serde_json::to_string(&request).unwrap(),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: ClassifyAssetResponse = parse(&body);
        assert_amount(&response.effective_value, dec!(50000));
    }

    #[tokio::test]
    async fn test_known_state_rate() {
        let (status, body) = send(get("/api/v1/tax-rates/sp")).await;
        assert_eq!(status, StatusCode::OK);
        let response: TaxRateResponse = parse(&body);
        assert_eq!(response.jurisdiction, "SP");
        assert_eq!(response.rate, core_kernel::Rate::new(dec!(0.04)));
        assert_eq!(response.source, RateSource::Table);
    }

    #[tokio::test]
    async fn test_unknown_state_uses_default() {
        let (_, body) = send(get("/api/v1/tax-rates/ZZ")).await;
        let response: TaxRateResponse = parse(&body);
        assert_eq!(response.source, RateSource::Default);
    }
}
