//! HTTP tests for the proposal API

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, ProposalId};
use domain_proposal::{InMemoryProposalStore, NewProposal, Proposal, ProposalStore};
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::dto::proposal::CreateProposalResponse;
use interface_api::error::ErrorResponse;
use test_utils::{DocumentFixtures, RequestFixtures};

fn server_with(store: Arc<dyn ProposalStore>) -> TestServer {
    TestServer::new(create_router(store, ApiConfig::default())).unwrap()
}

fn server() -> TestServer {
    server_with(Arc::new(InMemoryProposalStore::new()))
}

fn valid_body(document: &str) -> Value {
    json!({
        "name": "Ana",
        "document": document,
        "email": "a@b.com",
        "address": "St 1",
        "salary": "1000"
    })
}

/// Store that loses every existence-check race
struct RacingStore;

impl DomainPort for RacingStore {}

#[async_trait]
impl HealthCheckable for RacingStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "racing".to_string(),
            status: AdapterHealth::Unhealthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ProposalStore for RacingStore {
    async fn exists_by_document(&self, _document: &str) -> Result<bool, PortError> {
        Ok(false)
    }

    async fn save(&self, _proposal: NewProposal) -> Result<Proposal, PortError> {
        Err(PortError::conflict("duplicate key value violates unique constraint"))
    }

    async fn find_by_id(&self, _id: ProposalId) -> Result<Option<Proposal>, PortError> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_scenario_a_created() {
    let store = Arc::new(InMemoryProposalStore::new());
    let server = server_with(store.clone());

    let response = server
        .post("/api/v1/proposals")
        .json(&valid_body(DocumentFixtures::cpf()))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: CreateProposalResponse = response.json();
    assert!(body.created_at.seconds > 0);

    let id: ProposalId = body.id.parse().unwrap();
    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.document, DocumentFixtures::cpf());
    assert_eq!(stored.created_at.timestamp(), body.created_at.seconds);
}

#[tokio::test]
async fn test_scenario_b_already_exists() {
    let server = server();
    server
        .post("/api/v1/proposals")
        .json(&valid_body(DocumentFixtures::cnpj()))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/proposals")
        .json(&valid_body(DocumentFixtures::cnpj()))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let raw: Value = response.json();
    assert!(raw.get("details").is_none());

    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "ALREADY_EXISTS");
    assert_eq!(body.message, "Document already exists");
}

#[tokio::test]
async fn test_scenario_c_invalid_argument() {
    let response = server()
        .post("/api/v1/proposals")
        .json(&json!({
            "name": "",
            "document": "123",
            "email": "not-an-email",
            "address": "",
            "salary": "-5"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "INVALID_ARGUMENT");
    assert_eq!(body.message, "Invalid parameters");

    let details = body.details.unwrap();
    let fields: Vec<&str> = details.iter().map(|d| d.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "address", "salary", "document"]);
    assert_eq!(details[4].description, "Document is not a valid: CPF or CNPJ");
}

#[tokio::test]
async fn test_scenario_d_race_is_already_exists() {
    let response = server_with(Arc::new(RacingStore))
        .post("/api/v1/proposals")
        .json(&valid_body(DocumentFixtures::cpf()))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_duplicate_with_invalid_fields_is_already_exists() {
    let server = server();
    server
        .post("/api/v1/proposals")
        .json(&valid_body(DocumentFixtures::cpf()))
        .await
        .assert_status(StatusCode::CREATED);

    let mut body = valid_body(DocumentFixtures::cpf());
    body["email"] = json!("broken");
    body["salary"] = json!(-1);

    server
        .post("/api/v1/proposals")
        .json(&body)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_numeric_salary_and_formatted_document() {
    let mut body = valid_body(DocumentFixtures::cnpj_formatted());
    body["salary"] = json!(2500.75);

    server()
        .post("/api/v1/proposals")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_numeric_salary_is_stored_without_rounding() {
    let store = Arc::new(InMemoryProposalStore::new());
    let body: Value = serde_json::from_str(&format!(
        r#"{{"name": "Ana", "document": "{}", "email": "a@b.com", "address": "St 1", "salary": 12345678901234567.89}}"#,
        DocumentFixtures::cpf()
    ))
    .unwrap();

    let response = server_with(store.clone())
        .post("/api/v1/proposals")
        .json(&body)
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: CreateProposalResponse = response.json();
    let id: ProposalId = created.id.parse().unwrap();
    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.salary, dec!(12345678901234567.89));
}

#[tokio::test]
async fn test_dash_only_document_is_created() {
    server()
        .post("/api/v1/proposals")
        .json(&valid_body("529982247-25"))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_wrongly_typed_field_is_invalid_argument() {
    let mut body = valid_body(DocumentFixtures::cpf());
    body["name"] = json!(5);

    let response = server().post("/api/v1/proposals").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "INVALID_ARGUMENT");
    assert_eq!(body.message, "Invalid parameters");
    let details = body.details.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].field, "body");
    assert!(!details[0].description.contains("invalid type"));
}

#[tokio::test]
async fn test_malformed_json_is_invalid_argument() {
    let response = server()
        .post("/api/v1/proposals")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"name\": "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "INVALID_ARGUMENT");
    assert_eq!(body.details.unwrap()[0].field, "body");
}

#[tokio::test]
async fn test_random_valid_request_is_created() {
    let request = RequestFixtures::random_valid();
    let body = json!({
        "name": request.name,
        "document": request.document,
        "email": request.email,
        "address": request.address,
        "salary": request.salary.map(|s| s.to_string()),
    });

    server()
        .post("/api/v1/proposals")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_unparseable_salary_is_invalid_argument() {
    let mut body = valid_body(DocumentFixtures::cpf());
    body["salary"] = json!("a lot");

    let response = server().post("/api/v1/proposals").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    let details = body.details.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].field, "salary");
    assert_eq!(details[0].description, "must be a valid decimal number");
}

#[tokio::test]
async fn test_missing_fields_are_reported() {
    let response = server().post("/api/v1/proposals").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    let fields: Vec<String> = body.details.unwrap().into_iter().map(|d| d.field).collect();
    assert_eq!(
        fields,
        vec!["name", "document", "email", "address", "salary", "document"]
    );
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = server();

    server.get("/health").await.assert_status_ok();

    let response = server.get("/health/ready").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["store"]["adapter_id"], "in-memory-proposal-store");
}

#[tokio::test]
async fn test_readiness_reports_unhealthy_store() {
    server_with(Arc::new(RacingStore))
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
