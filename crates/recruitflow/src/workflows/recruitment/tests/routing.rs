use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::common::{open_request, service_with_store, StaleStore, UnavailableStore};
use crate::workflows::recruitment::methodology::SelectionMethodology;
use crate::workflows::recruitment::router::{
    advance_handler, recruitment_router, status_handler, AdvanceBody,
};
use crate::workflows::recruitment::service::RecruitmentService;
use crate::workflows::recruitment::taxonomy::SubStage;

fn advance_body(target: &str) -> AdvanceBody {
    AdvanceBody {
        target: target.to_string(),
        date: super::common::posted(),
        actor: None,
        details: None,
        admin_override: false,
    }
}

#[tokio::test]
async fn status_handler_returns_not_found_for_missing_drive() {
    let (service, _store) = service_with_store();
    let response = status_handler(State(Arc::new(service)), Path("rec-missing".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_handler_returns_internal_error_when_store_is_down() {
    let service = Arc::new(RecruitmentService::new(Arc::new(UnavailableStore)));
    let response = status_handler(State(service), Path("rec-000001".to_string())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn advance_handler_rejects_unknown_target_stage() {
    let (service, _store) = service_with_store();
    let service = Arc::new(service);
    let record = service
        .open(open_request(SelectionMethodology::ExamAndInterview))
        .expect("drive opens");

    let response = advance_handler(
        State(service),
        Path(record.id.0.clone()),
        axum::Json(advance_body("background_check")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn advance_handler_rejects_out_of_order_target() {
    let (service, _store) = service_with_store();
    let service = Arc::new(service);
    let record = service
        .open(open_request(SelectionMethodology::ExamAndInterview))
        .expect("drive opens");

    let response = advance_handler(
        State(service),
        Path(record.id.0.clone()),
        axum::Json(advance_body(SubStage::ExamScheduled.as_str())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn advance_handler_maps_lost_race_to_conflict() {
    let service = Arc::new(RecruitmentService::new(Arc::new(StaleStore::new())));
    let record = service
        .open(open_request(SelectionMethodology::ExamAndInterview))
        .expect("drive opens");

    let response = advance_handler(
        State(service),
        Path(record.id.0.clone()),
        axum::Json(advance_body(SubStage::ApplicationsOpen.as_str())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn router_round_trip_open_then_progress() {
    let (service, _store) = service_with_store();
    let app = recruitment_router(Arc::new(service));

    let open_payload = json!({
        "vacancy_code": "VAC-2026-204",
        "title": "Staff Nurse",
        "department": "Public Health",
        "location": "Nagpur",
        "selection_methodology": "interview_only",
        "posted_date": "2026-01-15",
        "closing_date": "2026-02-28",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/recruitments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(open_payload.to_string()))
        .expect("request builds");

    let response = app.clone().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .expect("id present")
        .to_string();
    assert_eq!(
        payload.get("current_sub_stage").and_then(Value::as_str),
        Some("notification_published")
    );
    assert_eq!(
        payload.get("percent_complete").and_then(Value::as_u64),
        Some(5)
    );

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/recruitments/{id}/progress"))
        .body(Body::empty())
        .expect("request builds");
    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let board: Value = serde_json::from_slice(&body).expect("json payload");
    let sub_stages = board
        .get("sub_stages")
        .and_then(Value::as_array)
        .expect("sub-stage rows");
    assert_eq!(sub_stages.len(), 17);
}

#[tokio::test]
async fn open_handler_rejects_unknown_methodology_via_router() {
    let (service, _store) = service_with_store();
    let app = recruitment_router(Arc::new(service));

    let payload = json!({
        "vacancy_code": "VAC-2026-205",
        "title": "Staff Nurse",
        "department": "Public Health",
        "location": "Nagpur",
        "selection_methodology": "written_test",
        "posted_date": "2026-01-15",
        "closing_date": "2026-02-28",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/recruitments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn dashboard_endpoint_reports_tallies() {
    let (service, _store) = service_with_store();
    let service = Arc::new(service);
    service
        .open(open_request(SelectionMethodology::ExamOnly))
        .expect("drive opens");
    let app = recruitment_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/dashboard")
        .body(Body::empty())
        .expect("request builds");
    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload.get("ongoing").and_then(Value::as_u64), Some(1));
    assert_eq!(payload.get("total").and_then(Value::as_u64), Some(1));
}
