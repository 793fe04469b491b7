use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::methodology::SelectionMethodology;
use super::record::RecruitmentId;
use super::service::{AdvanceRequest, OpenRecruitment, RecruitmentService, ServiceError};
use super::store::{RecruitmentStore, StoreError};
use super::taxonomy::SubStage;
use super::transition::TransitionError;
use super::views::ProgressBoard;

/// Router builder exposing the recruitment endpoints.
///
/// Stage changes only go through the validated advance endpoint; there is no
/// generic field-update route that could write an inconsistent stage.
pub fn recruitment_router<S>(service: Arc<RecruitmentService<S>>) -> Router
where
    S: RecruitmentStore + 'static,
{
    Router::new()
        .route("/api/v1/recruitments", post(open_handler::<S>))
        .route("/api/v1/recruitments/:id", get(status_handler::<S>))
        .route(
            "/api/v1/recruitments/:id/progress",
            get(progress_handler::<S>),
        )
        .route(
            "/api/v1/recruitments/:id/advance",
            post(advance_handler::<S>),
        )
        .route("/api/v1/dashboard", get(dashboard_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenRecruitmentBody {
    pub(crate) vacancy_code: String,
    pub(crate) title: String,
    pub(crate) department: String,
    pub(crate) location: String,
    pub(crate) selection_methodology: String,
    pub(crate) posted_date: NaiveDate,
    pub(crate) closing_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdvanceBody {
    pub(crate) target: String,
    pub(crate) date: NaiveDate,
    #[serde(default)]
    pub(crate) actor: Option<String>,
    #[serde(default)]
    pub(crate) details: Option<String>,
    #[serde(default)]
    pub(crate) admin_override: bool,
}

pub(crate) async fn open_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    axum::Json(body): axum::Json<OpenRecruitmentBody>,
) -> Response
where
    S: RecruitmentStore + 'static,
{
    let methodology = match SelectionMethodology::from_str(&body.selection_methodology) {
        Ok(methodology) => methodology,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let request = OpenRecruitment {
        vacancy_code: body.vacancy_code,
        title: body.title,
        department: body.department,
        location: body.location,
        selection_methodology: methodology,
        posted_date: body.posted_date,
        closing_date: body.closing_date,
    };

    match service.open(request) {
        Ok(record) => {
            let view = super::views::RecruitmentStatusView::of(&record);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ServiceError::Store(StoreError::Conflict)) => {
            let payload = json!({ "error": "recruitment already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn status_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecruitmentStore + 'static,
{
    match service.status(&RecruitmentId(id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn progress_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecruitmentStore + 'static,
{
    match service.progress(&RecruitmentId(id)) {
        Ok(board) => (StatusCode::OK, axum::Json::<ProgressBoard>(board)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn advance_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Path(id): Path<String>,
    axum::Json(body): axum::Json<AdvanceBody>,
) -> Response
where
    S: RecruitmentStore + 'static,
{
    let target = match SubStage::from_str(&body.target) {
        Ok(target) => target,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let request = AdvanceRequest {
        target,
        date: body.date,
        actor: body.actor,
        details: body.details,
        admin_override: body.admin_override,
    };

    match service.advance(&RecruitmentId(id), request) {
        Ok(record) => {
            let view = super::views::RecruitmentStatusView::of(&record);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
) -> Response
where
    S: RecruitmentStore + 'static,
{
    match service.dashboard() {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Transition(TransitionError::Stale { .. }) => StatusCode::CONFLICT,
        ServiceError::Transition(_)
        | ServiceError::OverrideUnaudited
        | ServiceError::UnknownStage(_)
        | ServiceError::Methodology(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        ServiceError::Store(StoreError::Unavailable(_)) | ServiceError::Consistency(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ServiceError::Store(StoreError::Stale { .. }) => StatusCode::CONFLICT,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
