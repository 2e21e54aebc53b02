use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::anonymize::DisplayRecord;
use super::domain::{Acknowledgement, CandidateId, FilterCriteria, ScoringWeights, Theme};
use super::ingestion::UploadedFile;
use super::service::RankingService;
use super::sync::HrmsSync;

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ClientRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SingleUploadRequest {
    #[serde(default)]
    pub file: Option<UploadedFile>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BulkUploadRequest {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub admitted: Vec<CandidateId>,
    pub uploads: u32,
}

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    pub candidates: Vec<DisplayRecord>,
    pub acknowledgement: Acknowledgement,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse<T> {
    pub value: T,
}

/// Router exposing the ranking session over JSON.
pub fn ranking_router<S>(service: Arc<RankingService<S>>) -> Router
where
    S: HrmsSync + 'static,
{
    Router::new()
        .route("/api/v1/session", get(session_handler::<S>))
        .route("/api/v1/candidates", get(candidates_handler::<S>))
        .route("/api/v1/candidates/:candidate_id/view", get(view_handler::<S>))
        .route("/api/v1/filters", get(filter_handler::<S>).put(set_filter_handler::<S>))
        .route("/api/v1/analytics", get(analytics_handler::<S>))
        .route("/api/v1/weights", get(weights_handler::<S>).put(set_weights_handler::<S>))
        .route("/api/v1/weights/apply", post(apply_weights_handler::<S>))
        .route(
            "/api/v1/job-descriptions",
            get(job_descriptions_handler::<S>).post(add_job_description_handler::<S>),
        )
        .route(
            "/api/v1/job-descriptions/edit",
            post(edit_job_description_handler::<S>),
        )
        .route(
            "/api/v1/clients",
            get(clients_handler::<S>).post(add_client_handler::<S>),
        )
        .route("/api/v1/clients/edit", post(edit_client_handler::<S>))
        .route("/api/v1/uploads/single", post(single_upload_handler::<S>))
        .route("/api/v1/uploads/bulk", post(bulk_upload_handler::<S>))
        .route("/api/v1/anonymize/toggle", post(toggle_anonymize_handler::<S>))
        .route("/api/v1/theme/toggle", post(toggle_theme_handler::<S>))
        .route("/api/v1/shortlist", post(shortlist_handler::<S>))
        .route("/api/v1/hrms/sync", post(hrms_sync_handler::<S>))
        .route("/api/v1/company-format", post(company_format_handler::<S>))
        .with_state(service)
}

type Service<S> = State<Arc<RankingService<S>>>;

async fn session_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.snapshot()).into_response()
}

async fn candidates_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.rows()).into_response()
}

async fn view_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Path(candidate_id): Path<u64>,
) -> Response {
    match service.view_candidate(CandidateId(candidate_id)) {
        Some(ack) => (StatusCode::OK, Json(ack)).into_response(),
        None => {
            let payload = json!({
                "error": format!("candidate {candidate_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

async fn filter_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.filter()).into_response()
}

async fn set_filter_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(filter): Json<FilterCriteria>,
) -> Response {
    Json(service.set_filter(filter)).into_response()
}

async fn analytics_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.analytics()).into_response()
}

async fn weights_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.weights()).into_response()
}

async fn set_weights_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(weights): Json<ScoringWeights>,
) -> Response {
    Json(service.set_weights(weights)).into_response()
}

async fn apply_weights_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.apply_weights()).into_response()
}

async fn job_descriptions_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.job_descriptions()).into_response()
}

async fn add_job_description_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(request): Json<JobDescriptionRequest>,
) -> Response {
    Json(service.add_job_description(&request.title)).into_response()
}

async fn edit_job_description_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(request): Json<JobDescriptionRequest>,
) -> Response {
    Json(service.edit_job_description(&request.title)).into_response()
}

async fn clients_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.clients()).into_response()
}

async fn add_client_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(request): Json<ClientRequest>,
) -> Response {
    Json(service.add_client(&request.name)).into_response()
}

async fn edit_client_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(request): Json<ClientRequest>,
) -> Response {
    Json(service.edit_client(&request.name)).into_response()
}

async fn single_upload_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(request): Json<SingleUploadRequest>,
) -> Response {
    let admitted = service.upload_single(request.file);
    upload_response(&service, admitted)
}

async fn bulk_upload_handler<S: HrmsSync + 'static>(
    State(service): Service<S>,
    Json(request): Json<BulkUploadRequest>,
) -> Response {
    let admitted = service.upload_bulk(request.files);
    upload_response(&service, admitted)
}

fn upload_response<S: HrmsSync + 'static>(
    service: &RankingService<S>,
    admitted: Vec<CandidateId>,
) -> Response {
    let status = if admitted.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    let body = UploadResponse {
        admitted,
        uploads: service.analytics().uploads,
    };
    (status, Json(body)).into_response()
}

async fn toggle_anonymize_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(ToggleResponse {
        value: service.toggle_anonymize(),
    })
    .into_response()
}

async fn toggle_theme_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(ToggleResponse::<Theme> {
        value: service.toggle_theme(),
    })
    .into_response()
}

async fn shortlist_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    let (candidates, acknowledgement) = service.shortlist();
    Json(ShortlistResponse {
        candidates,
        acknowledgement,
    })
    .into_response()
}

async fn hrms_sync_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    (StatusCode::ACCEPTED, Json(service.sync_hrms())).into_response()
}

async fn company_format_handler<S: HrmsSync + 'static>(State(service): Service<S>) -> Response {
    Json(service.generate_company_format()).into_response()
}
