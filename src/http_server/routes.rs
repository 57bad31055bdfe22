//! # Account HTTP Routes
//!
//! Thin glue translating HTTP requests into roster-service calls and
//! shaping responses. Field-shape validation happens here, before the
//! core is invoked; the service returns sanitized profiles only.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::PasswordPolicy;
use crate::roster::{
    LibrarianProfile, RegisterLibrarian, RegisterStudent, RosterError, RosterService,
    StudentProfile,
};
use crate::store::StudentKey;

use super::validate;

/// Shared state for the account routes
pub struct AppState {
    pub service: RosterService,
    pub password_policy: PasswordPolicy,
}

/// Account routes under `/api`
pub fn account_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/librarians/register", post(register_librarian_handler))
        .route("/librarians/login", post(login_librarian_handler))
        .route("/librarians/:id", get(get_librarian_handler))
        .route("/students/register", post(register_student_handler))
        .route("/students/login", post(login_student_handler))
        .route("/students/:id", get(get_student_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct LibrarianLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct StudentLoginRequest {
    pub name: String,
    pub grade: String,
    pub section: String,
    /// Optional: a missing secret skips verification (documented relaxation)
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RosterError> for ErrorResponse {
    fn from(err: RosterError) -> Self {
        Self {
            code: err.status_code(),
            error: err.to_string(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn into_handler_error(err: RosterError) -> HandlerError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

// ==================
// Handlers
// ==================

async fn register_librarian_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterLibrarian>,
) -> Result<(StatusCode, Json<LibrarianProfile>), HandlerError> {
    validate::register_librarian(&state.password_policy, &request)
        .map_err(into_handler_error)?;
    let profile = state
        .service
        .register_librarian(request)
        .map_err(into_handler_error)?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn login_librarian_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LibrarianLoginRequest>,
) -> Result<Json<LibrarianProfile>, HandlerError> {
    let profile = state
        .service
        .login_librarian(&request.username, &request.password)
        .map_err(into_handler_error)?;
    Ok(Json(profile))
}

async fn get_librarian_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LibrarianProfile>, HandlerError> {
    let profile = state.service.librarian_by_id(id).map_err(into_handler_error)?;
    Ok(Json(profile))
}

async fn register_student_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterStudent>,
) -> Result<(StatusCode, Json<StudentProfile>), HandlerError> {
    validate::register_student(&state.password_policy, &request).map_err(into_handler_error)?;
    let profile = state
        .service
        .register_student(request)
        .map_err(into_handler_error)?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn login_student_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StudentLoginRequest>,
) -> Result<Json<StudentProfile>, HandlerError> {
    let key = StudentKey {
        name: request.name,
        grade: request.grade,
        section: request.section,
    };
    let profile = state
        .service
        .login_student(key, request.password.as_deref())
        .map_err(into_handler_error)?;
    Ok(Json(profile))
}

async fn get_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentProfile>, HandlerError> {
    let profile = state.service.student_by_id(id).map_err(into_handler_error)?;
    Ok(Json(profile))
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
