use axum::{
	Json, Router,
	body::Bytes,
	extract::{
		Path, State,
		rejection::{BytesRejection, PathRejection},
	},
	http::{Method, StatusCode, header},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Serialize, de::DeserializeOwned};
use tower_http::cors::{Any, CorsLayer};

use notes_service::{
	CreateNoteRequest, CreateNoteResponse, DeleteResponse, Error, NoteSummary, UpdateNoteRequest,
};

use crate::state::AppState;

/// Method, path, and description of every note route, in registration order.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
	("POST", "/notes", "Create a new note"),
	("GET", "/notes", "Get all notes"),
	("GET", "/notes/{id}", "Get a specific note"),
	("PUT", "/notes/{id}", "Update a note"),
	("DELETE", "/notes/{id}", "Delete a note"),
];

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/notes", get(list_notes).post(create_note))
		.route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
		.with_state(state)
		.layer(cors_layer())
}

/// Any origin may call the API. Preflight requests are answered by the layer itself with an
/// empty 200 response.
pub fn cors_layer() -> CorsLayer {
	CorsLayer::new()
		.allow_origin(Any)
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
		.allow_headers([header::CONTENT_TYPE])
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn create_note(
	State(state): State<AppState>,
	body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreateNoteResponse>), ApiError> {
	let payload: CreateNoteRequest = decode_body(body)?;
	let response = state.service.create(payload)?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<NoteSummary>>, ApiError> {
	let response = state.service.list()?;

	Ok(Json(response))
}

async fn get_note(
	State(state): State<AppState>,
	id: Result<Path<i64>, PathRejection>,
) -> Result<Json<NoteSummary>, ApiError> {
	let Path(id) = id.map_err(ApiError::from_path_rejection)?;
	let response = state.service.get(id)?;

	Ok(Json(response))
}

async fn update_note(
	State(state): State<AppState>,
	id: Result<Path<i64>, PathRejection>,
	body: Result<Bytes, BytesRejection>,
) -> Result<Json<NoteSummary>, ApiError> {
	let Path(id) = id.map_err(ApiError::from_path_rejection)?;
	let payload: UpdateNoteRequest = decode_body(body)?;
	let response = state.service.update(id, payload)?;

	Ok(Json(response))
}

async fn delete_note(
	State(state): State<AppState>,
	id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
	let Path(id) = id.map_err(ApiError::from_path_rejection)?;
	let response = state.service.delete(id)?;

	Ok(Json(response))
}

// Bodies are decoded as JSON whatever their declared content type.
fn decode_body<T>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError>
where
	T: DeserializeOwned,
{
	let body = body.map_err(|err| ApiError::invalid_body(&err))?;

	serde_json::from_slice(&body).map_err(|err| ApiError::invalid_body(&err))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}

	fn invalid_body(err: &dyn std::fmt::Display) -> Self {
		tracing::debug!(error = %err, "Rejected request body.");

		Self::new(StatusCode::BAD_REQUEST, "Invalid request body")
	}

	fn from_path_rejection(err: PathRejection) -> Self {
		tracing::debug!(error = %err, "Rejected note id.");

		Self::new(StatusCode::BAD_REQUEST, "Invalid note ID")
	}
}

impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::InvalidRequest { message } => Self::new(StatusCode::BAD_REQUEST, message),
			Error::NotFound { message } => Self::new(StatusCode::NOT_FOUND, message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
