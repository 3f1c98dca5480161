//! HTTP request handlers for the image API.
//!
//! # Endpoints
//!
//! - `GET /images` - List every record
//! - `POST /images` - Store a new record
//! - `GET /images/{id}` - Fetch one record
//! - `GET /images/random` - Redirect to a random record

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::store::{ImageRecord, RecordStore};

use super::admin::AdminGate;

/// Path segment that selects a random record instead of an id.
pub const RANDOM_KEYWORD: &str = "random";

/// The only content type accepted on `POST /images`.
const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: RecordStore> {
    /// The record store
    pub store: Arc<S>,

    /// Process-wide generator for `/images/random`
    pub rng: Arc<Mutex<StdRng>>,

    /// Credential check for `/admin`
    pub admin: AdminGate,
}

impl<S: RecordStore> AppState<S> {
    /// Create application state with an OS-seeded random generator.
    pub fn new(store: S, admin: AdminGate) -> Self {
        Self::with_rng(store, admin, StdRng::from_os_rng())
    }

    /// Create application state with a fixed random seed.
    pub fn with_seed(store: S, admin: AdminGate, seed: u64) -> Self {
        Self::with_rng(store, admin, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: S, admin: AdminGate, rng: StdRng) -> Self {
        Self {
            store: Arc::new(store),
            rng: Arc::new(Mutex::new(rng)),
            admin,
        }
    }
}

impl<S: RecordStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            rng: Arc::clone(&self.rng),
            admin: self.admin.clone(),
        }
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ApiError to HTTP response.
///
/// Bodies are plain text. 5xx errors are logged at ERROR, 404 at DEBUG,
/// and other client errors at WARN.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::UnsupportedMediaType { .. } => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type")
            }
            ApiError::MalformedJson(_) => (StatusCode::BAD_REQUEST, "malformed_json"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found"
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::MethodNotAllowed => (status, "method not allowed\n").into_response(),
            ApiError::Unauthorized => (
                status,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="admin""#)],
                message,
            )
                .into_response(),
            _ => (status, message).into_response(),
        }
    }
}

// =============================================================================
// Random Selection
// =============================================================================

/// Pick one id uniformly at random.
///
/// Returns `None` for an empty slice and the sole element for a single-id
/// slice without touching the generator.
pub fn pick_random<'a, R: Rng + ?Sized>(ids: &'a [String], rng: &mut R) -> Option<&'a String> {
    match ids.len() {
        0 => None,
        1 => ids.first(),
        n => ids.get(rng.random_range(0..n)),
    }
}

/// Location of a single record.
pub fn image_location(id: &str) -> String {
    format!("/images/{}", id)
}

// =============================================================================
// Collection Handlers
// =============================================================================

/// Handle list requests.
///
/// # Endpoint
///
/// `GET /images`
///
/// # Response
///
/// `200 OK` with a JSON array of records, `[]` when the store is empty.
pub async fn list_images_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
) -> Result<Response, ApiError> {
    let images = state.store.get_all().await;
    let body = serde_json::to_vec(&images)?;

    debug!(count = images.len(), "Listed images");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body,
    )
        .into_response())
}

/// Handle create requests.
///
/// # Endpoint
///
/// `POST /images` with `Content-Type: application/json`
///
/// # Response
///
/// - `201 Created`: stored record as JSON, with `Location: /images/{id}`
/// - `400 Bad Request`: body is not a valid image record
/// - `415 Unsupported Media Type`: body is not declared as JSON
/// - `500 Internal Server Error`: body could not be read
///
/// Any `id` in the body is ignored; the store assigns a fresh one.
pub async fn create_image_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    if !is_json_content_type(&content_type) {
        return Err(ApiError::UnsupportedMediaType { content_type });
    }

    // Read in full; no body size limit applies
    let body: Bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let record: ImageRecord =
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedJson(e.to_string()))?;

    let id = state.store.insert(record.clone()).await;
    let stored = record.with_id(&id);
    let body = serde_json::to_vec(&stored)?;

    info!(id = %id, file_name = %stored.file_name, "Stored image");

    Ok((
        StatusCode::CREATED,
        [
            (header::CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
            (header::LOCATION, image_location(&id)),
        ],
        body,
    )
        .into_response())
}

/// Whether a `Content-Type` value names JSON. Parameters are ignored.
fn is_json_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
        .unwrap_or(false)
}

// =============================================================================
// Item Handlers
// =============================================================================

/// Handle single-record requests.
///
/// # Endpoint
///
/// `GET /images/{id}` or `GET /images/random`
///
/// # Response
///
/// - `200 OK`: the record as JSON
/// - `302 Found`: for `random`, `Location: /images/{id}` and no body
/// - `404 Not Found`: unknown or undecodable id, or `random` on an empty store
pub async fn image_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    // A segment that does not decode cannot name a stored record
    let Path(id) = path.map_err(|_| ApiError::NotFound)?;

    if id == RANDOM_KEYWORD {
        return random_image(&state).await;
    }

    let image = state.store.get(&id).await?;
    let body = serde_json::to_vec(&image)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body,
    )
        .into_response())
}

async fn random_image<S: RecordStore>(state: &AppState<S>) -> Result<Response, ApiError> {
    let ids = state.store.list_ids().await;

    let target = {
        let mut rng = state.rng.lock().await;
        pick_random(&ids, &mut *rng).cloned()
    }
    .ok_or(ApiError::NotFound)?;

    debug!(id = %target, candidates = ids.len(), "Redirecting to random image");

    Ok((StatusCode::FOUND, [(header::LOCATION, image_location(&target))]).into_response())
}

/// Method fallback for the image routes.
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

// =============================================================================
// Tests
// =============================================================================
