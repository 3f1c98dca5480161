use thiserror::Error;

/// Errors returned by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record is stored under the requested id
    #[error("Image not found: {id}")]
    NotFound { id: String },
}

/// Startup configuration errors. These are fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The admin password was not supplied or is empty
    #[error(
        "required admin password not set. Set --admin-password or ADMIN_PASSWORD to a non-empty value"
    )]
    MissingAdminPassword,
}

/// Errors produced while handling a single HTTP request.
///
/// The HTTP mapping lives in `server::handlers`.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body was not declared as JSON (HTTP 415)
    #[error("need content-type 'application/json', but got '{content_type}'")]
    UnsupportedMediaType { content_type: String },

    /// Request body could not be decoded as an image record (HTTP 400)
    #[error("{0}")]
    MalformedJson(String),

    /// Unknown id, empty store on random, or unrouted path (HTTP 404)
    #[error("not found")]
    NotFound,

    /// Method not supported on this path (HTTP 405)
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Missing or wrong admin credentials (HTTP 401)
    #[error("401 - Unauthorized")]
    Unauthorized,

    /// Body read or serialization failure (HTTP 500)
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
