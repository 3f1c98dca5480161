//! HTTP Basic authentication for the admin portal.
//!
//! The gate holds one shared secret. Every request to `/admin` must carry
//! `Authorization: Basic base64("admin:<secret>")`; there are no sessions.
//!
//! # Example
//!
//! ```rust
//! use image_store::server::admin::AdminGate;
//!
//! let gate = AdminGate::new("s3cret").unwrap();
//! assert!(gate.verify("admin", "s3cret"));
//! assert!(!gate.verify("admin", "wrong"));
//! ```

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Html,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::error::{ApiError, ConfigError};
use crate::store::RecordStore;

use super::handlers::AppState;

/// The only username the gate accepts.
pub const ADMIN_USERNAME: &str = "admin";

/// Page served to authenticated admins.
pub const ADMIN_PAGE: &str = "<html><h1>Super secret admin portal</h1></html>";

// =============================================================================
// Admin Gate
// =============================================================================

/// Credential check for the admin endpoint.
#[derive(Clone)]
pub struct AdminGate {
    password: Vec<u8>,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminGate {
    /// Create a gate for the given secret.
    ///
    /// Fails with [`ConfigError::MissingAdminPassword`] when the secret is empty.
    pub fn new(password: impl AsRef<str>) -> Result<Self, ConfigError> {
        let password = password.as_ref();
        if password.is_empty() {
            return Err(ConfigError::MissingAdminPassword);
        }
        Ok(Self {
            password: password.as_bytes().to_vec(),
        })
    }

    /// Check a username and password pair.
    ///
    /// Both comparisons run in constant time and are always evaluated.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = username.as_bytes().ct_eq(ADMIN_USERNAME.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(&self.password);
        (user_ok & pass_ok).into()
    }

    /// Check the `Authorization` header of a request.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            debug!("Admin request without credentials");
            return Err(ApiError::Unauthorized);
        };

        let credentials = value.to_str().ok().and_then(parse_basic_credentials);
        match credentials {
            Some((username, password)) if self.verify(&username, &password) => Ok(()),
            Some(_) => {
                warn!("Admin authentication failed");
                Err(ApiError::Unauthorized)
            }
            None => {
                debug!("Malformed admin Authorization header");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

/// Parse an `Authorization: Basic <credentials>` header value.
///
/// The scheme is case-insensitive. The decoded credentials are split at the
/// first `:`, so passwords may contain colons.
pub fn parse_basic_credentials(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

// =============================================================================
// Handler
// =============================================================================

/// Handle admin portal requests.
///
/// # Endpoint
///
/// Any method on `/admin`
///
/// # Response
///
/// - `200 OK`: fixed HTML page
/// - `401 Unauthorized`: missing, malformed, or wrong credentials
pub async fn admin_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<Html<&'static str>, ApiError> {
    state.admin.authorize(&headers)?;
    debug!("Admin portal accessed");
    Ok(Html(ADMIN_PAGE))
}

// =============================================================================
// Tests
// =============================================================================
