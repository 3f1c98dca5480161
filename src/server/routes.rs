//! Router configuration for the image store.
//!
//! # Route Structure
//!
//! ```text
//! /images                - List (GET) and create (POST) records
//! /images/{id}           - Fetch one record (GET)
//! /images/random         - Redirect to a random record (GET)
//! /admin                 - Admin portal, HTTP Basic auth (any method)
//! ```
//!
//! Paths with more segments, such as `/images/a/b`, fall through to 404.
//!
//! # Example
//!
//! ```ignore
//! use image_store::server::{create_router, AdminGate, RouterConfig};
//! use image_store::store::MemoryStore;
//!
//! let admin = AdminGate::new("s3cret")?;
//! let router = create_router(MemoryStore::new(), admin, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    routing::{any, get},
    Router,
};
use http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::admin::{admin_handler, AdminGate};
use super::handlers::{
    create_image_handler, image_handler, list_images_handler, method_not_allowed_handler,
    AppState,
};
use crate::store::RecordStore;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,

    /// Fixed seed for random selection (None = seed from the OS)
    pub rng_seed: Option<u64>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterConfig {
    /// Create a router configuration.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Tracing is enabled
    /// - The random generator is seeded from the OS
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
            rng_seed: None,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }

    /// Seed the random generator deterministically.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the application router around `store`.
///
/// The admin gate is built by the caller so that a missing secret is
/// reported at startup rather than here.
pub fn create_router<S: RecordStore>(store: S, admin: AdminGate, config: RouterConfig) -> Router {
    let app_state = match config.rng_seed {
        Some(seed) => AppState::with_seed(store, admin, seed),
        None => AppState::new(store, admin),
    };

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([LOCATION])
        .max_age(Duration::from_secs(86400));
    if let Some(origin) = allowed_origins(config.cors_origins.as_deref()) {
        cors = cors.allow_origin(origin);
    }

    let router = Router::new()
        .route(
            "/images",
            get(list_images_handler::<S>)
                .post(create_image_handler::<S>)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/images/{id}",
            get(image_handler::<S>).fallback(method_not_allowed_handler),
        )
        .route("/admin", any(admin_handler::<S>))
        .with_state(app_state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Resolve configured origins for the CORS layer.
///
/// Unset means any origin. `None` means no origin is allowed, which is the
/// case for an empty list or one where nothing parses as a header value.
fn allowed_origins(origins: Option<&[String]>) -> Option<AllowOrigin> {
    let Some(origins) = origins else {
        return Some(AllowOrigin::any());
    };

    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    (!parsed.is_empty()).then(|| AllowOrigin::list(parsed))
}

// =============================================================================
// Tests
// =============================================================================
