//! # Image Store
//!
//! An in-memory store of image metadata records served over HTTP, with a
//! password-gated admin endpoint.
//!
//! ## Architecture
//!
//! - [`store`] - Record type, the [`RecordStore`] trait, and the mutex-guarded [`MemoryStore`]
//! - [`server`] - Axum handlers, HTTP Basic admin gate, router assembly
//! - [`config`] - CLI and environment configuration
//! - [`error`] - Store, configuration, and request error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use image_store::{create_router, AdminGate, MemoryStore, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let admin = AdminGate::new("s3cret")?;
//!     let router = create_router(MemoryStore::new(), admin, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, ConfigError, StoreError};
pub use server::{create_router, AdminGate, AppState, RouterConfig};
pub use store::{IdGenerator, ImageRecord, MemoryStore, RecordStore};
