//! HTTP server layer for the image store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        /images    /images/{id|random}    /admin                 │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │    admin    │  │        routes           │  │
//! │  │ (records)   │  │ (basic auth)│  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod handlers;
pub mod routes;

pub use admin::{admin_handler, parse_basic_credentials, AdminGate};
pub use handlers::{
    create_image_handler, image_handler, list_images_handler, method_not_allowed_handler,
    pick_random, AppState,
};
pub use routes::{create_router, RouterConfig};
