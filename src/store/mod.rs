//! Record store layer.
//!
//! Owns every image record held by the process. Handlers never keep their own
//! copies; they go through the [`RecordStore`] trait and get owned snapshots back.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Collection / Item handlers       │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │           RecordStore Trait             │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │              MemoryStore                │
//! │ (Mutex<HashMap<id, ImageRecord>>)       │
//! └─────────────────────────────────────────┘
//! ```

mod id;
mod memory;
mod record;

pub use id::IdGenerator;
pub use memory::{MemoryStore, RecordStore};
pub use record::ImageRecord;
