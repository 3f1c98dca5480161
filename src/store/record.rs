use serde::{Deserialize, Serialize};

/// Metadata for a single stored image.
///
/// Serialized as `{"fileName": .., "author": .., "id": .., "size": ..}`.
/// Fields absent from an incoming body take their default value; `id` is
/// always replaced by the store on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRecord {
    pub file_name: String,
    pub author: String,
    pub id: String,
    pub size: f32,
}

impl ImageRecord {
    /// Create a record without an id.
    pub fn new(file_name: impl Into<String>, author: impl Into<String>, size: f32) -> Self {
        Self {
            file_name: file_name.into(),
            author: author.into(),
            id: String::new(),
            size,
        }
    }

    /// Return this record with `id` set.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
