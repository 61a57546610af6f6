//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Photo record (matches backend)
///
/// Title and thumbnail are not validated; a missing value renders empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub album_id: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Photo {
    pub fn new(id: u32, title: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            album_id: None,
            url: None,
        }
    }

    /// Whether there is anything to put in the `<img>`
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail_url.trim().is_empty()
    }
}
