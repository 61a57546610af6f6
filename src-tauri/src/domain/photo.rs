//! Photo Entity
//!
//! One record of the remote photo list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A photo record as served by the endpoint
///
/// Only `id` is required; title and thumbnail default to empty and are
/// passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique identifier
    pub id: u32,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Small image shown in the row
    #[serde(default)]
    pub thumbnail_url: String,
    /// Album the photo belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<u32>,
    /// Full-size image
    #[serde(default, skip_serializing_if = "Option::is_none")]
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
}

impl Entity for Photo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::duplicate_ids;

    #[test]
    fn test_photo_creation() {
        let photo = Photo::new(1, "A", "u1");
        assert_eq!(photo.id(), 1);
        assert_eq!(photo.title, "A");
        assert_eq!(photo.thumbnail_url, "u1");
    }

    #[test]
    fn test_serializes_camel_case_for_frontend() {
        let json = serde_json::to_value(Photo::new(2, "B", "u2")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 2, "title": "B", "thumbnailUrl": "u2"}));
    }

    #[test]
    fn test_duplicate_ids() {
        let photos = vec![
            Photo::new(1, "a", ""),
            Photo::new(2, "b", ""),
            Photo::new(1, "c", ""),
            Photo::new(1, "d", ""),
            Photo::new(3, "e", ""),
        ];
        assert_eq!(duplicate_ids(&photos), vec![1]);
        assert!(duplicate_ids::<Photo>(&[]).is_empty());
    }
}
