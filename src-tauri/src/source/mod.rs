//! Data Source Layer
//!
//! Where the photo list comes from. One fetch per screen, no retry.

mod traits;
mod http;

#[cfg(test)]
mod tests;

pub use traits::PhotoSource;
pub use http::{parse_photos, HttpPhotoSource};

use crate::domain::{duplicate_ids, Photo, SourceResult};

/// Fetch the list once, logging the outcome. Failures are returned as-is;
/// the frontend decides to carry on without data.
pub async fn load_photos(source: &dyn PhotoSource) -> SourceResult<Vec<Photo>> {
    log::info!("fetching photos from {}", source.describe());
    match source.fetch_all().await {
        Ok(photos) => {
            let dupes = duplicate_ids(&photos);
            if !dupes.is_empty() {
                log::warn!("{} duplicate photo ids, first {}", dupes.len(), dupes[0]);
            }
            log::info!("fetched {} photos", photos.len());
            Ok(photos)
        }
        Err(e) => {
            log::error!("photo fetch failed: {}", e);
            Err(e)
        }
    }
}
