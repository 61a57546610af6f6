//! Data Source Layer - Core Traits

use async_trait::async_trait;
use crate::domain::{Photo, SourceResult};

/// Supplies the ordered photo sequence
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch every record, in server order
    async fn fetch_all(&self) -> SourceResult<Vec<Photo>>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}
