//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! Errors wrap the HTTP client and JSON decoder failures they come from.

mod entity;
mod error;
mod photo;

pub use entity::{duplicate_ids, Entity};
pub use error::{DataSourceError, SourceResult};
pub use photo::Photo;
