//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod photo_cmd;

pub use photo_cmd::*;
