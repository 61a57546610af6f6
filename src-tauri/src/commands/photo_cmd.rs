//! Tauri Commands for Photos
//!
//! Exposes the data source to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::Photo;
use crate::source::load_photos;
use crate::AppState;

/// Fetch the photo list. Errors reach the frontend as strings.
#[tauri::command]
pub async fn fetch_photos(state: State<'_, AppState>) -> Result<Vec<Photo>, String> {
    load_photos(state.source.as_ref()).await.map_err(|e| e.to_string())
}
