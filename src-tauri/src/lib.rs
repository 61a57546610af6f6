//! Photo Swipe Backend
//!
//! Layered architecture:
//! - domain: Photo entity and errors
//! - source: Where the photo list comes from
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::Manager;

mod config;
mod domain;
mod source;
mod commands;

use config::SourceConfig;
use source::{HttpPhotoSource, PhotoSource};

/// Application state shared across commands
pub struct AppState {
    pub source: Arc<dyn PhotoSource>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Initialize logging; the app still runs without a log file
            let log_dir = app.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(&log_dir, "PhotoSwipe") {
                eprintln!("failed to init rolling logger in {}: {}", log_dir.display(), e);
            }

            let config = SourceConfig::from_env();
            log::info!("photo endpoint: {}", config.endpoint);

            let source = HttpPhotoSource::new(config)?;
            app.manage(AppState {
                source: Arc::new(source),
            });
            log::info!("App setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::fetch_photos,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
