//! Photo Swipe Frontend Entry Point

mod models;
mod commands;
mod logging;
mod screen;
mod list_model;
mod gestures;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    mount_to_body(App);
}
