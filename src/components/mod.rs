//! UI Components
//!
//! Reusable Leptos components.

mod swipe_actions;
mod list_item;
mod item_list;
mod photo_modal;
mod loading_indicator;
mod notice_banner;

pub use swipe_actions::{LeftActions, RightActions};
pub use list_item::ListItem;
pub use item_list::ItemList;
pub use photo_modal::PhotoModal;
pub use loading_indicator::LoadingIndicator;
pub use notice_banner::NoticeBanner;
