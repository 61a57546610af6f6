//! Screen Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Photo;
use crate::screen::{ItemEvent, ScreenState, NOTICE_MS};

/// Screen-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ScreenContext {
    /// Screen state - read
    pub state: ReadSignal<ScreenState>,
    /// Screen state - write, only through the methods below
    set_state: WriteSignal<ScreenState>,
    /// Record sequence shared by the main and modal lists
    pub records: Memo<Arc<Vec<Photo>>>,
}

impl ScreenContext {
    pub fn new(state: (ReadSignal<ScreenState>, WriteSignal<ScreenState>)) -> Self {
        let read = state.0;
        Self {
            state: read,
            set_state: state.1,
            records: Memo::new(move |_| read.with(|s| s.shared_records())),
        }
    }

    /// Apply the one fetch result
    pub fn finish_load(&self, result: Result<Vec<Photo>, String>) {
        self.set_state.update(|s| {
            s.finish_load(result);
        });
    }

    pub fn toggle_modal(&self) {
        self.set_state.update(|s| s.toggle_modal());
    }

    pub fn close_modal(&self) {
        self.set_state.update(|s| s.close_modal());
    }

    /// Fire-and-forget: queued so the gesture handler returns immediately
    pub fn item_event(&self, event: ItemEvent) {
        let set_state = self.set_state;
        spawn_local(async move {
            let mut raised = None;
            set_state.update(|s| raised = s.handle_item(event));
            if let Some(seq) = raised {
                TimeoutFuture::new(NOTICE_MS).await;
                set_state.update(|s| s.clear_notice(seq));
            }
        });
    }
}
