//! Photo Swipe App
//!
//! The single screen: spinner while loading, then the photo list, the
//! modal copy of it and the button that toggles the modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ItemList, LoadingIndicator, NoticeBanner, PhotoModal};
use crate::context::ScreenContext;
use crate::screen::ScreenState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (state, set_state) = signal(ScreenState::new());

    // Provide context to all children
    let ctx = ScreenContext::new((state, set_state));
    provide_context(ctx);

    // Fetch once on mount; no retry, no timeout
    Effect::new(move |_| {
        spawn_local(async move {
            log::info!("fetching photos");
            let result = commands::fetch_photos().await;
            ctx.finish_load(result);
        });
    });

    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <LoadingIndicator /> }>
            <div class="container">
                <PhotoModal />
                <main class="safe-area">
                    <ItemList />
                </main>
                <NoticeBanner />
                <button class="create" on:click=move |_| ctx.toggle_modal()>
                    "Open Modal!"
                </button>
            </div>
        </Show>
    }
}
