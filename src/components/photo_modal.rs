//! Photo Modal Component
//!
//! Centered card showing a second list over the same records.

use leptos::ev;
use leptos::prelude::*;

use crate::components::ItemList;
use crate::context::ScreenContext;

#[component]
pub fn PhotoModal() -> impl IntoView {
    let ctx = use_context::<ScreenContext>().expect("ScreenContext should be provided");
    let visible = move || ctx.state.with(|s| s.modal_visible());

    // Escape acts as the platform back/close request
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.state.with_untracked(|s| s.modal_visible()) {
            ctx.close_modal();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=visible>
            <div class="centered-view" on:click=move |_| ctx.close_modal()>
                <div class="modal-view" on:click=|ev| ev.stop_propagation()>
                    <ItemList hide_scroll_indicator=true />
                    <button class="modal-close" on:click=move |_| ctx.toggle_modal()>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
