//! Notice Banner Component
//!
//! Shows the latest item-action notice until its timer clears it.

use leptos::prelude::*;

use crate::context::ScreenContext;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<ScreenContext>().expect("ScreenContext should be provided");
    let message = move || ctx.state.with(|s| s.notice().map(|n| n.message));

    view! {
        {move || message().map(|text| view! {
            <div class="notice" role="status">{text}</div>
        })}
    }
}
