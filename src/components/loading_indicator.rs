use leptos::prelude::*;

/// Large spinner shown until the first fetch settles
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="container">
            <div class="activity-indicator" role="progressbar" aria-label="Loading"></div>
        </div>
    }
}
