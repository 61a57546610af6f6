//! Swipe Action Panels
//!
//! The panels revealed behind a row while it is dragged.

use leptos::prelude::*;

/// Panel revealed by dragging right. Tapping it closes the row.
#[component]
pub fn LeftActions(
    #[prop(into)] scale: Signal<f64>,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="left-actions" on:click=move |_| on_press.run(())>
            <span
                class="action-text"
                style=move || format!("transform: scale({:.3});", scale.get())
            >
                "Add to Cart"
            </span>
        </div>
    }
}

/// Panel revealed by dragging left. Pressing it is reported, never acted on here.
#[component]
pub fn RightActions(
    #[prop(into)] scale: Signal<f64>,
    #[prop(into)] opacity: Signal<f64>,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="right-actions"
            style=move || format!("opacity: {:.3};", opacity.get())
            on:click=move |ev| {
                ev.stop_propagation();
                on_press.run(());
            }
        >
            <span
                class="action-text"
                style=move || format!("transform: scale({:.3});", scale.get())
            >
                "Delete"
            </span>
        </button>
    }
}
