//! List Item Component
//!
//! One photo row with swipe-to-reveal actions.

use leptos::prelude::*;
use leptos_swipe::{
    dismiss, make_on_pointercancel, make_on_pointerdown, make_on_pointermove, make_on_pointerup, SwipeSide, SwipeStore,
};

use crate::components::{LeftActions, RightActions};
use crate::gestures::GestureSlot;
use crate::models::Photo;

/// A single swipeable row
///
/// The row only reports gestures; the owner decides what they mean.
///
/// # Arguments
/// * `gesture` - This row's entry in the list's gesture table
/// * `on_swipe_from_left` - Row dragged right past the threshold
/// * `on_swipe_right` - Row dragged left past the threshold
/// * `on_right_press` - Revealed right panel pressed
#[component]
pub fn ListItem(
    photo: Photo,
    gesture: GestureSlot,
    on_swipe_from_left: Callback<()>,
    on_swipe_right: Callback<()>,
    on_right_press: Callback<()>,
) -> impl IntoView {
    let machine = Memo::new(move |_| gesture.swipe());

    let on_open = Callback::new(move |side: SwipeSide| match side {
        SwipeSide::Left => on_swipe_from_left.run(()),
        SwipeSide::Right => on_swipe_right.run(()),
    });

    let on_pointerdown = make_on_pointerdown(gesture);
    let on_pointermove = make_on_pointermove(gesture);
    let on_pointerup = make_on_pointerup(gesture, on_open);
    let on_pointercancel = make_on_pointercancel(gesture);

    // Snap animation only once the finger is off the row
    let surface_style = move || {
        let m = machine.get();
        let transition = if m.is_dragging() { "none" } else { "transform 180ms ease-out" };
        format!("transform: translateX({:.1}px); transition: {};", m.translation(), transition)
    };

    let left_scale = Signal::derive(move || machine.get().left_progress());
    let right_scale = Signal::derive(move || machine.get().right_progress());
    let right_opacity = Signal::derive(move || machine.get().right_opacity());
    let close_row = Callback::new(move |_: ()| dismiss(gesture));

    let has_thumbnail = photo.has_thumbnail();
    let thumbnail = photo.thumbnail_url.clone();
    let title = photo.title.clone();

    view! {
        <div class="swipe-row">
            <LeftActions scale=left_scale on_press=close_row />
            <RightActions scale=right_scale opacity=right_opacity on_press=on_right_press />
            <div
                class="item"
                style=surface_style
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=on_pointerup
                on:pointercancel=on_pointercancel
            >
                {if has_thumbnail {
                    view! { <img class="tiny-logo" src=thumbnail alt="" draggable="false" /> }.into_any()
                } else {
                    view! { <span class="tiny-logo placeholder"></span> }.into_any()
                }}
                <span class="title">{title}</span>
            </div>
        </div>
    }
}
