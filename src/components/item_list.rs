//! Item List Component
//!
//! Keyed, incrementally rendered list of swipeable rows.

use leptos::ev;
use leptos::prelude::*;
use leptos_swipe::SwipeConfig;
use wasm_bindgen::JsCast;

use crate::components::ListItem;
use crate::context::ScreenContext;
use crate::gestures::{GestureSlot, GestureTable};
use crate::list_model::{layout_rows, separator_before, ListRow, RenderWindow};
use crate::screen::{ItemAction, ItemEvent};

/// Renders the screen's record sequence. Each instance keeps its own
/// gesture table, so the main list and the modal list swipe independently.
#[component]
pub fn ItemList(
    /// Hide the scrollbar (the modal copy does)
    #[prop(optional)]
    hide_scroll_indicator: bool,
) -> impl IntoView {
    let ctx = use_context::<ScreenContext>().expect("ScreenContext should be provided");

    let table = RwSignal::new(GestureTable::new(SwipeConfig::default()));
    let window = RwSignal::new(RenderWindow::new());

    // New sequence: drop gesture state of ids that left and start from the top
    Effect::new(move |_| {
        let records = ctx.records.get();
        table.update(|t| t.retain_ids(records.iter().map(|p| p.id)));
        window.set(RenderWindow::new());
    });

    let rows = move || {
        let records = ctx.records.get();
        let visible = window.get().visible(records.len());
        layout_rows(&records[..visible])
    };

    let list_ref = NodeRef::<leptos::html::Ul>::new();

    let fill = move |el: &web_sys::Element| {
        let total = ctx.records.with_untracked(|r| r.len());
        let mut next = window.get_untracked();
        if next.fill(total, f64::from(el.client_height()), f64::from(el.scroll_height())) {
            log::debug!(target: "list", "filled to {} of {} rows", next.visible(total), total);
            window.set(next);
        }
    };

    // A list whose rows don't overflow never scrolls; keep mounting until it can
    Effect::new(move |_| {
        window.track();
        if let Some(el) = list_ref.get() {
            fill(&el);
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(el) = list_ref.get_untracked() {
            fill(&el);
        }
    });
    on_cleanup(move || resize.remove());

    let on_scroll = move |ev: web_sys::Event| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let total = ctx.records.with_untracked(|r| r.len());
        let mut next = window.get_untracked();
        if next.on_scroll(
            total,
            f64::from(el.scroll_top()),
            f64::from(el.client_height()),
            f64::from(el.scroll_height()),
        ) {
            log::debug!(target: "list", "mounted {} of {} rows", next.visible(total), total);
            window.set(next);
        }
    };

    let list_class = if hide_scroll_indicator { "item-list no-scrollbar" } else { "item-list" };

    view! {
        <ul class=list_class node_ref=list_ref on:scroll=on_scroll>
            <For
                each=rows
                key=|row| row.key()
                children=move |row: ListRow| {
                    let id = row.photo.id;
                    let gesture = GestureSlot { table, id };
                    let dispatch = move |action: ItemAction| ctx.item_event(ItemEvent { id, action });
                    let on_swipe_from_left = Callback::new(move |_: ()| dispatch(ItemAction::SwipedFromLeft));
                    let on_swipe_right = Callback::new(move |_: ()| dispatch(ItemAction::SwipedRight));
                    let on_right_press = Callback::new(move |_: ()| dispatch(ItemAction::RightPressed));
                    // Keyed by id alone, so the separator follows the row's position
                    let separated = Memo::new(move |_| ctx.records.with(|r| separator_before(r, id)));
                    view! {
                        <Show when=move || separated.get()>
                            <li class="separator" aria-hidden="true"></li>
                        </Show>
                        <li class="list-row">
                            <ListItem
                                photo=row.photo
                                gesture=gesture
                                on_swipe_from_left=on_swipe_from_left
                                on_swipe_right=on_swipe_right
                                on_right_press=on_right_press
                            />
                        </li>
                    }
                }
            />
        </ul>
    }
}
