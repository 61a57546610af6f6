//! Leptos Swipe Utilities
//!
//! Swipe-to-reveal rows for Leptos using pointer events.
//! Uses an activation slop to tell taps and vertical scrolls from swipes.

mod machine;

pub use machine::{interpolate, progress, SwipeConfig, SwipeEvent, SwipeMachine, SwipeSide, SwipeState};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Somewhere a row's `SwipeMachine` lives.
///
/// Implemented for a plain signal; owners that keep many rows in one table
/// implement it for a per-row handle.
pub trait SwipeStore: Copy + 'static {
    /// Current machine, tracked
    fn swipe(&self) -> SwipeMachine;
    /// Current machine, untracked
    fn swipe_untracked(&self) -> SwipeMachine;
    /// Mutate the machine and notify subscribers
    fn update_swipe<R>(&self, f: impl FnOnce(&mut SwipeMachine) -> R) -> Option<R>;
}

impl SwipeStore for RwSignal<SwipeMachine> {
    fn swipe(&self) -> SwipeMachine {
        self.get()
    }

    fn swipe_untracked(&self) -> SwipeMachine {
        self.get_untracked()
    }

    fn update_swipe<R>(&self, f: impl FnOnce(&mut SwipeMachine) -> R) -> Option<R> {
        self.try_update(f)
    }
}

fn is_tracking(machine: &SwipeMachine) -> bool {
    matches!(
        machine.state(),
        SwipeState::Pressed { .. } | SwipeState::Dragging { .. }
    )
}

/// Create pointerdown handler for the draggable surface.
/// Captures the pointer so the drag keeps reporting outside the row.
pub fn make_on_pointerdown<S: SwipeStore>(store: S) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        // Only the main mouse button starts a swipe
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        if let Some(Some(SwipeEvent::Closed)) = store.update_swipe(|m| m.press(x, y)) {
            log::debug!(target: "swipe", "dismissed open row");
        }
    }
}

/// Create pointermove handler. Idle hovering does not touch the store.
pub fn make_on_pointermove<S: SwipeStore>(store: S) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !is_tracking(&store.swipe_untracked()) {
            return;
        }
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        store.update_swipe(|m| m.drag_to(x, y));
    }
}

/// Create pointerup handler. `on_open` runs after the store update, once per
/// open transition.
pub fn make_on_pointerup<S: SwipeStore>(
    store: S,
    on_open: Callback<SwipeSide>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        if !is_tracking(&store.swipe_untracked()) {
            return;
        }
        if let Some(Some(SwipeEvent::Opened(side))) = store.update_swipe(|m| m.release()) {
            log::debug!(target: "swipe", "opened {:?}", side);
            on_open.run(side);
        }
    }
}

/// Create pointercancel handler
pub fn make_on_pointercancel<S: SwipeStore>(store: S) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        if is_tracking(&store.swipe_untracked()) {
            store.update_swipe(|m| m.cancel());
        }
    }
}

/// Close the row from outside the gesture
pub fn dismiss<S: SwipeStore>(store: S) {
    if store.swipe_untracked().is_open() {
        store.update_swipe(|m| m.close());
    }
}
