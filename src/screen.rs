//! Screen State
//!
//! Load state, the record sequence and modal visibility.
//! This is the only place the record sequence is written.

use std::sync::Arc;

use crate::models::Photo;

/// How long an action notice stays up
pub const NOTICE_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

/// What a row reported to its owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemAction {
    /// Row dragged right past the threshold (left panel open)
    SwipedFromLeft,
    /// Row dragged left past the threshold (right panel open)
    SwipedRight,
    /// Revealed right panel was pressed
    RightPressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemEvent {
    pub id: u32,
    pub action: ItemAction,
}

/// Transient message shown after an item action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenState {
    load_state: LoadState,
    records: Arc<Vec<Photo>>,
    modal_visible: bool,
    notice: Option<Notice>,
    notice_seq: u64,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn records(&self) -> &[Photo] {
        self.records.as_slice()
    }

    /// Cheap handle for both lists; they always share one sequence
    pub fn shared_records(&self) -> Arc<Vec<Photo>> {
        Arc::clone(&self.records)
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Apply the fetch result. A failure is logged and still ends loading
    /// with whatever records are present.
    ///
    /// Returns false when loading already finished; the transition happens once.
    pub fn finish_load(&mut self, result: Result<Vec<Photo>, String>) -> bool {
        if self.load_state == LoadState::Loaded {
            log::warn!(target: "screen", "ignoring late fetch result");
            return false;
        }
        match result {
            Ok(records) => {
                log::info!(target: "screen", "loaded {} photos", records.len());
                self.records = Arc::new(records);
            }
            Err(err) => {
                log::error!(target: "screen", "photo fetch failed: {}", err);
            }
        }
        self.load_state = LoadState::Loaded;
        true
    }

    pub fn toggle_modal(&mut self) {
        self.modal_visible = !self.modal_visible;
        log::debug!(target: "screen", "modal visible={}", self.modal_visible);
    }

    pub fn close_modal(&mut self) {
        self.modal_visible = false;
    }

    /// React to a row event. Returns the sequence number of a raised notice
    /// so the caller can schedule clearing it.
    pub fn handle_item(&mut self, event: ItemEvent) -> Option<u64> {
        log::info!(target: "screen", "item {} {:?}", event.id, event.action);
        let message = match event.action {
            ItemAction::SwipedFromLeft => "Swipe from left",
            ItemAction::RightPressed => "pressed right",
            ItemAction::SwipedRight => return None,
        };
        self.notice_seq += 1;
        self.notice = Some(Notice {
            seq: self.notice_seq,
            message,
        });
        Some(self.notice_seq)
    }

    /// Clear the notice unless a newer one replaced it
    pub fn clear_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_model::{layout_rows, separator_before};

    fn sample() -> Vec<Photo> {
        vec![Photo::new(1, "A", "u1"), Photo::new(2, "B", "u2")]
    }

    #[test]
    fn test_successful_fetch_renders_rows() {
        let mut screen = ScreenState::new();
        assert!(screen.is_loading());

        assert!(screen.finish_load(Ok(sample())));
        assert_eq!(screen.load_state(), LoadState::Loaded);

        let rows = layout_rows(screen.records());
        let titles: Vec<&str> = rows.iter().map(|r| r.photo.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(rows.iter().filter(|r| separator_before(screen.records(), r.key())).count(), 1);
    }

    #[test]
    fn test_failed_fetch_fails_open() {
        let mut screen = ScreenState::new();
        assert!(screen.finish_load(Err("connection refused".into())));
        assert_eq!(screen.load_state(), LoadState::Loaded);
        assert!(screen.records().is_empty());
        assert!(layout_rows(screen.records()).is_empty());
    }

    #[test]
    fn test_load_transition_happens_once() {
        let mut screen = ScreenState::new();
        screen.finish_load(Ok(sample()));
        assert!(!screen.finish_load(Ok(Vec::new())));
        assert_eq!(screen.records().len(), 2);
    }

    #[test]
    fn test_modal_toggle() {
        let mut screen = ScreenState::new();
        screen.toggle_modal();
        assert!(screen.modal_visible());
        screen.toggle_modal();
        assert!(!screen.modal_visible());
        screen.toggle_modal();
        screen.close_modal();
        assert!(!screen.modal_visible());
    }

    #[test]
    fn test_item_events_raise_notices() {
        let mut screen = ScreenState::new();
        screen.finish_load(Ok(sample()));

        let seq = screen.handle_item(ItemEvent { id: 1, action: ItemAction::SwipedFromLeft }).unwrap();
        assert_eq!(screen.notice().unwrap().message, "Swipe from left");

        let newer = screen.handle_item(ItemEvent { id: 2, action: ItemAction::RightPressed }).unwrap();
        assert!(newer > seq);

        // The first timer must not clear the newer notice
        screen.clear_notice(seq);
        assert_eq!(screen.notice().unwrap().message, "pressed right");
        screen.clear_notice(newer);
        assert!(screen.notice().is_none());

        assert_eq!(screen.handle_item(ItemEvent { id: 2, action: ItemAction::SwipedRight }), None);
        // Item events never touch the sequence
        assert_eq!(screen.records(), sample().as_slice());
    }
}
