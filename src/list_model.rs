//! List Utilities
//!
//! Row layout and incremental rendering for item lists.

use crate::models::Photo;

/// Rows rendered before the first scroll
pub const INITIAL_ROWS: usize = 10;
/// Rows added each time the end comes into reach
pub const BATCH_ROWS: usize = 20;

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub photo: Photo,
}

impl ListRow {
    /// `For` key: the record id
    pub fn key(&self) -> u32 {
        self.photo.id
    }
}

/// Whether the row for `id` gets a separator in `records`.
/// Separators sit between rows, never before the first.
pub fn separator_before(records: &[Photo], id: u32) -> bool {
    records.first().is_some_and(|first| first.id != id)
}

/// Lay out records in order, one row each
pub fn layout_rows(records: &[Photo]) -> Vec<ListRow> {
    records
        .iter()
        .map(|photo| ListRow { photo: photo.clone() })
        .collect()
}

/// How many rows of a sequence are mounted.
/// Grows as the user nears the end; the sequence itself is never consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderWindow {
    mounted: usize,
}

impl Default for RenderWindow {
    fn default() -> Self {
        Self { mounted: INITIAL_ROWS }
    }
}

impl RenderWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows to mount out of `total`
    pub fn visible(&self, total: usize) -> usize {
        self.mounted.min(total)
    }

    /// Grow when less than one viewport of content remains below.
    /// Returns whether more rows were mounted.
    pub fn on_scroll(&mut self, total: usize, scroll_top: f64, client_height: f64, scroll_height: f64) -> bool {
        if self.mounted >= total {
            return false;
        }
        let remaining = scroll_height - (scroll_top + client_height);
        if remaining > client_height {
            return false;
        }
        self.mounted = (self.mounted + BATCH_ROWS).min(total);
        true
    }

    /// Grow while the mounted rows span less than two viewports. A list
    /// that cannot scroll never reports a scroll, so this runs on mount,
    /// after each growth and on resize. Returns whether more rows were mounted.
    pub fn fill(&mut self, total: usize, client_height: f64, scroll_height: f64) -> bool {
        // Not laid out (hidden or detached)
        if client_height <= 0.0 {
            return false;
        }
        if self.mounted >= total || scroll_height > 2.0 * client_height {
            return false;
        }
        self.mounted = (self.mounted + BATCH_ROWS).min(total);
        true
    }

    /// Start over for a new sequence
    pub fn reset(&mut self) {
        self.mounted = INITIAL_ROWS;
    }
}
