//! Swipe State Machine
//!
//! Pure gesture tracking, independent of the DOM.
//! `Closed -> Pressed -> Dragging -> {OpenLeft | OpenRight | Closed}`

/// Gesture tuning, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Distance at which an action is fully revealed
    pub travel: f64,
    /// Minimum release distance that commits to an open state
    pub threshold: f64,
    /// Movement needed before the gesture locks to an axis
    pub activation_slop: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            travel: 100.0,
            threshold: 50.0,
            activation_slop: 5.0,
        }
    }
}

/// Which action panel is revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeSide {
    /// Left panel, revealed by dragging right
    Left,
    /// Right panel, revealed by dragging left
    Right,
}

/// Gesture state of one row
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SwipeState {
    #[default]
    Closed,
    /// Pointer is down but no axis has been chosen yet
    Pressed { origin_x: f64, origin_y: f64 },
    Dragging { origin_x: f64, offset: f64 },
    OpenLeft,
    OpenRight,
}

/// Transitions worth reporting to the owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeEvent {
    Opened(SwipeSide),
    Closed,
}

/// Per-row gesture tracker
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SwipeMachine {
    config: SwipeConfig,
    state: SwipeState,
}

impl SwipeMachine {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: SwipeState::Closed,
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SwipeState::OpenLeft | SwipeState::OpenRight)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SwipeState::Dragging { .. })
    }

    /// Pointer down. Pressing an open row dismisses it and consumes the gesture.
    pub fn press(&mut self, x: f64, y: f64) -> Option<SwipeEvent> {
        match self.state {
            SwipeState::Closed => {
                self.state = SwipeState::Pressed { origin_x: x, origin_y: y };
                None
            }
            SwipeState::OpenLeft | SwipeState::OpenRight => {
                self.state = SwipeState::Closed;
                Some(SwipeEvent::Closed)
            }
            // A second pointer while one is already tracked
            SwipeState::Pressed { .. } | SwipeState::Dragging { .. } => None,
        }
    }

    /// Pointer move
    pub fn drag_to(&mut self, x: f64, y: f64) {
        match self.state {
            SwipeState::Pressed { origin_x, origin_y } => {
                let dx = x - origin_x;
                let dy = y - origin_y;
                let slop = self.config.activation_slop;
                if dx.abs() <= slop && dy.abs() <= slop {
                    return;
                }
                self.state = if dx.abs() >= dy.abs() {
                    SwipeState::Dragging { origin_x, offset: dx }
                } else {
                    // Vertical movement belongs to the scroll container
                    SwipeState::Closed
                };
            }
            SwipeState::Dragging { origin_x, .. } => {
                self.state = SwipeState::Dragging {
                    origin_x,
                    offset: x - origin_x,
                };
            }
            _ => {}
        }
    }

    /// Pointer up. Only the side past the threshold at this moment can open.
    pub fn release(&mut self) -> Option<SwipeEvent> {
        match self.state {
            SwipeState::Dragging { offset, .. } => {
                if offset >= self.config.threshold {
                    self.state = SwipeState::OpenLeft;
                    Some(SwipeEvent::Opened(SwipeSide::Left))
                } else if offset <= -self.config.threshold {
                    self.state = SwipeState::OpenRight;
                    Some(SwipeEvent::Opened(SwipeSide::Right))
                } else {
                    self.state = SwipeState::Closed;
                    None
                }
            }
            SwipeState::Pressed { .. } => {
                self.state = SwipeState::Closed;
                None
            }
            _ => None,
        }
    }

    /// Pointer cancelled by the platform
    pub fn cancel(&mut self) {
        if matches!(self.state, SwipeState::Pressed { .. } | SwipeState::Dragging { .. }) {
            self.state = SwipeState::Closed;
        }
    }

    /// Explicit dismiss from the owner
    pub fn close(&mut self) -> Option<SwipeEvent> {
        let was_open = self.is_open();
        self.state = SwipeState::Closed;
        was_open.then_some(SwipeEvent::Closed)
    }

    /// Signed distance the row is currently pulled
    pub fn offset(&self) -> f64 {
        match self.state {
            SwipeState::Dragging { offset, .. } => offset,
            SwipeState::OpenLeft => self.config.travel,
            SwipeState::OpenRight => -self.config.travel,
            _ => 0.0,
        }
    }

    /// Row translation, limited to the travel distance
    pub fn translation(&self) -> f64 {
        let travel = self.config.travel;
        self.offset().clamp(-travel, travel)
    }

    /// Reveal progress of the left panel
    pub fn left_progress(&self) -> f64 {
        progress(self.offset(), self.config.travel)
    }

    /// Reveal progress of the right panel
    pub fn right_progress(&self) -> f64 {
        progress(-self.offset(), self.config.travel)
    }

    /// Opacity of the right panel: fast fade-in over the first fifth of travel
    pub fn right_opacity(&self) -> f64 {
        let travel = self.config.travel;
        interpolate(
            self.offset(),
            &[(-travel, 1.0), (-0.2 * travel, 0.9), (0.0, 0.0)],
        )
    }
}

/// `clamp(distance / travel, 0, 1)`
pub fn progress(distance: f64, travel: f64) -> f64 {
    if travel <= 0.0 {
        return if distance > 0.0 { 1.0 } else { 0.0 };
    }
    (distance / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear interpolation over ascending `(input, output)` stops,
/// clamped to the first and last outputs outside the range.
pub fn interpolate(input: f64, stops: &[(f64, f64)]) -> f64 {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };
    if input <= first.0 {
        return first.1;
    }
    if input >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if input <= x1 {
            if x1 == x0 {
                return y1;
            }
            let t = (input - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }
    last.1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(distance: f64) -> (SwipeMachine, Option<SwipeEvent>) {
        let mut m = SwipeMachine::default();
        m.press(200.0, 40.0);
        m.drag_to(200.0 + distance, 40.0);
        let event = m.release();
        (m, event)
    }

    #[test]
    fn test_release_below_threshold_closes_silently() {
        for d in [-49.9, -30.0, -6.0, 0.0, 3.0, 6.0, 25.0, 49.9] {
            let (m, event) = swipe(d);
            assert_eq!(m.state(), SwipeState::Closed, "distance {}", d);
            assert_eq!(event, None, "distance {}", d);
        }
    }

    #[test]
    fn test_release_past_threshold_opens_left() {
        for d in [50.0, 80.0, 100.0, 400.0] {
            let (m, event) = swipe(d);
            assert_eq!(m.state(), SwipeState::OpenLeft);
            assert_eq!(event, Some(SwipeEvent::Opened(SwipeSide::Left)));
        }
    }

    #[test]
    fn test_release_past_threshold_opens_right() {
        for d in [-50.0, -99.0, -250.0] {
            let (m, event) = swipe(d);
            assert_eq!(m.state(), SwipeState::OpenRight);
            assert_eq!(event, Some(SwipeEvent::Opened(SwipeSide::Right)));
        }
    }

    #[test]
    fn test_open_fires_once_per_transition() {
        let (mut m, event) = swipe(120.0);
        assert!(event.is_some());
        // Further releases and moves without a new press report nothing
        assert_eq!(m.release(), None);
        m.drag_to(500.0, 40.0);
        assert_eq!(m.release(), None);
        assert_eq!(m.state(), SwipeState::OpenLeft);
    }

    #[test]
    fn test_direction_reversal_only_final_side_counts() {
        let mut m = SwipeMachine::default();
        m.press(100.0, 0.0);
        m.drag_to(190.0, 0.0); // well past the left threshold
        m.drag_to(20.0, 0.0); // swing back past the right threshold
        assert_eq!(m.release(), Some(SwipeEvent::Opened(SwipeSide::Right)));

        let mut m = SwipeMachine::default();
        m.press(100.0, 0.0);
        m.drag_to(190.0, 0.0);
        m.drag_to(110.0, 0.0);
        assert_eq!(m.release(), None);
        assert_eq!(m.state(), SwipeState::Closed);
    }

    #[test]
    fn test_vertical_movement_abandons_swipe() {
        let mut m = SwipeMachine::default();
        m.press(100.0, 100.0);
        m.drag_to(103.0, 140.0);
        assert_eq!(m.state(), SwipeState::Closed);
        m.drag_to(300.0, 140.0);
        assert_eq!(m.release(), None);
        assert_eq!(m.state(), SwipeState::Closed);
    }

    #[test]
    fn test_movement_within_slop_keeps_pressed() {
        let mut m = SwipeMachine::default();
        m.press(100.0, 100.0);
        m.drag_to(104.0, 103.0);
        assert!(matches!(m.state(), SwipeState::Pressed { .. }));
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_press_on_open_row_dismisses() {
        let (mut m, _) = swipe(-80.0);
        assert!(m.is_open());
        assert_eq!(m.press(10.0, 10.0), Some(SwipeEvent::Closed));
        assert_eq!(m.state(), SwipeState::Closed);
        // The dismissing gesture is consumed
        m.drag_to(200.0, 10.0);
        assert_eq!(m.release(), None);
    }

    #[test]
    fn test_close_and_cancel() {
        let (mut m, _) = swipe(70.0);
        assert_eq!(m.close(), Some(SwipeEvent::Closed));
        assert_eq!(m.close(), None);

        m.press(0.0, 0.0);
        m.drag_to(90.0, 0.0);
        m.cancel();
        assert_eq!(m.state(), SwipeState::Closed);
        assert_eq!(m.release(), None);
    }

    #[test]
    fn test_progress_is_clamped_and_monotonic() {
        assert_eq!(progress(150.0, 100.0), 1.0);
        assert_eq!(progress(-20.0, 100.0), 0.0);
        assert_eq!(progress(40.0, 100.0), 0.4);

        let mut last = 0.0;
        for step in 0..300 {
            let p = progress(step as f64, 100.0);
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn test_machine_progress_and_translation() {
        let mut m = SwipeMachine::default();
        m.press(0.0, 0.0);
        m.drag_to(150.0, 0.0);
        assert_eq!(m.left_progress(), 1.0);
        assert_eq!(m.right_progress(), 0.0);
        assert_eq!(m.translation(), 100.0);

        m.drag_to(-30.0, 0.0);
        assert_eq!(m.left_progress(), 0.0);
        assert!((m.right_progress() - 0.3).abs() < 1e-9);
        assert_eq!(m.translation(), -30.0);
    }

    #[test]
    fn test_right_opacity_curve() {
        let at = |offset: f64| {
            let mut m = SwipeMachine::default();
            m.press(0.0, 0.0);
            m.drag_to(offset, 0.0);
            m.right_opacity()
        };
        assert_eq!(at(10.0), 0.0);
        assert!((at(-20.0) - 0.9).abs() < 1e-9);
        assert!((at(-10.0) - 0.45).abs() < 1e-9);
        assert!((at(-60.0) - 0.95).abs() < 1e-9);
        assert_eq!(at(-180.0), 1.0);
    }

    #[test]
    fn test_interpolate_edges() {
        assert_eq!(interpolate(5.0, &[]), 0.0);
        assert_eq!(interpolate(5.0, &[(0.0, 2.0)]), 2.0);
        assert_eq!(interpolate(-1.0, &[(0.0, 0.0), (10.0, 1.0)]), 0.0);
        assert_eq!(interpolate(11.0, &[(0.0, 0.0), (10.0, 1.0)]), 1.0);
        assert_eq!(interpolate(5.0, &[(0.0, 0.0), (10.0, 1.0)]), 0.5);
    }
}
