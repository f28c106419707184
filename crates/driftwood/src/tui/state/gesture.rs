//! Swipe gesture tracking
//!
//! Reduces a left-button press/drag/release sequence to a completed
//! [`TouchGesture`]. Terminal rows are coarse, so each row maps to a fixed
//! number of gesture units; a short flick across a handful of rows clears
//! the navigator's minimum swipe distance, a slow drag does not.

use std::time::Instant;

use driftwood_core::navigator::TouchGesture;

/// Gesture units per terminal row.
pub const ROW_UNITS: f32 = 20.0;

/// Rows of travel below which a release still counts as a click.
const CLICK_SLOP_ROWS: u16 = 1;

/// What a button release turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Press and release in (nearly) the same place.
    Click { x: u16, y: u16 },
    /// A vertical swipe.
    Swipe(TouchGesture),
}

/// Tracks one in-flight press gesture.
#[derive(Debug, Default)]
pub struct GestureTracker {
    pressed: Option<(u16, u16, Instant)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left button pressed.
    pub fn press(&mut self, x: u16, y: u16) {
        self.pressed = Some((x, y, Instant::now()));
    }

    /// Left button released; classifies the gesture. Returns `None` for a
    /// release with no tracked press.
    pub fn release(&mut self, x: u16, y: u16) -> Option<GestureOutcome> {
        let (px, py, at) = self.pressed.take()?;

        if py.abs_diff(y) <= CLICK_SLOP_ROWS {
            return Some(GestureOutcome::Click { x: px, y: py });
        }

        Some(GestureOutcome::Swipe(TouchGesture {
            start_y: py as f32 * ROW_UNITS,
            end_y: y as f32 * ROW_UNITS,
            elapsed: at.elapsed(),
        }))
    }

    /// Drop the in-flight press (e.g. focus lost).
    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_release_without_press_is_none() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.release(3, 3), None);
    }

    #[test]
    fn test_stationary_release_is_click() {
        let mut tracker = GestureTracker::new();
        tracker.press(10, 5);
        assert_eq!(
            tracker.release(10, 5),
            Some(GestureOutcome::Click { x: 10, y: 5 })
        );
    }

    #[test]
    fn test_vertical_travel_is_swipe() {
        let mut tracker = GestureTracker::new();
        tracker.press(10, 20);
        let Some(GestureOutcome::Swipe(gesture)) = tracker.release(10, 12) else {
            panic!("expected swipe");
        };

        // 8 rows of upward travel in gesture units
        assert_eq!(gesture.start_y - gesture.end_y, 8.0 * ROW_UNITS);
        assert!(gesture.elapsed < Duration::from_millis(100));
    }

    #[test]
    fn test_cancel_discards_press() {
        let mut tracker = GestureTracker::new();
        tracker.press(1, 1);
        tracker.cancel();
        assert_eq!(tracker.release(1, 9), None);
    }
}
