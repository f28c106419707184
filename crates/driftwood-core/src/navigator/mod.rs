//! Section navigation state machine
//!
//! Owns which full-viewport section is currently active and serializes
//! transitions between sections across heterogeneous inputs: wheel deltas,
//! navigation keys, swipe gestures, and direct jumps from indicator dots or
//! menu entries.
//!
//! The navigator arbitrates between "scroll within the section" and "switch
//! section": wheel and swipe input only switches sections when the active
//! section is already scrolled to the matching extreme, while keys and
//! direct jumps switch unconditionally. At most one transition is in flight
//! at any time; requests arriving while a transition settles are dropped,
//! never queued.

mod scroll;

use std::time::{Duration, Instant};

use tracing::{debug, trace};

pub use scroll::SectionScroll;

/// Fixed time after which the transition lock releases, independent of any
/// visual animation still running.
pub const SETTLE_DURATION: Duration = Duration::from_millis(800);

/// Minimum swipe travel (in gesture units) before a gesture counts.
pub const MIN_SWIPE_DISTANCE: f32 = 80.0;

/// Maximum gesture duration for a swipe to count.
pub const MAX_SWIPE_DURATION: Duration = Duration::from_millis(400);

/// Monotonically increasing identifier for a transition. Deferred work
/// scheduled for a transition (reveal cascades) is keyed by this id so stale
/// schedules can be dropped when a newer transition starts.
pub type TransitionId = u64;

/// Navigation keys the navigator recognizes. Callers map their event
/// source's key codes onto this set; unrecognized keys never reach the
/// navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    PageDown,
    ArrowUp,
    PageUp,
}

/// What the navigator did with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// A transition was triggered (or the key is reserved for navigation);
    /// the caller must suppress the event's default handling.
    Consumed,
    /// The event was left alone; native in-section scrolling may proceed.
    PassThrough,
}

impl InputOutcome {
    pub fn is_consumed(self) -> bool {
        self == InputOutcome::Consumed
    }
}

/// A completed swipe gesture, reduced to its endpoints and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGesture {
    pub start_y: f32,
    pub end_y: f32,
    pub elapsed: Duration,
}

/// Hooks a navigator invokes around a transition. Implementations drive the
/// visual side (reveal cascades, ornament pulses) without the navigator
/// depending on a rendering surface.
pub trait TransitionHooks {
    /// Called when a transition begins, before section flags are swapped.
    fn on_transition_start(&mut self, _from: usize, _to: usize) {}

    /// Called once per transition with the newly active section's index and
    /// its content item count.
    fn on_section_entered(&mut self, _transition: TransitionId, _index: usize, _item_count: usize) {
    }
}

/// Hooks implementation that does nothing.
pub struct NoopHooks;

impl TransitionHooks for NoopHooks {}

/// One full-viewport content panel in the scrolling sequence.
#[derive(Debug)]
pub struct Section {
    /// Exactly one section is active at any time.
    pub active: bool,
    /// Internal scroll position; sections may be taller than the viewport.
    pub scroll: SectionScroll,
    /// Number of content items the section reveals on entry.
    pub item_count: usize,
}

/// External proxy for a section (an indicator dot or menu entry). Kept in
/// 1:1 index correspondence with the sections; the indicator at the current
/// index is active and all others are not.
#[derive(Debug)]
pub struct Indicator {
    pub active: bool,
}

#[derive(Debug)]
struct Transition {
    id: TransitionId,
    started_at: Instant,
}

/// The section navigator. Created once at startup and mutated only through
/// its own methods; out-of-range or redundant requests are silently
/// absorbed.
pub struct SectionNavigator {
    sections: Vec<Section>,
    indicators: Vec<Indicator>,
    current: usize,
    transition: Option<Transition>,
    next_transition_id: TransitionId,
    settle: Duration,
}

impl SectionNavigator {
    /// Create a navigator over `item_counts.len()` sections, one entry per
    /// section giving its content item count. Starts at section 0,
    /// unlocked.
    ///
    /// Panics when given zero sections; a navigator without sections is an
    /// integration mistake best surfaced at startup.
    pub fn new(item_counts: &[usize]) -> Self {
        Self::with_settle(item_counts, SETTLE_DURATION)
    }

    /// Create a navigator with a custom settle duration.
    pub fn with_settle(item_counts: &[usize], settle: Duration) -> Self {
        assert!(
            !item_counts.is_empty(),
            "SectionNavigator requires at least one section"
        );

        let sections = item_counts
            .iter()
            .enumerate()
            .map(|(i, &item_count)| Section {
                active: i == 0,
                scroll: SectionScroll::new(),
                item_count,
            })
            .collect();
        let indicators = (0..item_counts.len())
            .map(|i| Indicator { active: i == 0 })
            .collect();

        Self {
            sections,
            indicators,
            current: 0,
            transition: None,
            next_transition_id: 0,
            settle,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Internal scroll state of the active section.
    pub fn active_scroll(&self) -> &SectionScroll {
        &self.sections[self.current].scroll
    }

    pub fn active_scroll_mut(&mut self) -> &mut SectionScroll {
        &mut self.sections[self.current].scroll
    }

    /// Whether a transition is currently settling. While locked, every
    /// navigation request is dropped.
    pub fn is_locked(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| t.started_at.elapsed() < self.settle)
    }

    /// Id of the transition currently settling, if any.
    pub fn last_transition(&self) -> Option<TransitionId> {
        self.transition.as_ref().map(|t| t.id)
    }

    /// Clear the lock once the settle duration has elapsed. Returns true if
    /// the lock was released by this call. Intended to be driven from the
    /// host's tick loop.
    pub fn release_if_settled(&mut self) -> bool {
        let settled = self
            .transition
            .as_ref()
            .is_some_and(|t| t.started_at.elapsed() >= self.settle);
        if settled {
            if let Some(t) = self.transition.take() {
                trace!(transition = t.id, "transition settled");
            }
        }
        settled
    }

    /// Drop a pending transition lock without waiting out the settle
    /// duration. Teardown path; never called during normal input handling.
    pub fn cancel_transition(&mut self) {
        if let Some(t) = self.transition.take() {
            debug!(transition = t.id, "transition cancelled");
        }
    }

    /// Request that the section at `index` become active.
    ///
    /// A no-op when `index` is the current section, out of range, or a
    /// transition is already settling. Otherwise swaps the active flags,
    /// resets the target's internal scroll, syncs the indicators, invokes
    /// the hooks, and acquires the transition lock.
    pub fn go_to(&mut self, index: usize, hooks: &mut dyn TransitionHooks) {
        if index == self.current || index >= self.sections.len() || self.is_locked() {
            trace!(index, current = self.current, "navigation request dropped");
            return;
        }

        let from = self.current;
        let id = self.next_transition_id;
        self.next_transition_id += 1;

        hooks.on_transition_start(from, index);

        self.sections[from].active = false;
        self.indicators[from].active = false;

        let target = &mut self.sections[index];
        target.active = true;
        target.scroll.reset();
        self.indicators[index].active = true;
        self.current = index;

        self.transition = Some(Transition {
            id,
            started_at: Instant::now(),
        });

        hooks.on_section_entered(id, index, self.sections[index].item_count);
        debug!(from, to = index, transition = id, "section transition");
    }

    /// Advance to the next section, clamped at the end (no wraparound).
    pub fn advance(&mut self, hooks: &mut dyn TransitionHooks) {
        if self.current + 1 < self.sections.len() {
            self.go_to(self.current + 1, hooks);
        }
    }

    /// Retreat to the previous section, clamped at the start.
    pub fn retreat(&mut self, hooks: &mut dyn TransitionHooks) {
        if self.current > 0 {
            self.go_to(self.current - 1, hooks);
        }
    }

    /// Decide whether a wheel delta switches sections or is left to native
    /// in-section scrolling.
    ///
    /// Boundary-clamped policy: a downward delta only advances when the
    /// active section is already at its bottom extreme, an upward delta
    /// only retreats at the top extreme. Returns `Consumed` exactly when a
    /// transition started.
    pub fn handle_wheel(
        &mut self,
        delta: f32,
        at_top: bool,
        at_bottom: bool,
        hooks: &mut dyn TransitionHooks,
    ) -> InputOutcome {
        if self.is_locked() {
            return InputOutcome::PassThrough;
        }

        let before = self.current;
        if delta > 0.0 && at_bottom {
            self.advance(hooks);
        } else if delta < 0.0 && at_top {
            self.retreat(hooks);
        }

        if self.current != before {
            InputOutcome::Consumed
        } else {
            InputOutcome::PassThrough
        }
    }

    /// Map a navigation key to advance/retreat. Keys bypass boundary
    /// checks entirely. Recognized keys are always consumed, even when the
    /// move is clamped at a boundary.
    pub fn handle_key(&mut self, key: NavKey, hooks: &mut dyn TransitionHooks) -> InputOutcome {
        if self.is_locked() {
            return InputOutcome::PassThrough;
        }

        match key {
            NavKey::ArrowDown | NavKey::PageDown => self.advance(hooks),
            NavKey::ArrowUp | NavKey::PageUp => self.retreat(hooks),
        }
        InputOutcome::Consumed
    }

    /// Decide whether a completed swipe gesture switches sections.
    ///
    /// The gesture must travel further than [`MIN_SWIPE_DISTANCE`] and
    /// finish within [`MAX_SWIPE_DURATION`]; the boundary condition is
    /// symmetric to the wheel policy.
    pub fn handle_touch(
        &mut self,
        gesture: TouchGesture,
        at_top: bool,
        at_bottom: bool,
        hooks: &mut dyn TransitionHooks,
    ) -> InputOutcome {
        if self.is_locked() {
            return InputOutcome::PassThrough;
        }

        let diff = gesture.start_y - gesture.end_y;
        if diff.abs() <= MIN_SWIPE_DISTANCE || gesture.elapsed >= MAX_SWIPE_DURATION {
            return InputOutcome::PassThrough;
        }

        let before = self.current;
        if diff > 0.0 && at_bottom {
            self.advance(hooks);
        } else if diff < 0.0 && at_top {
            self.retreat(hooks);
        }

        if self.current != before {
            InputOutcome::Consumed
        } else {
            InputOutcome::PassThrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST_SETTLE: Duration = Duration::from_millis(20);

    fn nav(sections: usize) -> SectionNavigator {
        SectionNavigator::with_settle(&vec![4; sections], FAST_SETTLE)
    }

    fn wait_out_lock(nav: &mut SectionNavigator) {
        std::thread::sleep(FAST_SETTLE + Duration::from_millis(5));
        nav.release_if_settled();
    }

    fn assert_exactly_one_active(nav: &SectionNavigator, index: usize) {
        for (i, section) in nav.sections().iter().enumerate() {
            assert_eq!(section.active, i == index, "section {} active flag", i);
        }
        for (i, dot) in nav.indicators().iter().enumerate() {
            assert_eq!(dot.active, i == index, "indicator {} active flag", i);
        }
    }

    #[test]
    fn test_go_to_switches_and_locks() {
        let mut nav = nav(5);
        nav.go_to(2, &mut NoopHooks);

        assert_eq!(nav.current(), 2);
        assert!(nav.is_locked());
        assert_exactly_one_active(&nav, 2);
    }

    #[test]
    fn test_go_to_same_index_is_noop() {
        let mut nav = nav(3);
        nav.go_to(0, &mut NoopHooks);

        assert_eq!(nav.current(), 0);
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut nav = nav(3);
        nav.go_to(3, &mut NoopHooks);
        nav.go_to(99, &mut NoopHooks);

        assert_eq!(nav.current(), 0);
        assert!(!nav.is_locked());
        assert_exactly_one_active(&nav, 0);
    }

    #[test]
    fn test_requests_dropped_while_locked() {
        let mut nav = nav(5);
        nav.go_to(1, &mut NoopHooks);
        assert!(nav.is_locked());

        // Dropped, not queued
        nav.go_to(3, &mut NoopHooks);
        assert_eq!(nav.current(), 1);

        wait_out_lock(&mut nav);
        nav.go_to(3, &mut NoopHooks);
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn test_lock_clears_after_settle_duration_only() {
        let mut nav = SectionNavigator::with_settle(&[1, 1], Duration::from_millis(50));
        nav.go_to(1, &mut NoopHooks);

        std::thread::sleep(Duration::from_millis(5));
        assert!(!nav.release_if_settled());
        assert!(nav.is_locked());

        std::thread::sleep(Duration::from_millis(60));
        assert!(nav.release_if_settled());
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut nav = nav(2);
        nav.go_to(1, &mut NoopHooks);
        wait_out_lock(&mut nav);

        nav.advance(&mut NoopHooks);
        assert_eq!(nav.current(), 1);
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_retreat_clamps_at_start() {
        let mut nav = nav(2);
        nav.retreat(&mut NoopHooks);
        assert_eq!(nav.current(), 0);
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_wheel_down_requires_bottom_boundary() {
        let mut nav = nav(3);

        let outcome = nav.handle_wheel(1.0, false, false, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::PassThrough);
        assert_eq!(nav.current(), 0);

        let outcome = nav.handle_wheel(1.0, false, true, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_wheel_up_requires_top_boundary() {
        let mut nav = nav(3);
        nav.go_to(1, &mut NoopHooks);
        wait_out_lock(&mut nav);

        let outcome = nav.handle_wheel(-1.0, false, false, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::PassThrough);
        assert_eq!(nav.current(), 1);

        let outcome = nav.handle_wheel(-1.0, true, false, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_wheel_ignored_while_locked() {
        let mut nav = nav(3);
        nav.go_to(1, &mut NoopHooks);

        let outcome = nav.handle_wheel(1.0, false, true, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::PassThrough);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_keyboard_bypasses_boundaries() {
        let mut nav = nav(5);

        // Section not at its bottom extreme; keys advance anyway
        nav.sections[0].scroll.update_max_scroll(40, 10);
        assert!(!nav.active_scroll().at_bottom());

        let outcome = nav.handle_key(NavKey::ArrowDown, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_keyboard_walk_to_last_section() {
        let mut nav = nav(5);

        for expected in 1..5 {
            nav.handle_key(NavKey::ArrowDown, &mut NoopHooks);
            assert_eq!(nav.current(), expected);
            wait_out_lock(&mut nav);
        }

        // Fifth press is a clamped no-op
        let outcome = nav.handle_key(NavKey::ArrowDown, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn test_touch_swipe_up_advances_at_bottom() {
        let gesture = TouchGesture {
            start_y: 300.0,
            end_y: 200.0,
            elapsed: Duration::from_millis(150),
        };

        {
            let mut nav = nav(3);
            let outcome = nav.handle_touch(gesture, false, true, &mut NoopHooks);
            assert_eq!(outcome, InputOutcome::Consumed);
            assert_eq!(nav.current(), 1);
        }

        let mut nav = nav(3);
        let outcome = nav.handle_touch(gesture, false, false, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::PassThrough);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_touch_below_min_distance_never_triggers() {
        let mut nav = nav(3);
        let gesture = TouchGesture {
            start_y: 279.0,
            end_y: 200.0,
            elapsed: Duration::from_millis(150),
        };

        let outcome = nav.handle_touch(gesture, false, true, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::PassThrough);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_touch_exceeding_max_duration_never_triggers() {
        let mut nav = nav(3);
        let gesture = TouchGesture {
            start_y: 300.0,
            end_y: 200.0,
            elapsed: Duration::from_millis(401),
        };

        let outcome = nav.handle_touch(gesture, false, true, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::PassThrough);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_touch_swipe_down_retreats_at_top() {
        let mut nav = nav(3);
        nav.go_to(2, &mut NoopHooks);
        wait_out_lock(&mut nav);

        let gesture = TouchGesture {
            start_y: 200.0,
            end_y: 310.0,
            elapsed: Duration::from_millis(120),
        };
        let outcome = nav.handle_touch(gesture, true, false, &mut NoopHooks);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_round_trip_restores_state() {
        let mut nav = nav(4);

        nav.go_to(1, &mut NoopHooks);
        wait_out_lock(&mut nav);
        nav.go_to(3, &mut NoopHooks);
        wait_out_lock(&mut nav);
        nav.go_to(1, &mut NoopHooks);
        wait_out_lock(&mut nav);

        assert_eq!(nav.current(), 1);
        assert!(!nav.is_locked());
        assert_exactly_one_active(&nav, 1);
    }

    #[test]
    fn test_transition_resets_target_scroll() {
        let mut nav = nav(3);
        nav.sections[1].scroll.update_max_scroll(40, 10);
        nav.sections[1].scroll.scroll_down(15);
        assert!(nav.sections[1].scroll.offset > 0);

        nav.go_to(1, &mut NoopHooks);
        assert_eq!(nav.active_scroll().offset, 0);
    }

    #[test]
    fn test_hooks_fire_once_per_transition() {
        struct Recorder {
            starts: Vec<(usize, usize)>,
            entries: Vec<(TransitionId, usize, usize)>,
        }
        impl TransitionHooks for Recorder {
            fn on_transition_start(&mut self, from: usize, to: usize) {
                self.starts.push((from, to));
            }
            fn on_section_entered(&mut self, id: TransitionId, index: usize, items: usize) {
                self.entries.push((id, index, items));
            }
        }

        let mut hooks = Recorder {
            starts: Vec::new(),
            entries: Vec::new(),
        };
        let mut nav = SectionNavigator::with_settle(&[2, 7], FAST_SETTLE);

        nav.go_to(1, &mut hooks);
        // Dropped request must not fire hooks
        nav.go_to(0, &mut hooks);

        assert_eq!(hooks.starts, vec![(0, 1)]);
        assert_eq!(hooks.entries, vec![(0, 1, 7)]);
    }

    #[test]
    fn test_transition_ids_increase() {
        let mut nav = nav(3);

        nav.go_to(1, &mut NoopHooks);
        let first = nav.last_transition().unwrap();
        wait_out_lock(&mut nav);

        nav.go_to(2, &mut NoopHooks);
        let second = nav.last_transition().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_cancel_transition_unlocks() {
        let mut nav = nav(3);
        nav.go_to(1, &mut NoopHooks);
        assert!(nav.is_locked());

        nav.cancel_transition();
        assert!(!nav.is_locked());
        nav.go_to(2, &mut NoopHooks);
        assert_eq!(nav.current(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one section")]
    fn test_zero_sections_panics() {
        SectionNavigator::new(&[]);
    }
}
