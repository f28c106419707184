//! Staggered reveal scheduling for section content
//!
//! When a section becomes active its content items fade in one after
//! another. The schedule is explicit state keyed by the transition id that
//! started it: beginning a new schedule replaces the old one wholesale, so
//! a transition requested while a previous cascade is still running never
//! leaves stale timers behind.

use std::time::{Duration, Instant};

use crate::navigator::TransitionId;

/// Delay between consecutive item reveals.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Duration of a single item's fade once it starts.
pub const REVEAL_FADE: Duration = Duration::from_millis(600);

/// Where a content item is in its reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    /// The item's slot in the cascade has not been reached yet.
    Hidden,
    /// Fading in; progress runs 0.0..1.0.
    Entering(f32),
    /// Fully visible.
    Settled,
}

#[derive(Debug)]
struct Cascade {
    transition: TransitionId,
    started_at: Instant,
    item_count: usize,
}

/// Reveal schedule for the active section's items. At most one cascade
/// exists at a time.
#[derive(Debug)]
pub struct RevealSchedule {
    cascade: Option<Cascade>,
    stagger: Duration,
    fade: Duration,
}

impl RevealSchedule {
    /// Schedule with the standard timings and nothing running; every item
    /// reports `Settled` until a cascade begins.
    pub fn new() -> Self {
        Self::with_timings(REVEAL_STAGGER, REVEAL_FADE)
    }

    pub fn with_timings(stagger: Duration, fade: Duration) -> Self {
        Self {
            cascade: None,
            stagger,
            fade,
        }
    }

    /// Start a cascade over `item_count` items for the given transition,
    /// replacing any cascade still in flight.
    pub fn begin(&mut self, transition: TransitionId, item_count: usize) {
        self.cascade = Some(Cascade {
            transition,
            started_at: Instant::now(),
            item_count,
        });
    }

    /// Drop the running cascade; everything reports `Settled` again.
    pub fn cancel(&mut self) {
        self.cascade = None;
    }

    /// Transition the running cascade belongs to, if any.
    pub fn transition(&self) -> Option<TransitionId> {
        self.cascade.as_ref().map(|c| c.transition)
    }

    /// Reveal phase of the item at `index`. Items outside the cascade's
    /// range are always `Settled`.
    pub fn phase(&self, index: usize) -> RevealPhase {
        let Some(cascade) = &self.cascade else {
            return RevealPhase::Settled;
        };
        if index >= cascade.item_count {
            return RevealPhase::Settled;
        }

        let start = self.stagger * index as u32;
        let elapsed = cascade.started_at.elapsed();
        if elapsed < start {
            RevealPhase::Hidden
        } else if elapsed < start + self.fade {
            let progress = (elapsed - start).as_secs_f32() / self.fade.as_secs_f32();
            RevealPhase::Entering(progress)
        } else {
            RevealPhase::Settled
        }
    }

    /// Whether any item is still hidden or fading.
    pub fn is_animating(&self) -> bool {
        match &self.cascade {
            Some(cascade) if cascade.item_count > 0 => {
                let total = self.stagger * (cascade.item_count - 1) as u32 + self.fade;
                cascade.started_at.elapsed() < total
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> RevealSchedule {
        RevealSchedule::with_timings(Duration::from_millis(10), Duration::from_millis(20))
    }

    #[test]
    fn test_idle_schedule_is_settled() {
        let schedule = RevealSchedule::new();
        assert_eq!(schedule.phase(0), RevealPhase::Settled);
        assert!(!schedule.is_animating());
    }

    #[test]
    fn test_first_item_enters_immediately() {
        let mut schedule = fast();
        schedule.begin(0, 4);

        assert!(matches!(schedule.phase(0), RevealPhase::Entering(_)));
        assert_eq!(schedule.phase(3), RevealPhase::Hidden);
        assert!(schedule.is_animating());
    }

    #[test]
    fn test_items_stagger_then_settle() {
        let mut schedule = fast();
        schedule.begin(0, 3);

        std::thread::sleep(Duration::from_millis(15));
        assert!(matches!(schedule.phase(1), RevealPhase::Entering(_)));

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(schedule.phase(0), RevealPhase::Settled);
        assert_eq!(schedule.phase(2), RevealPhase::Settled);
        assert!(!schedule.is_animating());
    }

    #[test]
    fn test_out_of_range_items_are_settled() {
        let mut schedule = fast();
        schedule.begin(0, 2);
        assert_eq!(schedule.phase(5), RevealPhase::Settled);
    }

    #[test]
    fn test_begin_replaces_stale_cascade() {
        let mut schedule = fast();
        schedule.begin(0, 3);
        std::thread::sleep(Duration::from_millis(25));

        schedule.begin(1, 2);
        assert_eq!(schedule.transition(), Some(1));
        // The new cascade restarts from the beginning
        assert_eq!(schedule.phase(1), RevealPhase::Hidden);
        assert!(schedule.is_animating());
    }

    #[test]
    fn test_cancel_settles_everything() {
        let mut schedule = fast();
        schedule.begin(7, 4);
        schedule.cancel();

        assert_eq!(schedule.phase(0), RevealPhase::Settled);
        assert_eq!(schedule.transition(), None);
    }

    #[test]
    fn test_empty_cascade_never_animates() {
        let mut schedule = fast();
        schedule.begin(0, 0);
        assert!(!schedule.is_animating());
    }
}
