//! App State Components
//!
//! State that belongs to the TUI layer: cached layout areas for hit
//! testing and in-progress swipe gesture tracking.

mod gesture;
mod layout;

pub use gesture::{GestureOutcome, GestureTracker};
pub use layout::LayoutState;
