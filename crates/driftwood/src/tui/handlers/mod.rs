//! Event handlers
//!
//! Keyboard, mouse, theme, and tick handlers implemented on `App`.

mod keyboard;
mod mouse;
mod themes;
mod tick;
