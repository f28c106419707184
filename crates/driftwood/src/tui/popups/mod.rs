//! Modal popups

mod lightbox;

pub use lightbox::Lightbox;
