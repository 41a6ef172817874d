//! Horizontal swipe recognition for touch and mouse input.
//!
//! Touch and mouse input are normalized into [`PointerSample`]s and drive one
//! [`SwipeRecognizer`]. Horizontal swipes are classified at the end of a gesture, vertical ones
//! are left to native scrolling.
mod axis_lock;
mod capture;
mod config;
mod external_event;
mod mouse;
mod recognizer;
mod sample;
mod session;
mod surface;
mod touch;

pub use axis_lock::*;
pub use capture::*;
pub use config::*;
pub use external_event::*;
pub use mouse::*;
pub use recognizer::*;
pub use sample::*;
pub use session::*;
pub use surface::*;
pub use touch::*;

/// What the host should do with the input event that was just handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EventDisposition {
    /// Let the host handle the event, native scrolling included.
    #[default]
    Pass,
    /// Suppress the default handling and stop propagating the event.
    Consume,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        self == EventDisposition::Consume
    }
}
