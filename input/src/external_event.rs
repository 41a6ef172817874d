use std::time::Instant;

use derive_more::Constructor;
use winit::event::WindowEvent;

/// A window event and the time it arrived.
///
/// winit events do not carry timestamps, so the host stamps them when they are received.
#[derive(Debug, Constructor)]
pub struct ExternalEvent {
    pub event: WindowEvent,
    pub time: Instant,
}

impl ExternalEvent {
    /// Stamps `event` with the current time.
    pub fn now(event: WindowEvent) -> Self {
        Self::new(event, Instant::now())
    }
}
