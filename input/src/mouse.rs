use std::fmt;

use log::{debug, warn};

use crate::{PointerCapture, PointerCaptures, PointerSample, SwipeRecognizer, SwipeResult};

/// Drives a [`SwipeRecognizer`] from mouse input.
///
/// A capture is held from mouse down until the gesture ends, is abandoned, or the adapter is
/// dropped. While it is held, the host delivers moves and releases from anywhere in the window.
/// Moves and releases are ignored unless the current gesture was started by the mouse.
pub struct MouseAdapter<C: PointerCapture = PointerCaptures> {
    capture: C,
    guard: Option<C::Guard>,
    tracking: bool,
}

impl<C: PointerCapture> fmt::Debug for MouseAdapter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseAdapter")
            .field("tracking", &self.tracking)
            .field("capturing", &self.is_capturing())
            .finish()
    }
}

impl<C: PointerCapture + Default> Default for MouseAdapter<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: PointerCapture> MouseAdapter<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            guard: None,
            tracking: false,
        }
    }

    /// `true` while the mouse owns the current gesture.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn is_capturing(&self) -> bool {
        self.guard.is_some()
    }

    pub fn mouse_down(&mut self, recognizer: &mut SwipeRecognizer, sample: PointerSample) {
        recognizer.start(sample);
        self.tracking = true;
        if self.guard.is_some() {
            return;
        }
        match self.capture.capture() {
            Ok(guard) => self.guard = Some(guard),
            Err(e) => warn!("Pointer capture failed, tracking inside the surface only: {e:?}"),
        }
    }

    /// Mouse moves never suppress default handling.
    pub fn mouse_move(&mut self, recognizer: &mut SwipeRecognizer, sample: PointerSample) {
        if self.tracking {
            recognizer.move_to(sample);
        }
    }

    pub fn mouse_up(
        &mut self,
        recognizer: &mut SwipeRecognizer,
        sample: PointerSample,
    ) -> SwipeResult {
        if !self.tracking {
            return SwipeResult::None;
        }
        let result = recognizer.end(sample.pos.x, sample.time);
        self.release();
        result
    }

    /// The mouse input got lost, drop the gesture and the capture.
    pub fn abandon(&mut self, recognizer: &mut SwipeRecognizer) {
        if self.tracking {
            recognizer.abandon();
        }
        self.release();
    }

    /// Stops tracking and drops the capture, the recognizer is left as is.
    pub fn release(&mut self) {
        self.tracking = false;
        if self.guard.take().is_some() {
            debug!("Mouse gesture capture dropped");
        }
    }
}
