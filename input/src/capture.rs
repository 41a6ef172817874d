//! Window-wide pointer capture held while a mouse gesture is active.

use std::{cell::Cell, rc::Rc};

use anyhow::Result;
use log::debug;

/// Acquires window-wide pointer tracking for the duration of a gesture.
///
/// The returned guard releases the capture when dropped.
pub trait PointerCapture {
    type Guard;

    fn capture(&mut self) -> Result<Self::Guard>;
}

/// A shared registry of live pointer captures.
///
/// Clones share the same registry, so the host can hand one clone to every surface of a window
/// and route pointer events window-wide while [`is_captured`](Self::is_captured) is `true`.
#[derive(Debug, Clone, Default)]
pub struct PointerCaptures {
    live: Rc<Cell<usize>>,
}

impl PointerCaptures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_captured(&self) -> bool {
        self.live.get() > 0
    }

    /// The number of captures currently held.
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl PointerCapture for PointerCaptures {
    type Guard = CaptureGuard;

    fn capture(&mut self) -> Result<CaptureGuard> {
        self.live.set(self.live.get() + 1);
        debug!("Pointer captured ({} live)", self.live.get());
        Ok(CaptureGuard {
            live: self.live.clone(),
        })
    }
}

#[derive(Debug)]
#[must_use]
pub struct CaptureGuard {
    live: Rc<Cell<usize>>,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        debug!("Pointer capture released ({} live)", self.live.get());
    }
}
