//! Routes winit window events of one swipe surface into the touch and mouse adapters.

use std::{fmt, time::Instant};

use derive_more::Deref;
use glide_geometry::{Contains, Point, Rect};
use log::debug;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent},
};

use crate::{
    EventDisposition, ExternalEvent, MouseAdapter, PointerCapture, PointerCaptures, PointerSample,
    SwipeRecognizer, SwipeResult, TouchHandlers, TouchInput, TouchTracker,
};

/// A rectangular region of a window that recognizes horizontal swipes.
///
/// Gestures start inside `bounds`. Touches keep reporting to the surface after they leave it, mouse
/// gestures do so while the pointer is captured.
#[derive(Deref)]
pub struct SwipeSurface<C: PointerCapture = PointerCaptures> {
    #[deref]
    recognizer: SwipeRecognizer,
    mouse: MouseAdapter<C>,
    touches: TouchTracker,
    /// Touches that started inside the surface.
    surface_touches: Vec<u64>,
    /// Logical coordinates.
    bounds: Rect,
    scale_factor: f64,
    /// The most recent cursor position in logical coordinates.
    cursor: Option<Point>,
}

impl<C: PointerCapture> fmt::Debug for SwipeSurface<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeSurface")
            .field("recognizer", &self.recognizer)
            .field("mouse", &self.mouse)
            .field("bounds", &self.bounds)
            .field("scale_factor", &self.scale_factor)
            .finish_non_exhaustive()
    }
}

impl SwipeSurface {
    pub fn new(recognizer: SwipeRecognizer, bounds: Rect) -> Self {
        Self::with_capture(recognizer, bounds, PointerCaptures::default())
    }
}

impl<C: PointerCapture> SwipeSurface<C> {
    pub fn with_capture(recognizer: SwipeRecognizer, bounds: Rect, capture: C) -> Self {
        Self {
            recognizer,
            mouse: MouseAdapter::new(capture),
            touches: TouchTracker::default(),
            surface_touches: Vec::new(),
            bounds,
            scale_factor: 1.0,
            cursor: None,
        }
    }

    pub fn recognizer_mut(&mut self) -> &mut SwipeRecognizer {
        &mut self.recognizer
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// A change while dragging drops the gesture, its samples are in the old logical space.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor == self.scale_factor {
            return;
        }
        self.scale_factor = scale_factor;
        if self.recognizer.is_dragging() {
            debug!("Scale factor changed to {scale_factor} while dragging, gesture dropped");
            self.input_lost();
        }
    }

    /// `true` while a mouse gesture holds the pointer capture.
    pub fn is_capturing(&self) -> bool {
        self.mouse.is_capturing()
    }

    pub fn handle_event(&mut self, event: &ExternalEvent) -> EventDisposition {
        let time = event.time;
        match &event.event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_logical(*position);
                self.cursor = Some(pos);
                if self.mouse_reaches(pos) {
                    self.mouse_move(PointerSample::new(pos, time));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let Some(pos) = self.cursor else {
                    debug!("Mouse button {state:?} before any cursor position, ignored");
                    return EventDisposition::Pass;
                };
                let sample = PointerSample::new(pos, time);
                match state {
                    ElementState::Pressed if self.bounds.contains(pos) => self.mouse_down(sample),
                    ElementState::Released if self.mouse_reaches(pos) => {
                        self.mouse_up(sample);
                    }
                    _ => {}
                }
            }
            WindowEvent::Touch(touch) => return self.handle_touch(touch, time),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }
            WindowEvent::Focused(false) => self.input_lost(),
            _ => {}
        }
        EventDisposition::Pass
    }

    fn handle_touch(&mut self, touch: &Touch, time: Instant) -> EventDisposition {
        let pos = self.to_logical(touch.location);
        let input = self.touches.update(touch.id, touch.phase, pos, time);
        let on_surface = self.surface_touches.contains(&touch.id);

        match touch.phase {
            TouchPhase::Started if self.bounds.contains(pos) => {
                self.surface_touches.push(touch.id);
                self.touch_start(&input);
            }
            TouchPhase::Moved if on_surface => return self.touch_move(&input),
            TouchPhase::Ended if on_surface => {
                self.surface_touches.retain(|id| *id != touch.id);
                self.touch_end(&input);
            }
            TouchPhase::Cancelled if on_surface => {
                self.surface_touches.retain(|id| *id != touch.id);
                self.touch_cancel();
            }
            _ => {}
        }
        EventDisposition::Pass
    }

    pub fn touch_start(&mut self, input: &TouchInput) {
        // A touch takes over from an unfinished mouse gesture.
        self.mouse.release();
        self.recognizer.touch_start(input);
    }

    pub fn touch_move(&mut self, input: &TouchInput) -> EventDisposition {
        self.recognizer.touch_move(input)
    }

    pub fn touch_end(&mut self, input: &TouchInput) -> SwipeResult {
        self.mouse.release();
        self.recognizer.touch_end(input)
    }

    pub fn touch_cancel(&mut self) {
        self.mouse.release();
        self.recognizer.touch_cancel();
    }

    pub fn mouse_down(&mut self, sample: PointerSample) {
        // The mouse takes over, fingers still down no longer reach the gesture.
        self.surface_touches.clear();
        self.mouse.mouse_down(&mut self.recognizer, sample);
    }

    pub fn mouse_move(&mut self, sample: PointerSample) {
        self.mouse.mouse_move(&mut self.recognizer, sample);
    }

    pub fn mouse_up(&mut self, sample: PointerSample) -> SwipeResult {
        self.mouse.mouse_up(&mut self.recognizer, sample)
    }

    /// Drops every gesture and the capture, e.g. when the window lost focus and releases may never
    /// arrive.
    fn input_lost(&mut self) {
        self.mouse.abandon(&mut self.recognizer);
        self.recognizer.abandon();
        self.touches.clear();
        self.surface_touches.clear();
    }

    /// Mouse moves and releases reach the surface while captured, otherwise only inside its
    /// bounds.
    fn mouse_reaches(&self, pos: Point) -> bool {
        self.mouse.is_capturing() || self.bounds.contains(pos)
    }

    fn to_logical(&self, position: PhysicalPosition<f64>) -> Point {
        Point::new(position.x, position.y) / self.scale_factor
    }
}
