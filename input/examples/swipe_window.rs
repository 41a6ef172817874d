//! Opens a window whose client area is one swipe surface and logs the page a carousel would
//! show.
//!
//! `cargo run --example swipe_window -- [config.toml]`, run with `RUST_LOG=info` or more verbose.

use std::{cell::Cell, env, rc::Rc};

use anyhow::Result;
use glide_geometry::Rect;
use glide_input::{ExternalEvent, SwipeConfig, SwipeRecognizer, SwipeSurface};
use log::{error, info, trace};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => SwipeConfig::load(path)?,
        None => SwipeConfig::default(),
    };
    info!("Swipe configuration: {config:?}");

    let page = Rc::new(Cell::new(0i32));
    let recognizer = SwipeRecognizer::new(config)
        .with_on_swipe_left({
            let page = page.clone();
            move || {
                page.set(page.get() - 1);
                info!("Swiped left, page {}", page.get());
            }
        })
        .with_on_swipe_right({
            let page = page.clone();
            move || {
                page.set(page.get() + 1);
                info!("Swiped right, page {}", page.get());
            }
        });

    let mut app = SwipeWindow {
        window: None,
        surface: SwipeSurface::new(recognizer, Rect::ZERO),
    };

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct SwipeWindow {
    window: Option<Window>,
    surface: SwipeSurface,
}

impl ApplicationHandler for SwipeWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes().with_title("Swipe");
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let scale_factor = window.scale_factor();
                let size = window.inner_size().to_logical::<f64>(scale_factor);
                self.surface.set_scale_factor(scale_factor);
                self.surface
                    .set_bounds(Rect::from_size((size.width, size.height)));
                self.window = Some(window);
            }
            Err(e) => {
                error!("Failed to create window: {e:?}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                let size = size.to_logical::<f64>(self.surface.scale_factor());
                self.surface
                    .set_bounds(Rect::from_size((size.width, size.height)));
            }
            event => {
                let disposition = self.surface.handle_event(&ExternalEvent::now(event));
                if disposition.is_consumed() {
                    trace!("Native scrolling suppressed");
                }
            }
        }
    }
}
