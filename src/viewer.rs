//! Standalone window backed by winit that drives a [`SceneEngine`].
//!
//! The viewer owns the event loop: it translates winit events into
//! [`InputEvent`]s, grabs the cursor while mouse-look is on and steers from
//! raw device motion, ticks the frame clock and prepares a
//! [`FrameData`](crate::engine::FrameData) every redraw.
//! Drawing that frame is left to the renderer plugged in by the host.
//!
//! ```no_run
//! # use vantage::Viewer;
//! Viewer::builder()
//!     .with_title("Blending")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    engine::{SceneCommand, SceneEngine},
    error::VantageError,
    options::Options,
    util::FrameTiming,
    InputEvent, MouseButton,
};

/// How often the title bar frame statistics refresh.
const STATS_INTERVAL: Duration = Duration::from_millis(500);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and the options' title.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.display.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the scene loop.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), VantageError> {
        let event_loop =
            EventLoop::new().map_err(|e| VantageError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let timing = FrameTiming::new(self.options.display.target_fps);
        let mut app = ViewerApp {
            window: None,
            engine: SceneEngine::new(self.options),
            timing,
            last_stats: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VantageError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: SceneEngine,
    timing: FrameTiming,
    last_stats: Instant,
}

impl ViewerApp {
    fn set_cursor_captured(&self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if captured {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("cursor grab unavailable: {e}");
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("cursor release failed: {e}");
        }
        window.set_cursor_visible(!captured);
    }

    /// Forward an input event and react to commands that touch the window.
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        match self.engine.handle_input(event) {
            Some(SceneCommand::SetMouseLook { enabled }) => {
                self.set_cursor_captured(enabled);
            }
            Some(SceneCommand::Quit) => event_loop.exit(),
            _ => {}
        }
    }

    fn redraw(&mut self, window: &Window) {
        if !self.timing.should_render() {
            window.request_redraw();
            return;
        }

        let dt = self.timing.tick();
        self.engine.update(dt);

        let size = window.inner_size();
        let frame = self.engine.prepare_frame(size.width, size.height);
        log::trace!(
            "prepared frame with {} transparent billboards",
            frame.transparent_order.len()
        );

        let now = Instant::now();
        if now.duration_since(self.last_stats) >= STATS_INTERVAL {
            window.set_title(&format!(
                "{} | {:.3} ms/frame ({:.1} FPS)",
                self.engine.options().display.title,
                self.timing.frame_time_ms(),
                self.timing.fps()
            ));
            self.last_stats = now;
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let display = &self.engine.options().display;
        let attrs = Window::default_attributes()
            .with_title(&display.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                display.width,
                display.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        log::info!("window created: {:?}", window.inner_size());
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Focused(false) => self.engine.release_input(),

            WindowEvent::RedrawRequested => {
                if let Some(window) = self.window.clone() {
                    self.redraw(&window);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed: state == ElementState::Pressed,
                    },
                );
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.dispatch(event_loop, InputEvent::Scroll { delta });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.dispatch(
                        event_loop,
                        InputEvent::Key {
                            key: format!("{code:?}"),
                            pressed: event.state == ElementState::Pressed,
                        },
                    );
                }
            }

            _ => {}
        }
    }

    // Look comes from raw device motion: absolute cursor positions stop
    // updating once the cursor is locked.
    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.dispatch(
                event_loop,
                InputEvent::MouseMotion {
                    dx: dx as f32,
                    dy: dy as f32,
                },
            );
        }
    }
}
