//! Per-frame orchestration of camera, input and scene.
//!
//! [`SceneEngine`] is the single owner of all mutable scene state. The host
//! loop feeds it raw input, calls [`update`](SceneEngine::update) once per
//! frame with the elapsed time, then asks for a [`FrameData`] to draw.

/// Discrete scene commands produced by the input processor.
pub mod command;
/// Renderer-facing per-frame output.
pub mod frame;

use glam::{Mat4, Quat, Vec3};

pub use command::SceneCommand;
pub use frame::FrameData;

use crate::camera::{Camera, CameraUniform};
use crate::input::{InputEvent, InputProcessor, KeyAction};
use crate::options::Options;
use crate::scene::{LightUniform, MaterialUniform, Scene, LAMP_SCALE, OBJECT_POSITION};

/// Owns the camera, input state and scene for the lifetime of the loop.
pub struct SceneEngine {
    camera: Camera,
    input: InputProcessor,
    scene: Scene,
    options: Options,
    /// Seconds of simulated time, drives the light orbit.
    elapsed: f32,
    mix_value: f32,
    should_close: bool,
}

impl SceneEngine {
    /// Build the engine from options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera = Camera::from_options(&options.camera);
        let input = InputProcessor::with_key_bindings(options.keybindings.clone());
        let scene = Scene::from_options(&options);
        log::info!(
            "scene engine ready: camera at {}, {} billboards",
            camera.position,
            scene.billboards.len()
        );
        Self {
            camera,
            input,
            scene,
            mix_value: options.display.mix_value.clamp(0.0, 1.0),
            options,
            elapsed: 0.0,
            should_close: false,
        }
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for programmatic control.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// The scene layout.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current texture mix factor in `[0, 1]`.
    #[must_use]
    pub fn mix_value(&self) -> f32 {
        self.mix_value
    }

    /// Seconds accumulated through [`update`](Self::update).
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether a quit was requested.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Feed one raw input event. Commands are executed immediately and
    /// returned so the host can react (cursor grab, exit).
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SceneCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    /// Apply a discrete command.
    pub fn execute(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Look { x_offset, y_offset } => {
                self.camera.process_mouse_movement(x_offset, y_offset, true);
            }
            SceneCommand::Zoom { delta } => self.camera.process_mouse_scroll(delta),
            SceneCommand::SetMouseLook { enabled } => {
                log::debug!("mouse look {}", if enabled { "on" } else { "off" });
            }
            SceneCommand::Quit => {
                log::info!("quit requested");
                self.should_close = true;
            }
        }
    }

    /// Release all held keys (window focus lost).
    pub fn release_input(&mut self) {
        self.input.release_all();
    }

    /// Advance one frame: apply held movement keys over `delta_time`
    /// seconds, step the mix factor, and advance the light orbit clock.
    pub fn update(&mut self, delta_time: f32) {
        self.elapsed += delta_time;

        for movement in self.input.held_movements() {
            self.camera.process_keyboard(movement, delta_time);
        }

        let step = self.options.display.mix_step;
        if self.input.is_held(KeyAction::IncreaseMix) {
            self.mix_value = (self.mix_value + step).min(1.0);
        }
        if self.input.is_held(KeyAction::DecreaseMix) {
            self.mix_value = (self.mix_value - step).max(0.0);
        }
    }

    /// Light position for the current frame.
    #[must_use]
    pub fn light_position(&self) -> Vec3 {
        self.scene.light.position_at(self.elapsed)
    }

    /// Assemble everything the renderer needs for a `width` x `height`
    /// viewport.
    #[must_use]
    pub fn prepare_frame(&self, width: u32, height: u32) -> FrameData {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let camera_options = &self.options.camera;

        let mut camera = CameraUniform::new();
        camera.update(&self.camera, aspect, camera_options.znear, camera_options.zfar);

        let light_position = self.light_position();
        let transparent_order = self.scene.billboards.ordered(self.camera.position);
        log::trace!(
            "frame: eye {} fov {:.1}, {} transparent",
            self.camera.position,
            self.camera.zoom(),
            transparent_order.len()
        );

        FrameData {
            camera,
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(
                aspect,
                camera_options.znear,
                camera_options.zfar,
            ),
            view_position: self.camera.position,
            transparent_order,
            light: LightUniform::new(light_position, &self.options.lighting),
            material: MaterialUniform::new(&self.options.lighting),
            object_model: Mat4::from_translation(OBJECT_POSITION),
            lamp_model: Mat4::from_scale_rotation_translation(
                Vec3::splat(LAMP_SCALE),
                Quat::IDENTITY,
                light_position,
            ),
            clear_color: self.options.display.clear_color,
            mix_value: self.mix_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.to_owned(),
            pressed,
        }
    }

    #[test]
    fn held_forward_moves_camera_each_frame() {
        let mut engine = SceneEngine::new(Options::default());
        let _ = engine.handle_input(key("KeyW", true));
        engine.update(0.5);
        engine.update(0.5);
        assert!(engine
            .camera()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));

        let _ = engine.handle_input(key("KeyW", false));
        engine.update(1.0);
        assert!(engine
            .camera()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut engine = SceneEngine::new(Options::default());
        let _ = engine.handle_input(key("KeyA", true));
        let _ = engine.handle_input(key("KeyD", true));
        engine.update(0.25);
        assert!(engine
            .camera()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-5));
    }

    #[test]
    fn mouse_look_rotates_only_when_enabled() {
        let mut engine = SceneEngine::new(Options::default());
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 500.0, y: 300.0 });
        assert_eq!(engine.camera().yaw(), -90.0);

        let toggled = engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(toggled, Some(SceneCommand::SetMouseLook { enabled: true }));

        let _ = engine.handle_input(InputEvent::CursorMoved { x: 500.0, y: 300.0 });
        let _ = engine.handle_input(InputEvent::CursorMoved { x: 600.0, y: 200.0 });
        assert!((engine.camera().yaw() - (-80.0)).abs() < 1e-4);
        assert!((engine.camera().pitch() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn locked_cursor_motion_rotates_camera() {
        let mut engine = SceneEngine::new(Options::default());
        let _ = engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        // Mouse moved right and up with no absolute cursor updates.
        let _ = engine.handle_input(InputEvent::MouseMotion {
            dx: 100.0,
            dy: -100.0,
        });
        assert!((engine.camera().yaw() - (-80.0)).abs() < 1e-4);
        assert!((engine.camera().pitch() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_zooms_and_escape_closes() {
        let mut engine = SceneEngine::new(Options::default());
        let _ = engine.handle_input(InputEvent::Scroll { delta: 5.0 });
        assert_eq!(engine.camera().zoom(), 40.0);

        assert!(!engine.should_close());
        assert_eq!(
            engine.handle_input(key("Escape", true)),
            Some(SceneCommand::Quit)
        );
        assert!(engine.should_close());
    }

    #[test]
    fn mix_value_steps_per_frame_and_clamps() {
        let mut engine = SceneEngine::new(Options::default());
        let _ = engine.handle_input(key("ArrowUp", true));
        for _ in 0..10 {
            engine.update(0.016);
        }
        assert!((engine.mix_value() - 0.1).abs() < 1e-5);
        for _ in 0..200 {
            engine.update(0.016);
        }
        assert_eq!(engine.mix_value(), 1.0);

        let _ = engine.handle_input(key("ArrowUp", false));
        let _ = engine.handle_input(key("ArrowDown", true));
        for _ in 0..200 {
            engine.update(0.016);
        }
        assert_eq!(engine.mix_value(), 0.0);
    }

    #[test]
    fn frame_sorts_billboards_from_camera() {
        let engine = SceneEngine::new(Options::default());
        let frame = engine.prepare_frame(800, 600);
        assert_eq!(frame.transparent_order[0], Vec3::new(-0.3, 0.0, -2.3));
        assert_eq!(frame.transparent_order[4], Vec3::new(0.0, 0.0, 0.7));
        assert_eq!(frame.view_position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(frame.camera.view, frame.view.to_cols_array_2d());

        let expected = Mat4::perspective_rh_gl(45f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        assert!(frame.projection.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn frame_places_lamp_on_light_orbit() {
        let mut engine = SceneEngine::new(Options::default());
        engine.update(0.0);
        let frame = engine.prepare_frame(800, 600);
        assert_eq!(frame.light.position, [3.0, 0.0, 2.0]);
        assert!(frame
            .lamp_model
            .transform_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(3.0, 0.0, 2.0), 1e-6));
        assert!(frame
            .object_model
            .transform_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(0.0, -1.0, 0.0), 1e-6));
    }

    #[test]
    fn zero_sized_viewport_does_not_divide_by_zero() {
        let engine = SceneEngine::new(Options::default());
        let frame = engine.prepare_frame(0, 0);
        assert!(frame.projection.is_finite());
    }
}
