use glam::{Mat4, Vec3, Vec4};

use crate::options::CameraOptions;

/// Default yaw in degrees (looking down -Z).
pub const YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const SPEED: f32 = 2.5;
/// Default mouse-look sensitivity (degrees per pixel of cursor travel).
pub const SENSITIVITY: f32 = 0.1;
/// Initial zoom (vertical field of view in degrees).
pub const ZOOM: f32 = 45.0;

/// Pitch is kept strictly inside ±90° so `front` never becomes parallel to
/// `world_up`.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest allowed field of view.
pub const ZOOM_MIN: f32 = 1.0;
/// Widest allowed field of view.
pub const ZOOM_MAX: f32 = 80.0;

/// Direction of a single keyboard-driven camera translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
    /// Along world up.
    Up,
    /// Against world up.
    Down,
}

/// First-person camera driven by Euler angles.
///
/// `front`, `right` and `up` are derived from `yaw`/`pitch` and are only
/// ever written by the orientation update, so they are read-only outside
/// this module.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW, PITCH)
    }
}

impl Camera {
    /// Create a camera at `position` looking along the direction given by
    /// `yaw`/`pitch` (degrees).
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Create a camera from the configured start pose and control speeds.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::new(
            Vec3::from_array(options.position),
            Vec3::from_array(options.world_up),
            options.yaw,
            options.pitch,
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera-space up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// World up reference as supplied at construction (not normalized).
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current vertical field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Mouse-look sensitivity.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// World-to-eye transform for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective projection using `zoom` as the vertical
    /// field of view, with OpenGL's `[-1, 1]` clip-space depth range.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, znear, zfar)
    }

    /// Translate the camera for one held key over `delta_time` seconds.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.world_up.normalize(),
            CameraMovement::Down => -self.world_up.normalize(),
        };
        self.position += offset * velocity;
    }

    /// Apply a mouse-look delta. Positive `y_offset` looks up; screen-space
    /// deltas must be inverted by the caller.
    pub fn process_mouse_movement(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Narrow (positive `y_offset`) or widen the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_camera_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
                .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Right-handed look-at view matrix.
///
/// The basis vectors become the rows of the rotation, which is applied
/// after translating the eye to the origin. Produces the same matrix as
/// [`Mat4::look_at_rh`].
#[must_use]
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z_axis = (eye - target).normalize();
    let x_axis = up.normalize().cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis);

    let rotation = Mat4::from_cols(
        Vec4::new(x_axis.x, y_axis.x, z_axis.x, 0.0),
        Vec4::new(x_axis.y, y_axis.y, z_axis.y, 0.0),
        Vec4::new(x_axis.z, y_axis.z, z_axis.z, 0.0),
        Vec4::W,
    );
    let translation = Mat4::from_translation(-eye);

    rotation * translation
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera matrices and eye position.
pub struct CameraUniform {
    /// World-to-eye matrix.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position (the `viewPos` lighting input).
    pub view_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            fovy: ZOOM,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32, znear: f32, zfar: f32) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection =
            camera.projection_matrix(aspect, znear, zfar).to_cols_array_2d();
        self.view_position = camera.position.to_array();
        self.fovy = camera.zoom;
    }
}
