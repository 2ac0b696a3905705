//! Free-fly camera controller.
//!
//! Integrates one frame of [`CameraIntent`] into the camera: movement
//! scaled by speed and frame time, look deltas turned into pitch/yaw
//! degrees. The controller is the single writer of the camera during the
//! update phase; the render phase only reads matrices.

use glam::Vec3;

use crate::camera::core::Camera;
use crate::camera::input::CameraIntent;
use crate::options::CameraOptions;

/// Pitch is kept this many degrees away from straight up/down so the
/// derived basis never collapses at the poles.
const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Free-fly controller owning the camera it drives.
pub struct FlyController {
    /// The camera being driven.
    pub camera: Camera,
    move_speed: f32,
    rotate_speed: f32,
}

impl FlyController {
    /// Create a controller around the given camera, with speeds and
    /// projection parameters taken from `options`.
    #[must_use]
    pub fn new(camera: Camera, options: &CameraOptions) -> Self {
        let mut controller = Self {
            camera,
            move_speed: options.move_speed,
            rotate_speed: options.rotate_speed,
        };
        controller.apply_options(options);
        controller
    }

    /// Apply one frame of input intent.
    ///
    /// Movement axes are scaled by `move_speed * dt`; look deltas (pixels)
    /// by `rotate_speed` into degrees. Pitch is clamped to ±89 degrees. An
    /// idle intent leaves the camera untouched, so the view cache stays
    /// clean across idle frames.
    pub fn update(&mut self, intent: &CameraIntent, dt: f32) {
        let movement = intent.move_axes * self.move_speed * dt;

        // Mouse right looks right (negative yaw toward -Y), mouse down
        // looks down (positive pitch).
        let yaw = -intent.look.x * self.rotate_speed;
        let pitch = intent.look.y * self.rotate_speed;
        let current = self.camera.rotation().y;
        let clamped_pitch = (current + pitch)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES)
            - current;

        self.camera.add_movement_and_rotation(
            movement,
            Vec3::new(0.0, clamped_pitch, yaw),
        );
    }

    /// Window-resize notification pass-through.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport_size(width as f32, height as f32);
        log::debug!("camera viewport resized to {width}x{height}");
    }

    /// Re-apply tunables. The camera's setters short-circuit unchanged
    /// values, so calling this every time an options panel commits is
    /// free when nothing moved.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.set_field_of_view(options.fovy.to_radians());
        self.camera.set_near_plane(options.znear);
        self.camera.set_far_plane(options.zfar);
        self.camera.set_ortho_half_height(options.ortho_half_height);
        self.move_speed = options.move_speed;
        self.rotate_speed = options.rotate_speed;
        log::debug!(
            "camera options applied: fovy {}°, clip {}..{}",
            options.fovy,
            options.znear,
            options.zfar
        );
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Rotation speed in degrees per pixel of look delta.
    #[must_use]
    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }
}
