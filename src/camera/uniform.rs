//! GPU-facing camera uniform block.
//!
//! The only contract a rendering backend needs from this crate: a
//! `#[repr(C)]` plain-old-data struct it can copy verbatim into a uniform
//! buffer. No GPU types appear here; uploading is the backend's job.

use glam::Mat4;

use crate::camera::core::{Camera, WORLD_FORWARD};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform buffer contents holding the camera matrices and metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix on its own (world to camera space).
    pub view: [[f32; 4]; 4],
    /// Projection matrix on its own (camera to clip space).
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub direction: [f32; 3],
    /// Vertical field of view in radians.
    pub fov: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 800.0 / 600.0,
            direction: WORLD_FORWARD.to_array(),
            fov: 80.0_f32.to_radians(),
        }
    }

    /// Refresh every field from the camera's current state.
    ///
    /// Takes `&mut Camera` because the matrix getters rebuild their caches
    /// when dirty; the basis read below is fresh once they have run.
    pub fn update(&mut self, camera: &mut Camera) {
        self.view_proj = camera.view_projection_matrix().to_cols_array_2d();
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = camera.projection_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.aspect = camera.aspect();
        self.direction = camera.direction().to_array();
        self.fov = camera.field_of_view();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::ProjectionMode;

    #[test]
    fn layout_is_tightly_packed_and_aligned() {
        // 3 matrices + 2 vec3/f32 pairs, 16-byte aligned with no implicit
        // padding. A backend binds this size exactly.
        assert_eq!(size_of::<CameraUniform>(), 224);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn update_mirrors_camera_state() {
        let mut camera = Camera::new(
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::ZERO,
            ProjectionMode::Perspective,
        );
        // Rotation after construction leaves the view cache dirty; the
        // uniform update must see the refreshed basis.
        camera.set_rotation(Vec3::new(0.0, 0.0, 90.0));
        let mut uniform = CameraUniform::new();
        uniform.update(&mut camera);

        assert_eq!(uniform.position, [1.0, -2.0, 3.0]);
        assert_eq!(
            uniform.view_proj,
            camera.view_projection_matrix().to_cols_array_2d()
        );
        // Yaw 90 turns the forward axis onto +Y.
        assert!((uniform.direction[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_bytes_are_stable_without_mutation() {
        let mut camera = Camera::default();
        let mut uniform = CameraUniform::new();
        uniform.update(&mut camera);
        let bytes: Vec<u8> = bytemuck::bytes_of(&uniform).to_vec();

        uniform.update(&mut camera);
        assert_eq!(bytemuck::bytes_of(&uniform), bytes.as_slice());
    }
}
