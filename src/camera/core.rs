//! Core camera state and lazy matrix derivation.
//!
//! The camera stores position, Euler rotation, and projection parameters,
//! and caches the view and projection matrices derived from them. Each
//! cached matrix carries a `RecomputeState`; mutators flip it to `Dirty`
//! only when a value actually changed, and accessors rebuild the matrix
//! only when it is `Dirty`. A frame that mutates nothing reads back the
//! exact same bits it read last frame, at getter cost.

use glam::{Mat3, Mat4, Vec3};

use crate::camera::frustum::Frustum;

/// World-space forward axis. The world triple is right-handed:
/// `right x direction = up` holds for the derived camera basis.
pub const WORLD_FORWARD: Vec3 = Vec3::X;
/// World-space right axis.
pub const WORLD_RIGHT: Vec3 = Vec3::NEG_Y;
/// World-space up axis (Z-up convention).
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Aspect ratio substituted when the viewport height is zero, so a
/// minimized render target never divides by zero.
const FALLBACK_ASPECT: f32 = 800.0 / 600.0;

const DEFAULT_VIEWPORT: (f32, f32) = (800.0, 600.0);
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 100.0;
const DEFAULT_FOV_DEGREES: f32 = 80.0;
const DEFAULT_ORTHO_HALF_HEIGHT: f32 = 10.0;

/// Which projection formula the camera derives its projection matrix from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Symmetric-frustum perspective projection from the vertical field of
    /// view and the viewport aspect ratio.
    Perspective,
    /// Symmetric box projection from the orthographic half-height and the
    /// viewport aspect ratio.
    Orthographic,
}

/// Clip-space depth convention of the target graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthRange {
    /// Depth mapped to `[0, 1]` (wgpu / Vulkan / D3D convention).
    ZeroToOne,
    /// Depth mapped to `[-1, 1]` (OpenGL convention).
    NegativeOneToOne,
}

/// Freshness of a cached derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecomputeState {
    /// Cache matches the current inputs.
    Clean,
    /// An input changed since the cache was built.
    Dirty,
}

/// Scene camera with lazily recomputed view and projection matrices.
///
/// Rotation is a vector of Euler angles in degrees, `(roll, pitch, yaw)`
/// about local X, Y, Z, composed `Rz * Ry * Rx` (roll innermost). The
/// matrix accessors take `&mut self` because a read may rebuild the cache;
/// semantically they are pure queries.
///
/// `near < far` and `field_of_view > 0` are not validated. The camera
/// builds the matrix the given parameters describe, degenerate or not.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    projection_mode: ProjectionMode,
    near_clip: f32,
    far_clip: f32,
    viewport_width: f32,
    viewport_height: f32,
    field_of_view: f32,
    ortho_half_height: f32,
    depth_range: DepthRange,

    // Derived state, valid while the matching RecomputeState is Clean.
    // The basis vectors refresh only as part of a view recompute.
    direction: Vec3,
    right: Vec3,
    up: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_state: RecomputeState,
    projection_state: RecomputeState,

    #[cfg(test)]
    view_recomputes: u32,
    #[cfg(test)]
    projection_recomputes: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, ProjectionMode::Perspective)
    }
}

impl Camera {
    /// Create a camera and immediately compute both matrices, so there is
    /// no stale state at birth. Clip planes, viewport, and field of view
    /// start at the crate defaults (0.1..100, 800x600, 80 degrees).
    #[must_use]
    pub fn new(
        position: Vec3,
        rotation: Vec3,
        projection_mode: ProjectionMode,
    ) -> Self {
        let mut camera = Self {
            position,
            rotation,
            projection_mode,
            near_clip: DEFAULT_NEAR,
            far_clip: DEFAULT_FAR,
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
            field_of_view: DEFAULT_FOV_DEGREES.to_radians(),
            ortho_half_height: DEFAULT_ORTHO_HALF_HEIGHT,
            depth_range: DepthRange::ZeroToOne,
            direction: WORLD_FORWARD,
            right: WORLD_RIGHT,
            up: WORLD_UP,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_state: RecomputeState::Dirty,
            projection_state: RecomputeState::Dirty,
            #[cfg(test)]
            view_recomputes: 0,
            #[cfg(test)]
            projection_recomputes: 0,
        };
        camera.recompute_view();
        camera.recompute_projection();
        camera
    }

    // -- Mutators ---------------------------------------------------------
    //
    // Every setter marks the relevant matrix dirty only when the stored
    // value actually changes. Writing back an unchanged value must not
    // trigger a recompute on the next read.

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        if position != self.position {
            self.position = position;
            self.view_state = RecomputeState::Dirty;
        }
    }

    /// Set the Euler rotation in degrees, `(roll, pitch, yaw)`.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        if rotation != self.rotation {
            self.rotation = rotation;
            self.view_state = RecomputeState::Dirty;
        }
    }

    /// Replace position and rotation in one call, invalidating the view
    /// cache at most once.
    pub fn set_position_and_rotation(
        &mut self,
        position: Vec3,
        rotation: Vec3,
    ) {
        if position != self.position || rotation != self.rotation {
            self.position = position;
            self.rotation = rotation;
            self.view_state = RecomputeState::Dirty;
        }
    }

    /// Switch between perspective and orthographic projection.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        if mode != self.projection_mode {
            self.projection_mode = mode;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Set the near clip plane distance. Not validated against `far`.
    pub fn set_near_plane(&mut self, near: f32) {
        if near != self.near_clip {
            self.near_clip = near;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Set the far clip plane distance. Not validated against `near`.
    pub fn set_far_plane(&mut self, far: f32) {
        if far != self.far_clip {
            self.far_clip = far;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Set the vertical field of view in radians (perspective mode only).
    pub fn set_field_of_view(&mut self, fov: f32) {
        if fov != self.field_of_view {
            self.field_of_view = fov;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Set the render-target size in pixels. A zero height is tolerated;
    /// the aspect ratio falls back to the 800x600 default.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if width != self.viewport_width || height != self.viewport_height {
            self.viewport_width = width;
            self.viewport_height = height;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Set the orthographic vertical half-extent in world units. The
    /// horizontal half-extent is this value times the aspect ratio.
    pub fn set_ortho_half_height(&mut self, half_height: f32) {
        if half_height != self.ortho_half_height {
            self.ortho_half_height = half_height;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Select the clip-space depth convention of the rendering backend.
    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        if depth_range != self.depth_range {
            self.depth_range = depth_range;
            self.projection_state = RecomputeState::Dirty;
        }
    }

    /// Move along the camera's cached forward direction.
    ///
    /// The basis refreshes only during view recomputation, so a movement
    /// issued after a rotation but before the next matrix read uses the
    /// previous frame's direction. That one-frame lag is the contract.
    pub fn move_forward(&mut self, delta: f32) {
        if delta != 0.0 {
            self.position += self.direction * delta;
            self.view_state = RecomputeState::Dirty;
        }
    }

    /// Move along the camera's cached right direction.
    pub fn move_right(&mut self, delta: f32) {
        if delta != 0.0 {
            self.position += self.right * delta;
            self.view_state = RecomputeState::Dirty;
        }
    }

    /// Move along the fixed world up axis (not the camera's local up).
    pub fn move_world_up(&mut self, delta: f32) {
        if delta != 0.0 {
            self.position += WORLD_UP * delta;
            self.view_state = RecomputeState::Dirty;
        }
    }

    /// Apply one frame of movement and rotation together.
    ///
    /// `move_delta` is `(forward, right, up)` in the camera's cached local
    /// basis; `rot_delta` is added to the Euler rotation in degrees. Both
    /// deltas zero is a no-op that leaves the view cache clean.
    pub fn add_movement_and_rotation(
        &mut self,
        move_delta: Vec3,
        rot_delta: Vec3,
    ) {
        if move_delta == Vec3::ZERO && rot_delta == Vec3::ZERO {
            return;
        }
        self.position += self.direction * move_delta.x
            + self.right * move_delta.y
            + self.up * move_delta.z;
        self.rotation += rot_delta;
        self.view_state = RecomputeState::Dirty;
    }

    // -- Accessors --------------------------------------------------------

    /// View matrix, rebuilt first if a view input changed since last read.
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.view_state == RecomputeState::Dirty {
            self.recompute_view();
        }
        self.view_matrix
    }

    /// Projection matrix, rebuilt first if a projection input changed
    /// since last read.
    pub fn projection_matrix(&mut self) -> Mat4 {
        if self.projection_state == RecomputeState::Dirty {
            self.recompute_projection();
        }
        self.projection_matrix
    }

    /// Combined `projection * view` matrix (column vectors, so this maps
    /// world space through view space into clip space).
    pub fn view_projection_matrix(&mut self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// View frustum extracted from the current view-projection matrix.
    pub fn frustum(&mut self) -> Frustum {
        let depth_range = self.depth_range;
        Frustum::from_view_projection(
            self.view_projection_matrix(),
            depth_range,
        )
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler rotation in degrees, `(roll, pitch, yaw)`.
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Current projection mode.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Near clip plane distance.
    #[must_use]
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clip plane distance.
    #[must_use]
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Viewport size in pixels, `(width, height)`.
    #[must_use]
    pub fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Orthographic vertical half-extent in world units.
    #[must_use]
    pub fn ortho_half_height(&self) -> f32 {
        self.ortho_half_height
    }

    /// Clip-space depth convention in use.
    #[must_use]
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Cached forward direction (unit length as of the last view
    /// recomputation).
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Cached right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Cached up direction (`right x direction`).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Viewport aspect ratio, with the zero-height fallback applied.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.viewport_height == 0.0 {
            FALLBACK_ASPECT
        } else {
            self.viewport_width / self.viewport_height
        }
    }

    // -- Recomputation ----------------------------------------------------

    fn recompute_view(&mut self) {
        let roll = self.rotation.x.to_radians();
        let pitch = self.rotation.y.to_radians();
        let yaw = self.rotation.z.to_radians();

        // Yaw outermost, roll innermost.
        let rotation = Mat3::from_rotation_z(yaw)
            * Mat3::from_rotation_y(pitch)
            * Mat3::from_rotation_x(roll);

        self.direction = (rotation * WORLD_FORWARD).normalize();
        self.right = (rotation * WORLD_RIGHT).normalize();
        self.up = self.right.cross(self.direction);

        self.view_matrix = Mat4::look_at_rh(
            self.position,
            self.position + self.direction,
            self.up,
        );
        self.view_state = RecomputeState::Clean;
        #[cfg(test)]
        {
            self.view_recomputes += 1;
        }
    }

    fn recompute_projection(&mut self) {
        let aspect = self.aspect();
        self.projection_matrix = match self.projection_mode {
            ProjectionMode::Perspective => match self.depth_range {
                DepthRange::ZeroToOne => Mat4::perspective_rh(
                    self.field_of_view,
                    aspect,
                    self.near_clip,
                    self.far_clip,
                ),
                DepthRange::NegativeOneToOne => Mat4::perspective_rh_gl(
                    self.field_of_view,
                    aspect,
                    self.near_clip,
                    self.far_clip,
                ),
            },
            ProjectionMode::Orthographic => {
                let half_h = self.ortho_half_height;
                let half_w = half_h * aspect;
                match self.depth_range {
                    DepthRange::ZeroToOne => Mat4::orthographic_rh(
                        -half_w,
                        half_w,
                        -half_h,
                        half_h,
                        self.near_clip,
                        self.far_clip,
                    ),
                    DepthRange::NegativeOneToOne => Mat4::orthographic_rh_gl(
                        -half_w,
                        half_w,
                        -half_h,
                        half_h,
                        self.near_clip,
                        self.far_clip,
                    ),
                }
            }
        };
        self.projection_state = RecomputeState::Clean;
        #[cfg(test)]
        {
            self.projection_recomputes += 1;
        }
    }

    #[cfg(test)]
    fn view_recompute_count(&self) -> u32 {
        self.view_recomputes
    }

    #[cfg(test)]
    fn projection_recompute_count(&self) -> u32 {
        self.projection_recomputes
    }
}
