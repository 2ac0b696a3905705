//! Backend-agnostic camera input accumulation.
//!
//! The windowing layer reports key edges and cursor deltas as they arrive;
//! once per frame the update loop drains the accumulated state into a
//! [`CameraIntent`] and hands it to the controller. Held keys persist
//! across frames, look deltas do not.

use glam::{Vec2, Vec3};

/// One frame of camera input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraIntent {
    /// Movement request in the camera's local basis, `(forward, right,
    /// up)`, each component in -1..1.
    pub move_axes: Vec3,
    /// Accumulated cursor delta in pixels since the last frame.
    pub look: Vec2,
}

/// Held movement directions plus the look delta accumulated since the
/// last [`InputState::drain`] call.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    forward: bool,
    back: bool,
    right: bool,
    left: bool,
    up: bool,
    down: bool,
    look: Vec2,
}

impl InputState {
    /// Empty input state: nothing held, no pending look delta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward key edge.
    pub fn set_forward(&mut self, held: bool) {
        self.forward = held;
    }

    /// Backward key edge.
    pub fn set_back(&mut self, held: bool) {
        self.back = held;
    }

    /// Strafe-right key edge.
    pub fn set_right(&mut self, held: bool) {
        self.right = held;
    }

    /// Strafe-left key edge.
    pub fn set_left(&mut self, held: bool) {
        self.left = held;
    }

    /// Ascend key edge.
    pub fn set_up(&mut self, held: bool) {
        self.up = held;
    }

    /// Descend key edge.
    pub fn set_down(&mut self, held: bool) {
        self.down = held;
    }

    /// Accumulate a cursor movement in pixels.
    pub fn add_look(&mut self, delta: Vec2) {
        self.look += delta;
    }

    /// Snapshot the held axes and take the pending look delta.
    ///
    /// Key state survives the drain (a held key keeps moving the camera
    /// next frame); the look delta resets so a still mouse stops rotation.
    pub fn drain(&mut self) -> CameraIntent {
        let mut move_axes = Vec3::ZERO;
        if self.forward {
            move_axes.x += 1.0;
        }
        if self.back {
            move_axes.x -= 1.0;
        }
        if self.right {
            move_axes.y += 1.0;
        }
        if self.left {
            move_axes.y -= 1.0;
        }
        if self.up {
            move_axes.z += 1.0;
        }
        if self.down {
            move_axes.z -= 1.0;
        }

        let look = self.look;
        self.look = Vec2::ZERO;
        CameraIntent { move_axes, look }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let mut input = InputState::new();
        input.set_forward(true);
        input.set_back(true);
        input.set_right(true);
        assert_eq!(
            input.drain().move_axes,
            Vec3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn held_keys_survive_drain_but_look_resets() {
        let mut input = InputState::new();
        input.set_forward(true);
        input.add_look(Vec2::new(3.0, -2.0));
        input.add_look(Vec2::new(1.0, 0.0));

        let first = input.drain();
        assert_eq!(first.move_axes, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(first.look, Vec2::new(4.0, -2.0));

        let second = input.drain();
        assert_eq!(second.move_axes, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(second.look, Vec2::ZERO);
    }

    #[test]
    fn release_clears_the_axis() {
        let mut input = InputState::new();
        input.set_up(true);
        let _ = input.drain();
        input.set_up(false);
        assert_eq!(input.drain(), CameraIntent::default());
    }
}
