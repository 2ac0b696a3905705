//! Camera system for 3D scene viewing.
//!
//! Provides a free-fly camera with Euler-angle orientation, lazily
//! recomputed view/projection matrices, frustum extraction, and input
//! handling.

/// Free-fly controller integrating per-frame input intent.
pub mod controller;
/// Core camera struct, projection modes, and the dirty-flag state machine.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;
/// Backend-agnostic input intent accumulation.
pub mod input;
/// GPU-facing uniform block types.
pub mod uniform;
