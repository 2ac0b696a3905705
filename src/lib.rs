// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scene camera system for 3D rendering engines.
//!
//! Sightline owns the camera state a render loop needs each frame: world
//! position, Euler orientation, and projection parameters. From those it
//! derives a view matrix and a projection matrix lazily, recomputing only
//! when a mutator actually changed the inputs since the last read.
//!
//! # Key entry points
//!
//! - [`camera::core::Camera`] - position/orientation/projection state and
//!   the cached matrices
//! - [`camera::controller::FlyController`] - free-fly movement driven by
//!   per-frame input intent
//! - [`camera::uniform::CameraUniform`] - POD block a rendering backend
//!   uploads verbatim
//! - [`options::CameraOptions`] - TOML-backed tunables for the camera and
//!   its controls
//!
//! # Architecture
//!
//! The crate is single-threaded by design: input-driven mutators run during
//! the update phase, matrix accessors run during the render phase of the
//! same frame. Windowing, GPU resources, and UI are collaborators on the
//! other side of two narrow boundaries - [`camera::input::CameraIntent`]
//! coming in, [`camera::uniform::CameraUniform`] going out.

pub mod camera;
pub mod error;
pub mod options;
