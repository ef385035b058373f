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
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test code may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! First-person camera and transparency ordering core for small real-time
//! 3D scenes.
//!
//! Vantage owns the parts of a tutorial-style render loop that carry actual
//! math: an Euler-angle fly camera with a from-scratch look-at view matrix,
//! and the per-frame back-to-front ordering of alpha-blended billboards.
//! Everything around them (window, input translation, frame clock, options)
//! is provided in the same idiom so a host only has to issue draw calls.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position, yaw/pitch basis, view and projection
//! - [`scene::order_back_to_front`] - painter's-algorithm draw order
//! - [`engine::SceneEngine`] - owns camera, input and scene per frame
//! - [`options::Options`] - TOML-backed configuration presets
//!
//! # Frame flow
//!
//! Raw window events become [`InputEvent`]s, the [`InputProcessor`] turns
//! them into [`engine::SceneCommand`]s, held keys are polled in
//! [`engine::SceneEngine::update`], and
//! [`engine::SceneEngine::prepare_frame`] returns a [`engine::FrameData`]
//! with matrices and the sorted transparent set: opaque geometry first,
//! billboards farthest-first last.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::VantageError;
pub use input::{InputEvent, InputProcessor, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
