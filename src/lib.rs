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
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive inspection of rotating multi-beam lidar scans.
//!
//! Lidarview converts raw polar records from a 32-channel spinning sensor
//! into layered Cartesian point clouds and drives an orbit camera around
//! them. Rendering itself is left to the host: the [`viewer::Viewer`] hands
//! out a [`viewer::RenderSnapshot`] per frame.
//!
//! # Key entry points
//!
//! - [`decoder::VelodyneDecoder`] - polar-to-Cartesian frame decoding
//! - [`decoder::FrameIngest`] - background decode thread with a bounded
//!   queue
//! - [`camera::OrbitCamera`] - eye/reference/up navigation
//! - [`input::InputProcessor`] - pointer and key events to
//!   [`viewer::ViewCommand`]s
//! - [`options::Options`] - runtime configuration (camera, display, colors,
//!   decoder constants)
//!
//! # Architecture
//!
//! Frames are submitted to [`decoder::FrameIngest`], which decodes them on
//! its own thread and publishes the newest [`points::Scan`] through a
//! lock-free triple buffer. The UI thread polls for scans, feeds input
//! through the [`input::InputProcessor`], executes the resulting commands
//! on the [`viewer::Viewer`] and renders from its snapshot.

pub mod camera;
pub mod decoder;
pub mod error;
pub mod input;
pub mod options;
pub mod points;
pub mod viewer;

pub use error::LidarError;
