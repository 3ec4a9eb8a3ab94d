#![deny(unsafe_code)]
//! CPU-side rendering of blobfield frames.
//!
//! Sits between `blobfield-core` (which produces [`DrawCommand`]s) and the CLI.
//! [`pixel`] is always available; PNG export in [`snapshot`] needs the `png`
//! feature.
//!
//! [`DrawCommand`]: blobfield_core::DrawCommand

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::rasterize;

#[cfg(feature = "png")]
pub use snapshot::{write_frame, write_png};

/// Whether this build can write PNG files.
pub const fn png_enabled() -> bool {
    cfg!(feature = "png")
}
