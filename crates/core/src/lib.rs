#![deny(unsafe_code)]
//! Core simulation for the blobfield ambient background.
//!
//! A population of drifting discs is pushed around by pointer proximity and
//! colored by sampling a cyclic gradient over a palette. Provides the
//! `PointField` update, `gradient::sample`, `Palette`, pointer debounce,
//! `Settings`, the `Engine` trait and `BlobScene`, which ties them together.

pub mod canvas;
pub mod color;
pub mod draw;
pub mod engine;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod params;
pub mod point;
pub mod point_field;
pub mod pointer;
pub mod prng;
pub mod scene;
pub mod settings;

pub use canvas::Canvas;
pub use color::Rgb;
pub use draw::DrawCommand;
pub use engine::Engine;
pub use error::EngineError;
pub use palette::Palette;
pub use point::Point;
pub use point_field::PointField;
pub use pointer::PointerTracker;
pub use prng::Xorshift64;
pub use scene::BlobScene;
pub use settings::Settings;
