//! Cubemap to equirectangular panorama stitching.
//!
//! Six face images (up, down, left, right, front, back) are resampled into a
//! single equirectangular panorama. Every output pixel is turned into a sphere
//! direction, the cube face it exits through is found, the hit point is mapped
//! to that face image's UV square and the face is sampled there.

pub mod config;
pub mod cubemap;
pub mod error;
pub mod export;
pub mod geometry;
pub mod synth;

pub use config::StitchConfig;
pub use cubemap::{split_equirect, CubeFaceSet, CubeFaceSetBuilder, PixelBuffer};
pub use error::{PanoramaError, Result};
pub use geometry::{AxisFace, Direction, FaceHit, FaceSlot, FaceUv};
pub use synth::{synthesize, synthesize_with, SampleFilter, SynthOptions};
