//! Error type shared by the library.

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::FaceSlot;

/// Errors that can occur while assembling, stitching or exporting panoramas.
#[derive(Error, Debug)]
pub enum PanoramaError {
    #[error("Face '{0}' is missing - all six faces are required")]
    IncompleteInput(FaceSlot),
    #[error("Invalid pixel buffer: {width}x{height} with {len} bytes (expected width*height*4, non-zero dimensions)")]
    InvalidBuffer { width: u32, height: u32, len: usize },
    #[error("Degenerate projection at output pixel ({x}, {y})")]
    DegenerateGeometry { x: u32, y: u32 },
    #[error("No image found for face '{0}' in {1}")]
    MissingFaceFile(FaceSlot, PathBuf),
    #[error("Invalid JPEG quality {0} (expected 1-100)")]
    InvalidQuality(u8),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanoramaError>;
