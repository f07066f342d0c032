//! File collaborators: decoding face images and encoding panoramas.
//!
//! Supports PNG and JPEG through the `image` crate. JPEG output defaults to
//! quality 92.

mod decode;
mod encode;

pub use decode::{find_face_files, load_face, load_face_set};
pub use encode::{export_faces, export_panorama, EncodeOptions, OutputFormat, DEFAULT_JPEG_QUALITY};
