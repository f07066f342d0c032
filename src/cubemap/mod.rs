//! In-memory cubemap data: pixel buffers and the six-face set.

mod face_set;
mod pixel_buffer;
mod split;

pub use face_set::{CubeFaceSet, CubeFaceSetBuilder};
pub use pixel_buffer::PixelBuffer;
pub use split::split_equirect;
