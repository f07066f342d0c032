//! Cube geometry module.
//!
//! Converts equirectangular pixel positions to sphere directions, picks the
//! cube face a direction exits through, and maps points on that face to the
//! face image's UV square (and back).

mod direction;
mod face;
mod face_uv;
mod project;

pub use direction::{dominant_face, Direction, FaceHit};
pub use face::{AxisFace, FaceSlot};
pub use face_uv::{face_uv_to_point, point_to_face_uv, FaceUv};
pub use project::{project_onto_face, HALF_EDGE};
