//! Cubemap faces cut from an equirectangular panorama.
//!
//! This is the inverse of stitching: every face texel is turned back into a
//! sphere direction and looked up (nearest neighbour) in the panorama.

use rayon::prelude::*;

use crate::error::{PanoramaError, Result};
use crate::geometry::{face_uv_to_point, Direction, FaceSlot, FaceUv};

use super::{CubeFaceSet, PixelBuffer};

/// Builds six `face_size` x `face_size` faces from `panorama`.
pub fn split_equirect(panorama: &PixelBuffer, face_size: u32) -> Result<CubeFaceSet> {
    if face_size == 0 {
        return Err(PanoramaError::Config("face size must be positive".into()));
    }

    let faces = FaceSlot::all().map(|slot| render_face(panorama, slot, face_size));
    let [up, down, left, right, front, back] = faces;
    Ok(CubeFaceSet::new(up?, down?, left?, right?, front?, back?))
}

fn render_face(panorama: &PixelBuffer, slot: FaceSlot, size: u32) -> Result<PixelBuffer> {
    let mut face = PixelBuffer::new(size, size)?;
    let stride = face.stride();
    let axis = slot.axis_face();
    let (pw, ph) = (panorama.width(), panorama.height());

    face.as_raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f64 + 0.5) / size as f64;
            for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                let u = (x as f64 + 0.5) / size as f64;
                let point = face_uv_to_point(axis, FaceUv::new(u, v));
                let (fx, fy) = Direction::from_vector(point).to_pixel(pw, ph);
                let px = (fx.round() as u32) % pw;
                let py = (fy.round() as u32).min(ph - 1);
                texel.copy_from_slice(&panorama.pixel(px, py));
            }
        });

    tracing::debug!("Split face '{}' ({}x{})", slot, size, size);
    Ok(face)
}
