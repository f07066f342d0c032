//! Equirectangular panorama assembled from six cube faces.

use std::time::Instant;

use rayon::prelude::*;

use crate::cubemap::{CubeFaceSet, PixelBuffer};
use crate::error::{PanoramaError, Result};
use crate::geometry::{point_to_face_uv, Direction};

use super::{SampleFilter, SynthOptions};

/// Stitches `faces` into a panorama using the default options.
///
/// # Example
/// ```
/// use cubepano::{synthesize, CubeFaceSet, PixelBuffer};
///
/// let face = PixelBuffer::solid(8, 8, [200, 10, 10, 255]).unwrap();
/// let faces = CubeFaceSet::from_array(std::array::from_fn(|_| face.clone()));
/// let pano = synthesize(&faces).unwrap();
/// assert_eq!((pano.width(), pano.height()), (32, 16));
/// ```
pub fn synthesize(faces: &CubeFaceSet) -> Result<PixelBuffer> {
    synthesize_with(faces, &SynthOptions::default())
}

/// Stitches `faces` into a `4 * front.width` by `2 * front.height` panorama.
///
/// Rows are filled in parallel; each output texel is written exactly once.
/// The buffer is only returned when every texel was computed.
pub fn synthesize_with(faces: &CubeFaceSet, options: &SynthOptions) -> Result<PixelBuffer> {
    let (width, height) = faces.panorama_dimensions();
    let mut out = PixelBuffer::new(width, height)?;
    let start = Instant::now();

    let filter = options.filter;
    match options.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| PanoramaError::Config(e.to_string()))?;
            pool.install(|| fill_rows(faces, &mut out, filter))?;
        }
        None => fill_rows(faces, &mut out, filter)?,
    }

    tracing::debug!(
        "Synthesized {}x{} panorama ({:?}) in {:.2?}",
        width,
        height,
        filter,
        start.elapsed()
    );
    Ok(out)
}

fn fill_rows(faces: &CubeFaceSet, out: &mut PixelBuffer, filter: SampleFilter) -> Result<()> {
    let (width, height) = (out.width(), out.height());
    let stride = out.stride();

    out.as_raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                let rgba = panorama_texel(faces, x as u32, y as u32, width, height, filter)?;
                texel.copy_from_slice(&rgba);
            }
            Ok(())
        })
}

/// Computes the color of panorama pixel `(x, y)` in a `width` x `height` output.
pub fn panorama_texel(
    faces: &CubeFaceSet,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    filter: SampleFilter,
) -> Result<[u8; 4]> {
    let hit = Direction::from_pixel(x, y, width, height).hit();
    let uv = point_to_face_uv(hit.face, hit.point);
    if !uv.is_finite() {
        return Err(PanoramaError::DegenerateGeometry { x, y });
    }
    Ok(filter.sample(faces.for_axis(hit.face), uv))
}
