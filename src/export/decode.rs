//! Decoding face images from disk.

use std::path::{Path, PathBuf};

use crate::cubemap::{CubeFaceSet, CubeFaceSetBuilder, PixelBuffer};
use crate::error::{PanoramaError, Result};
use crate::geometry::FaceSlot;

const FACE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Decodes one image file to RGBA8.
pub fn load_face(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?.to_rgba8();
    tracing::info!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(PixelBuffer::from(img))
}

/// Decodes the given files into a face set. Every slot must be listed.
pub fn load_face_set(files: &[(FaceSlot, PathBuf)]) -> Result<CubeFaceSet> {
    let mut builder = CubeFaceSetBuilder::new();
    for (slot, path) in files {
        builder.insert(*slot, load_face(path)?);
        tracing::debug!("Face '{}' ready ({}/6)", slot, builder.len());
    }
    builder.build()
}

/// Finds `up`, `down`, `left`, `right`, `front` and `back` images in `dir`.
///
/// Each face is looked up as `<name>.png`, `<name>.jpg` or `<name>.jpeg`,
/// in that order.
pub fn find_face_files(dir: &Path) -> Result<Vec<(FaceSlot, PathBuf)>> {
    FaceSlot::all()
        .into_iter()
        .map(|slot| {
            FACE_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", slot.name(), ext)))
                .find(|p| p.is_file())
                .map(|p| (slot, p))
                .ok_or_else(|| PanoramaError::MissingFaceFile(slot, dir.to_path_buf()))
        })
        .collect()
}
