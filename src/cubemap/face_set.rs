//! The six source faces of a cubemap.

use crate::error::{PanoramaError, Result};
use crate::geometry::{AxisFace, FaceSlot};

use super::PixelBuffer;

/// Six face images in fixed slots (see [`FaceSlot`]).
///
/// Faces may have different sizes; each is sampled on its own. The front
/// face sets the panorama size.
#[derive(Debug, Clone)]
pub struct CubeFaceSet {
    faces: [PixelBuffer; 6],
}

impl CubeFaceSet {
    /// Creates a face set from all six images.
    pub fn new(
        up: PixelBuffer,
        down: PixelBuffer,
        left: PixelBuffer,
        right: PixelBuffer,
        front: PixelBuffer,
        back: PixelBuffer,
    ) -> Self {
        Self {
            faces: [up, down, left, right, front, back],
        }
    }

    /// Creates a face set from slot-ordered images (see [`FaceSlot::all`]).
    pub fn from_array(faces: [PixelBuffer; 6]) -> Self {
        Self { faces }
    }

    /// Returns the image stored in `slot`.
    pub fn face(&self, slot: FaceSlot) -> &PixelBuffer {
        &self.faces[slot.index()]
    }

    /// Returns the image sampled for rays exiting through `face`.
    pub fn for_axis(&self, face: AxisFace) -> &PixelBuffer {
        self.face(face.slot())
    }

    /// Iterates over `(slot, image)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceSlot, &PixelBuffer)> {
        FaceSlot::all().into_iter().zip(self.faces.iter())
    }

    /// Panorama dimensions this set produces: `4 * front.width` by `2 * front.height`.
    pub fn panorama_dimensions(&self) -> (u32, u32) {
        let front = self.face(FaceSlot::Front);
        (
            front.width().saturating_mul(4),
            front.height().saturating_mul(2),
        )
    }

    /// Returns true when all faces are square and the same size.
    pub fn is_uniform(&self) -> bool {
        let first = &self.faces[0];
        self.faces.iter().all(|f| {
            f.width() == f.height() && f.width() == first.width() && f.height() == first.height()
        })
    }

    pub fn into_array(self) -> [PixelBuffer; 6] {
        self.faces
    }
}

/// Collects faces one at a time until the set is complete.
#[derive(Debug, Clone, Default)]
pub struct CubeFaceSetBuilder {
    faces: [Option<PixelBuffer>; 6],
}

impl CubeFaceSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `image` in `slot`, returning the image it replaced.
    pub fn insert(&mut self, slot: FaceSlot, image: PixelBuffer) -> Option<PixelBuffer> {
        self.faces[slot.index()].replace(image)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, slot: FaceSlot, image: PixelBuffer) -> Self {
        self.insert(slot, image);
        self
    }

    /// Slots that have not been filled yet.
    pub fn missing(&self) -> Vec<FaceSlot> {
        FaceSlot::all()
            .into_iter()
            .filter(|slot| self.faces[slot.index()].is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == 6
    }

    /// Finishes the set, failing on the first missing slot.
    pub fn build(self) -> Result<CubeFaceSet> {
        let [up, down, left, right, front, back] = self.faces;
        let take = |face: Option<PixelBuffer>, slot| face.ok_or(PanoramaError::IncompleteInput(slot));
        Ok(CubeFaceSet::new(
            take(up, FaceSlot::Up)?,
            take(down, FaceSlot::Down)?,
            take(left, FaceSlot::Left)?,
            take(right, FaceSlot::Right)?,
            take(front, FaceSlot::Front)?,
            take(back, FaceSlot::Back)?,
        ))
    }
}
