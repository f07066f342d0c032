//! RGBA8 pixel buffer.

use image::RgbaImage;

use crate::error::{PanoramaError, Result};

/// A decoded RGBA image: 4 bytes per pixel, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent black buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::solid(width, height, [0, 0, 0, 0])
    }

    /// Creates a buffer filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: rgba.repeat(len / 4),
        })
    }

    /// Wraps existing RGBA bytes, checking the length against the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let invalid = PanoramaError::InvalidBuffer { width, height, len: data.len() };
        match Self::byte_len(width, height) {
            Ok(len) if len == data.len() => Ok(Self { width, height, data }),
            _ => Err(invalid),
        }
    }

    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(PanoramaError::InvalidBuffer { width, height, len: 0 });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PanoramaError::InvalidBuffer { width, height, len: 0 })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Reads the texel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.texels()[self.offset(x, y) / 4]
    }

    /// Writes the texel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// All texels as `[r, g, b, a]` groups.
    pub fn texels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

impl TryFrom<PixelBuffer> for RgbaImage {
    type Error = PanoramaError;

    fn try_from(buf: PixelBuffer) -> Result<Self> {
        let (width, height, len) = (buf.width, buf.height, buf.data.len());
        RgbaImage::from_raw(width, height, buf.data)
            .ok_or(PanoramaError::InvalidBuffer { width, height, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_and_access() {
        let mut buf = PixelBuffer::solid(3, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(buf.as_raw().len(), 3 * 2 * 4);
        assert_eq!(buf.stride(), 12);
        assert!(buf.texels().iter().all(|&t| t == [1, 2, 3, 4]));

        buf.put_pixel(2, 1, [9, 8, 7, 6]);
        assert_eq!(buf.pixel(2, 1), [9, 8, 7, 6]);
        assert_eq!(buf.pixel(1, 1), [1, 2, 3, 4]);
        assert_eq!(&buf.as_raw()[20..24], &[9, 8, 7, 6]);
    }

    #[test]
    fn test_rejects_bad_length() {
        assert!(matches!(
            PixelBuffer::from_rgba(2, 2, vec![0; 15]),
            Err(PanoramaError::InvalidBuffer { width: 2, height: 2, len: 15 })
        ));
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(PixelBuffer::new(0, 4).is_err());
        assert!(PixelBuffer::from_rgba(4, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_image_conversion() {
        let buf = PixelBuffer::solid(4, 3, [10, 20, 30, 255]).unwrap();
        let img = RgbaImage::try_from(buf.clone()).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(PixelBuffer::from(img), buf);
    }
}
