//! Texel lookup on a face image.

use serde::{Deserialize, Serialize};

use crate::cubemap::PixelBuffer;
use crate::geometry::FaceUv;

/// How a face image is read at a fractional position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleFilter {
    /// Mean of the floor and ceil texels along the diagonal. Matches the
    /// output of the original browser tool byte for byte.
    #[default]
    TwoTap,
    /// Weighted four-texel interpolation around texel centers.
    Bilinear,
}

impl SampleFilter {
    pub fn sample(self, face: &PixelBuffer, uv: FaceUv) -> [u8; 4] {
        match self {
            SampleFilter::TwoTap => sample_two_tap(face, uv),
            SampleFilter::Bilinear => sample_bilinear(face, uv),
        }
    }
}

#[inline]
fn clamp_index(value: f64, size: u32) -> u32 {
    value.clamp(0.0, (size - 1) as f64) as u32
}

/// Mean of two channel values, rounding halves to the even neighbour the way
/// a clamped byte store does.
#[inline]
fn average(a: u8, b: u8) -> u8 {
    let sum = a as u16 + b as u16;
    let half = sum >> 1;
    (half + (sum & half & 1)) as u8
}

/// Averages the texels at `(floor(u*w), floor(v*h))` and `(ceil(u*w), ceil(v*h))`.
///
/// Only those two diagonal corners are read. Indices are clamped into the
/// image, so any UV (including the 0 and 1 edges) is safe.
pub fn sample_two_tap(face: &PixelBuffer, uv: FaceUv) -> [u8; 4] {
    let (w, h) = (face.width(), face.height());
    let fx = uv.u * w as f64;
    let fy = uv.v * h as f64;

    let lo = face.pixel(clamp_index(fx.floor(), w), clamp_index(fy.floor(), h));
    let hi = face.pixel(clamp_index(fx.ceil(), w), clamp_index(fy.ceil(), h));

    std::array::from_fn(|c| average(lo[c], hi[c]))
}

/// Standard bilinear filtering with clamp-to-edge addressing.
pub fn sample_bilinear(face: &PixelBuffer, uv: FaceUv) -> [u8; 4] {
    let (w, h) = (face.width(), face.height());
    let fx = (uv.u * w as f64 - 0.5).clamp(0.0, (w - 1) as f64);
    let fy = (uv.v * h as f64 - 0.5).clamp(0.0, (h - 1) as f64);

    let (x0, y0) = (fx.floor() as u32, fy.floor() as u32);
    let (x1, y1) = ((x0 + 1).min(w - 1), (y0 + 1).min(h - 1));
    let (tx, ty) = (fx - x0 as f64, fy - y0 as f64);

    let p00 = face.pixel(x0, y0);
    let p10 = face.pixel(x1, y0);
    let p01 = face.pixel(x0, y1);
    let p11 = face.pixel(x1, y1);

    std::array::from_fn(|c| {
        let top = p00[c] as f64 * (1.0 - tx) + p10[c] as f64 * tx;
        let bottom = p01[c] as f64 * (1.0 - tx) + p11[c] as f64 * tx;
        (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                buf.put_pixel(x, y, [(x * 10) as u8, (y * 10) as u8, 0, 255]);
            }
        }
        buf
    }

    #[test]
    fn test_average_rounds_half_to_even() {
        assert_eq!(average(0, 0), 0);
        assert_eq!(average(255, 255), 255);
        assert_eq!(average(0, 255), 128);
        assert_eq!(average(1, 2), 2);
        assert_eq!(average(2, 3), 2);
        assert_eq!(average(10, 20), 15);
        assert_eq!(average(254, 255), 254);
    }

    #[test]
    fn test_solid_face_center_is_exact() {
        let face = PixelBuffer::solid(16, 16, [12, 34, 56, 78]).unwrap();
        for filter in [SampleFilter::TwoTap, SampleFilter::Bilinear] {
            assert_eq!(filter.sample(&face, FaceUv::new(0.5, 0.5)), [12, 34, 56, 78]);
        }
    }

    #[test]
    fn test_two_tap_reads_diagonal() {
        let face = gradient(8, 8);
        // (2.5, 4.5) -> texels (2, 4) and (3, 5)
        let c = sample_two_tap(&face, FaceUv::new(2.5 / 8.0, 4.5 / 8.0));
        assert_eq!(c, [25, 45, 0, 255]);

        // Integer positions hit a single texel.
        let c = sample_two_tap(&face, FaceUv::new(3.0 / 8.0, 1.0 / 8.0));
        assert_eq!(c, [30, 10, 0, 255]);
    }

    #[test]
    fn test_edges_clamp() {
        let face = gradient(4, 4);
        let corners = [
            (FaceUv::new(0.0, 0.0), [0, 0, 0, 255]),
            (FaceUv::new(1.0, 1.0), [30, 30, 0, 255]),
            (FaceUv::new(1.0, 0.0), [30, 0, 0, 255]),
            (FaceUv::new(-0.01, 1.01), [0, 30, 0, 255]),
        ];
        for (uv, expected) in corners {
            assert_eq!(sample_two_tap(&face, uv), expected, "uv {:?}", uv);
            assert_eq!(sample_bilinear(&face, uv), expected, "uv {:?}", uv);
        }
    }

    #[test]
    fn test_bilinear_interpolates() {
        let face = gradient(4, 4);
        // Halfway between texel centers 1 and 2 horizontally.
        let c = sample_bilinear(&face, FaceUv::new(2.0 / 4.0, 1.5 / 4.0));
        assert_eq!(c, [15, 10, 0, 255]);
    }
}
