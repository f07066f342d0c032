//! Mapping between points on a cube face and the face image's unit square.

use glam::DVec3;

use super::face::AxisFace;
use super::project::HALF_EDGE;

/// A coordinate in [0, 1] x [0, 1] local to one face image.
///
/// `v` grows downwards: row 0 of the image is `v = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceUv {
    pub u: f64,
    pub v: f64,
}

impl FaceUv {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    pub fn is_finite(self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }
}

/// Converts a point on `face` to that face image's UV coordinate.
///
/// The per-face axis table matches how the source images are authored; the
/// vertical result is flipped because image rows run top to bottom.
pub fn point_to_face_uv(face: AxisFace, p: DVec3) -> FaceUv {
    let (u, v_up) = match face {
        AxisFace::PosX => (p.y + HALF_EDGE, p.z + HALF_EDGE),
        AxisFace::NegX => (-p.y + HALF_EDGE, p.z + HALF_EDGE),
        AxisFace::PosY => (-p.x + HALF_EDGE, p.z + HALF_EDGE),
        AxisFace::NegY => (p.x + HALF_EDGE, p.z + HALF_EDGE),
        AxisFace::PosZ => (p.y + HALF_EDGE, -p.x + HALF_EDGE),
        AxisFace::NegZ => (p.y + HALF_EDGE, p.x + HALF_EDGE),
    };
    FaceUv::new(u, 1.0 - v_up)
}

/// Inverse of [`point_to_face_uv`]: the point on `face` shown at `uv`.
pub fn face_uv_to_point(face: AxisFace, uv: FaceUv) -> DVec3 {
    let s = uv.u - HALF_EDGE;
    let t = HALF_EDGE - uv.v;
    let fixed = face.sign() * HALF_EDGE;

    match face {
        AxisFace::PosX => DVec3::new(fixed, s, t),
        AxisFace::NegX => DVec3::new(fixed, -s, t),
        AxisFace::PosY => DVec3::new(-s, fixed, t),
        AxisFace::NegY => DVec3::new(s, fixed, t),
        AxisFace::PosZ => DVec3::new(-t, s, fixed),
        AxisFace::NegZ => DVec3::new(t, s, fixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_centers_map_to_middle() {
        for face in AxisFace::all() {
            let center = face_uv_to_point(face, FaceUv::new(0.5, 0.5));
            let uv = point_to_face_uv(face, center);
            assert!(
                (uv.u - 0.5).abs() < 1e-12 && (uv.v - 0.5).abs() < 1e-12,
                "Face {:?} center should be (0.5, 0.5), got {:?}",
                face,
                uv
            );
        }
    }

    #[test]
    fn test_orientation_table() {
        // Top-left corner of each image, written out per face.
        let top_left = [
            (AxisFace::PosX, DVec3::new(0.5, -0.5, 0.5)),
            (AxisFace::NegX, DVec3::new(-0.5, 0.5, 0.5)),
            (AxisFace::PosY, DVec3::new(0.5, 0.5, 0.5)),
            (AxisFace::NegY, DVec3::new(-0.5, -0.5, 0.5)),
            (AxisFace::PosZ, DVec3::new(-0.5, -0.5, 0.5)),
            (AxisFace::NegZ, DVec3::new(0.5, -0.5, -0.5)),
        ];
        for (face, point) in top_left {
            let uv = point_to_face_uv(face, point);
            assert!(
                uv.u.abs() < 1e-12 && uv.v.abs() < 1e-12,
                "Face {:?}: {:?} should be the top-left corner, got {:?}",
                face,
                point,
                uv
            );
            assert!((face_uv_to_point(face, FaceUv::new(0.0, 0.0)) - point).length() < 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_face_uv() {
        for face in AxisFace::all() {
            for &u in &[0.0, 0.1, 0.5, 0.75, 1.0] {
                for &v in &[0.0, 0.3, 0.5, 0.9, 1.0] {
                    let p = face_uv_to_point(face, FaceUv::new(u, v));
                    let uv = point_to_face_uv(face, p);
                    assert!(
                        (uv.u - u).abs() < 1e-12 && (uv.v - v).abs() < 1e-12,
                        "UV mismatch for {:?}: ({}, {}) vs {:?}",
                        face,
                        u,
                        v,
                        uv
                    );
                }
            }
        }
    }

    #[test]
    fn test_random_directions_stay_inside_face() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let eps = 1e-9;
        for _ in 0..20_000 {
            let theta = rng.random_range(0.0..TAU);
            let phi = rng.random_range(0.0..=PI);
            let hit = Direction::new(theta, phi).hit();
            let uv = point_to_face_uv(hit.face, hit.point);
            assert!(
                (-eps..=1.0 + eps).contains(&uv.u) && (-eps..=1.0 + eps).contains(&uv.v),
                "theta={} phi={} escaped face {:?}: {:?}",
                theta,
                phi,
                hit.face,
                uv
            );
        }
    }
}
