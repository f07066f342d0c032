//! Sphere directions derived from equirectangular coordinates.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use super::face::AxisFace;
use super::project::project_onto_face;

/// A sampling ray from the sphere center, stored as spherical angles.
///
/// `theta` is the azimuth in radians, `phi` the polar angle measured from +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub theta: f64,
    pub phi: f64,
}

/// The face a direction strikes and the exact point on that face's plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    pub face: AxisFace,
    /// Point on the cube of edge 1; the face's own axis is fixed at +-0.5.
    pub point: DVec3,
}

impl Direction {
    /// Creates a direction from spherical angles.
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Direction for an output pixel of an equirectangular image.
    ///
    /// The horizontal coordinate is shifted by half a turn so the +X face
    /// lands at the image's horizontal center.
    pub fn from_pixel(x: u32, y: u32, width: u32, height: u32) -> Self {
        let u = (x as f64 / width as f64 + 0.5).fract();
        let v = y as f64 / height as f64;
        Self::new(u * TAU, v * PI)
    }

    /// Direction of a (not necessarily unit) vector.
    pub fn from_vector(v: DVec3) -> Self {
        let n = v.normalize();
        Self::new(n.y.atan2(n.x).rem_euclid(TAU), n.z.clamp(-1.0, 1.0).acos())
    }

    /// Continuous pixel position of this direction in a `width` x `height`
    /// equirectangular image; inverse of [`Direction::from_pixel`].
    pub fn to_pixel(self, width: u32, height: u32) -> (f64, f64) {
        let u = (self.theta / TAU - 0.5).rem_euclid(1.0);
        (u * width as f64, self.phi / PI * height as f64)
    }

    /// Unit vector for this direction.
    #[inline]
    pub fn to_cartesian(self) -> DVec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        DVec3::new(cos_theta * sin_phi, sin_theta * sin_phi, cos_phi)
    }

    /// Finds the face this direction exits through and where it hits it.
    pub fn hit(self) -> FaceHit {
        let face = dominant_face(self.to_cartesian());
        FaceHit {
            face,
            point: project_onto_face(face, self.theta, self.phi),
        }
    }
}

/// Selects the face of the axis with the largest absolute component.
///
/// Components are scaled by the maximum magnitude, so the dominant one is
/// exactly +-1. When several reach +-1 at once (cube edges and corners) the
/// X axis wins over Y, and Y over Z.
pub fn dominant_face(dir: DVec3) -> AxisFace {
    let m = dir.abs().max_element();
    let scaled = dir / m;

    if scaled.x.abs() == 1.0 {
        if scaled.x == 1.0 { AxisFace::PosX } else { AxisFace::NegX }
    } else if scaled.y.abs() == 1.0 {
        if scaled.y == 1.0 { AxisFace::PosY } else { AxisFace::NegY }
    } else if scaled.z == 1.0 {
        AxisFace::PosZ
    } else {
        AxisFace::NegZ
    }
}
