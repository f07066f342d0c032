//! Inverse projection of a sphere direction onto a cube face plane.

use glam::DVec3;

use super::face::AxisFace;

/// Half the cube edge; face planes sit at +-0.5 along their axis.
pub const HALF_EDGE: f64 = 0.5;

/// Intersects the ray `(theta, phi)` with the plane of `face`.
///
/// The face's own coordinate is fixed at `sign * 0.5` and the other two are
/// recovered by similar triangles. No clamping is done here: when `face` is
/// the dominant axis of the ray the result lies inside the face square up to
/// floating-point error.
pub fn project_onto_face(face: AxisFace, theta: f64, phi: f64) -> DVec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let fixed = face.sign() * HALF_EDGE;

    match face {
        AxisFace::PosX | AxisFace::NegX => {
            let rho = fixed / (cos_theta * sin_phi);
            DVec3::new(fixed, rho * sin_theta * sin_phi, rho * cos_phi)
        }
        AxisFace::PosY | AxisFace::NegY => {
            let rho = fixed / (sin_theta * sin_phi);
            DVec3::new(rho * cos_theta * sin_phi, fixed, rho * cos_phi)
        }
        AxisFace::PosZ | AxisFace::NegZ => {
            let rho = fixed / cos_phi;
            DVec3::new(rho * cos_theta * sin_phi, rho * sin_theta * sin_phi, fixed)
        }
    }
}
