//! Camera-local frustum planes extracted from the view-projection matrix.

use glam::{Mat4, Vec3, Vec4};

const LEFT: usize = 0;
const RIGHT: usize = 1;
const BOTTOM: usize = 2;
const TOP: usize = 3;
const NEAR: usize = 4;
const FAR: usize = 5;

/// A view frustum defined by six inward-pointing planes.
#[derive(Clone, Debug)]
pub struct Frustum {
    /// Six planes: left, right, bottom, top, near, far.
    /// Each `Vec4(a, b, c, d)` where `(a,b,c)` is the normalized inward
    /// normal and `d` is the signed distance term.
    planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix with `wgpu` depth range
    /// (`0..=1`) using the Griggs-Hartmann method.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];

        let mut planes = [Vec4::ZERO; 6];
        planes[LEFT] = rows[3] + rows[0];
        planes[RIGHT] = rows[3] - rows[0];
        planes[BOTTOM] = rows[3] + rows[1];
        planes[TOP] = rows[3] - rows[1];
        planes[NEAR] = rows[2];
        planes[FAR] = rows[3] - rows[2];

        for plane in &mut planes {
            let len = plane.truncate().length();
            if len > 0.0 {
                *plane /= len;
            }
        }

        Self { planes }
    }

    /// Signed distance of `point` from plane `index`; positive inside.
    fn signed_distance(&self, index: usize, point: Vec3) -> f32 {
        let plane = self.planes[index];
        plane.truncate().dot(point) + plane.w
    }

    /// Returns `true` if the sphere is at least partially inside the frustum.
    ///
    /// Conservative near frustum corners: a sphere just outside two planes at once may be
    /// reported visible.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        (0..self.planes.len()).all(|i| self.signed_distance(i, center) >= -radius)
    }

    /// Returns `true` if `point` is inside all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.intersects_sphere(point, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_frustum() -> Frustum {
        let view = Mat4::look_to_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.5, 3000.0);
        Frustum::from_view_projection(&(proj * view))
    }

    #[test]
    fn test_point_ahead_is_inside() {
        assert!(default_frustum().contains_point(Vec3::new(0.0, 0.0, -100.0)));
    }

    #[test]
    fn test_point_behind_is_outside() {
        assert!(!default_frustum().contains_point(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_point_beyond_far_is_outside() {
        assert!(!default_frustum().contains_point(Vec3::new(0.0, 0.0, -3500.0)));
    }

    #[test]
    fn test_point_far_to_the_side_is_outside() {
        assert!(!default_frustum().contains_point(Vec3::new(1000.0, 0.0, -50.0)));
    }

    #[test]
    fn test_sphere_straddling_plane_is_visible() {
        let frustum = default_frustum();
        // Center just behind the camera, radius reaching in front of the near plane.
        assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, 5.0), 10.0));
        assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 50.0), 10.0));
    }

    #[test]
    fn test_large_sphere_beside_view_is_visible() {
        let frustum = default_frustum();
        assert!(!frustum.intersects_sphere(Vec3::new(500.0, 0.0, -100.0), 50.0));
        assert!(frustum.intersects_sphere(Vec3::new(500.0, 0.0, -100.0), 500.0));
    }
}
