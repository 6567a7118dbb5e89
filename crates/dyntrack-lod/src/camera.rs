//! The camera as seen by LOD selection.

use glam::{IVec2, Mat4, Vec3};

use crate::frustum::Frustum;

/// What per-frame selection needs to know about the viewer.
///
/// Positions passed in and returned are relative to [`CameraView::tile`].
pub trait CameraView {
    /// Tile the camera's frame of reference is anchored to.
    fn tile(&self) -> IVec2;

    /// Camera position relative to the center of its tile.
    fn position(&self) -> Vec3;

    /// Whether a sphere is at least partially within the field of view.
    fn in_fov(&self, center: Vec3, radius: f32) -> bool;
}

/// A perspective camera anchored to a world tile.
#[derive(Clone, Debug)]
pub struct TrackCamera {
    tile: IVec2,
    position: Vec3,
    view_projection: Mat4,
    frustum: Frustum,
}

impl TrackCamera {
    /// Build a camera at `position` on `tile`, looking along `forward`.
    ///
    /// `fov_y` is the vertical field of view in radians; `near`/`far` bound the depth range.
    pub fn look_to(
        tile: IVec2,
        position: Vec3,
        forward: Vec3,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let view = Mat4::look_to_rh(position, forward, Vec3::Y);
        let projection = Mat4::perspective_rh(fov_y, aspect_ratio, near, far);
        let view_projection = projection * view;
        Self {
            tile,
            position,
            view_projection,
            frustum: Frustum::from_view_projection(&view_projection),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }
}

impl CameraView for TrackCamera {
    fn tile(&self) -> IVec2 {
        self.tile
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn in_fov(&self, center: Vec3, radius: f32) -> bool {
        self.frustum.intersects_sphere(center, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn test_camera_sees_ahead_not_behind() {
        let camera = TrackCamera::look_to(
            IVec2::new(4, 4),
            Vec3::new(10.0, 2.0, 0.0),
            Vec3::NEG_Z,
            FRAC_PI_3,
            1.5,
            0.5,
            5000.0,
        );
        assert_eq!(camera.tile(), IVec2::new(4, 4));
        assert!(camera.in_fov(Vec3::new(10.0, 0.0, -200.0), 5.0));
        assert!(!camera.in_fov(Vec3::new(10.0, 0.0, 200.0), 5.0));
    }
}
