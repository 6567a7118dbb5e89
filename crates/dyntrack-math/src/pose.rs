//! Poses on the tiled world grid.
//!
//! The world is cut into square tiles of [`TILE_SIZE`] meters on the horizontal (x, z)
//! plane. A pose stores the tile index plus an f32 translation relative to that tile's
//! center, so geometry near the camera keeps full precision regardless of how far the
//! route extends.

use std::fmt;

use glam::{IVec2, Mat4, Quat, Vec3};

use crate::arc::TRACK_FORWARD;

/// Edge length of one world tile, in meters.
pub const TILE_SIZE: f32 = 2048.0;

/// Position and orientation of a track root on the tiled world grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPose {
    /// Tile index on the (x, z) grid.
    pub tile: IVec2,
    /// Translation relative to the tile center.
    pub translation: Vec3,
    /// Orientation of the track frame.
    pub orientation: Quat,
}

impl Default for WorldPose {
    fn default() -> Self {
        Self::new(IVec2::ZERO, Vec3::ZERO, Quat::IDENTITY)
    }
}

impl WorldPose {
    pub fn new(tile: IVec2, translation: Vec3, orientation: Quat) -> Self {
        Self {
            tile,
            translation,
            orientation,
        }
    }

    /// A pose on `tile` at `translation`, heading rotated by `yaw` radians about +Y.
    pub fn from_yaw(tile: IVec2, translation: Vec3, yaw: f32) -> Self {
        Self::new(tile, translation, Quat::from_rotation_y(yaw))
    }

    /// Direction the track advances from this pose.
    pub fn forward(&self) -> Vec3 {
        self.orientation * TRACK_FORWARD
    }

    /// Translation expressed relative to the center of `tile`.
    pub fn translation_relative_to(&self, tile: IVec2) -> Vec3 {
        let delta = (self.tile - tile).as_vec2() * TILE_SIZE;
        self.translation + Vec3::new(delta.x, 0.0, delta.y)
    }

    /// Full rigid transform expressed relative to the center of `tile`.
    pub fn transform_relative_to(&self, tile: IVec2) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.translation_relative_to(tile))
    }

    /// Re-express the pose so its translation lies within its own tile.
    ///
    /// The represented location is unchanged; only the split between tile index and
    /// translation moves.
    pub fn normalized(&self) -> Self {
        let shift_x = (self.translation.x / TILE_SIZE).round() as i32;
        let shift_z = (self.translation.z / TILE_SIZE).round() as i32;
        let shift = IVec2::new(shift_x, shift_z);
        let offset = shift.as_vec2() * TILE_SIZE;
        Self {
            tile: self.tile + shift,
            translation: self.translation - Vec3::new(offset.x, 0.0, offset.y),
            orientation: self.orientation,
        }
    }

    /// Returns true if both poses describe the same location and orientation within epsilon.
    pub fn approx_eq(&self, other: &WorldPose, epsilon: f32) -> bool {
        self.translation_relative_to(other.tile)
            .abs_diff_eq(other.translation, epsilon)
            && self.orientation.abs_diff_eq(other.orientation, epsilon)
    }
}

impl fmt::Display for WorldPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile({}, {}) + ({:.3}, {:.3}, {:.3})",
            self.tile.x, self.tile.y, self.translation.x, self.translation.y, self.translation.z
        )
    }
}
