//! Track-frame axis conventions and circular-arc helpers.
//!
//! The track frame is right-handed with +Y up. Track advances along -Z and +X is the
//! right-hand side when facing forward. A positive curve angle turns right (clockwise
//! seen from above), which is a yaw of `-angle` about +Y.

use glam::{Quat, Vec3};

/// Direction the track advances in its own local frame.
pub const TRACK_FORWARD: Vec3 = Vec3::NEG_Z;

/// Vertical axis of the track frame.
pub const TRACK_UP: Vec3 = Vec3::Y;

/// Rotation applied by a curve of signed `angle` radians.
pub fn turn_rotation(angle: f32) -> Quat {
    Quat::from_rotation_y(-angle)
}

/// Unit vector to the right of `heading`, in the horizontal plane.
pub fn right_of(heading: Vec3) -> Vec3 {
    heading.cross(TRACK_UP)
}

/// Vector from the start of an arc to its center.
///
/// Right turns (positive `angle`) put the center on the right of `heading`, left turns on
/// the left.
pub fn arc_center_offset(heading: Vec3, radius: f32, angle: f32) -> Vec3 {
    right_of(heading) * radius * angle.signum()
}

/// Straight-line distance between the ends of an arc subtending `angle`.
pub fn chord_length(radius: f32, angle: f32) -> f32 {
    2.0 * radius * (0.5 * angle.abs()).sin()
}

/// Largest distance between an arc subtending `angle` and its chord.
pub fn sagitta(radius: f32, angle: f32) -> f32 {
    radius * (1.0 - (0.5 * angle.abs()).cos())
}
