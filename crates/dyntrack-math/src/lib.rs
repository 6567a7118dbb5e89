//! Shared geometry for dynamic-track generation: axis conventions, tiled world poses,
//! and circular-arc helpers.

mod arc;
mod pose;

pub use arc::{
    TRACK_FORWARD, TRACK_UP, arc_center_offset, chord_length, right_of, sagitta, turn_rotation,
};
pub use pose::{TILE_SIZE, WorldPose};
