//! GPU vertex of a swept track strip.

use dyntrack_profile::Vertex;
use glam::{Vec2, Vec3};

/// A single track-mesh vertex, laid out for direct upload.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`, subsection-local meters
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` tex_coord `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TrackVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

static_assertions::assert_eq_size!(TrackVertex, [u8; 32]);

impl TrackVertex {
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tex_coord: tex_coord.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from_array(self.tex_coord)
    }
}

impl From<&Vertex> for TrackVertex {
    fn from(v: &Vertex) -> Self {
        TrackVertex::new(v.position, v.normal, v.tex_coord)
    }
}
