//! Canonical `wgpu` vertex layout and rasterizer conventions for track meshes.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field     |
//! |----------|--------|-----------|-----------|
//! | 0        | 0      | Float32x3 | position  |
//! | 1        | 12     | Float32x3 | normal    |
//! | 2        | 24     | Float32x2 | tex_coord |

use std::mem;

use wgpu::{FrontFace, IndexFormat, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::vertex::TrackVertex;

/// Vertex attributes for the track mesh format.
pub const TRACK_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

/// The vertex buffer layout for every track render pipeline.
pub const TRACK_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<TrackVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TRACK_VERTEX_ATTRIBUTES,
};

/// Track strips are wound clockwise seen from their visible side.
pub const TRACK_FRONT_FACE: FrontFace = FrontFace::Cw;

/// Index buffers hold `u32` indices.
pub const TRACK_INDEX_FORMAT: IndexFormat = IndexFormat::Uint32;

/// Return the track vertex buffer layout as an owned value.
pub fn track_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    TRACK_VERTEX_LAYOUT
}

const _: () = assert!(
    mem::size_of::<TrackVertex>() == 32,
    "TrackVertex size changed, update TRACK_VERTEX_LAYOUT"
);
const _: () = assert!(TRACK_VERTEX_ATTRIBUTES[1].offset == mem::offset_of!(TrackVertex, normal) as u64);
const _: () =
    assert!(TRACK_VERTEX_ATTRIBUTES[2].offset == mem::offset_of!(TrackVertex, tex_coord) as u64);
