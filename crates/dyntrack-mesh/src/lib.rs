//! Dynamic-track geometry: decomposing a track placement into subsections and sweeping a
//! profile's cross-sections along each one into triangle strips.

pub mod builder;
pub mod error;
pub mod section;
pub mod subdivision;
pub mod vertex;
pub mod vertex_format;

pub use builder::{StripBuilder, SubsectionMesh, TrackMesh, bounding_radius, build_subsection_mesh};
pub use error::GeometryError;
pub use section::{SectionDecomposer, SectionShape, Subsection, TrackSectionSpec, decompose};
pub use subdivision::{Subdivision, subdivide};
pub use vertex::TrackVertex;
pub use vertex_format::{
    TRACK_FRONT_FACE, TRACK_INDEX_FORMAT, TRACK_VERTEX_ATTRIBUTES, TRACK_VERTEX_LAYOUT,
    track_vertex_buffer_layout,
};
