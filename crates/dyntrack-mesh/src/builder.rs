//! Sweeping a profile's cross-sections along a subsection into triangle strips.
//!
//! Each [`LodItem`] of the profile becomes one [`TrackMesh`]. The base cross-section is
//! emitted verbatim as the first slice, then `N` further slices are produced by advancing
//! the previous one by one subdivision step. Each polyline segment gets one quad (two
//! triangles) between consecutive slices, so buffer sizes are known up front:
//!
//! - vertices: `item.vertex_count() * (N + 1)`
//! - indices: `item.segment_count() * N * 6`
//!
//! Geometry is in the subsection's local frame (start pose at the origin, track along -Z).
//! Normals are copied unchanged from the base cross-section on both straights and curves.

use dyntrack_math::{TRACK_FORWARD, arc_center_offset, turn_rotation};
use dyntrack_profile::{LodItem, MaterialBinding, Profile};
use glam::{Quat, Vec3};

use crate::error::GeometryError;
use crate::section::{SectionShape, Subsection, TrackSectionSpec};
use crate::subdivision::{Subdivision, subdivide};
use crate::vertex::TrackVertex;

/// The swept mesh of one LOD item over one subsection.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackMesh {
    pub vertices: Vec<TrackVertex>,
    pub indices: Vec<u32>,
    /// Binding forwarded from the item for the renderer.
    pub material: MaterialBinding,
    /// Number of subdivision steps the strip was swept in.
    pub subdivisions: u32,
}

impl TrackMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer contents as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents as raw bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// How one slice is derived from the previous one.
#[derive(Clone, Copy, Debug)]
enum Advance {
    Straight {
        displacement: Vec3,
    },
    Curve {
        center: Vec3,
        rotation: Quat,
    },
}

/// Sweeps profile items along one validated track section.
#[derive(Clone, Copy, Debug)]
pub struct StripBuilder {
    subdivision: Subdivision,
    advance: Advance,
}

impl StripBuilder {
    /// Validate `spec` and derive its subdivision under `profile`.
    pub fn new(spec: &TrackSectionSpec, profile: &Profile) -> Result<Self, GeometryError> {
        let length_or_angle = spec.length_or_angle();
        if length_or_angle == 0.0 || !length_or_angle.is_finite() {
            return Err(GeometryError::DegenerateSection(length_or_angle));
        }
        if let SectionShape::Curve { radius, .. } = spec.shape
            && !(radius > 0.0 && radius.is_finite())
        {
            return Err(GeometryError::NonPositiveRadius(radius));
        }

        let subdivision = subdivide(spec, profile);
        let rise = Vec3::Y * subdivision.rise;
        let advance = match spec.shape {
            SectionShape::Straight { .. } => Advance::Straight {
                displacement: TRACK_FORWARD * subdivision.step + rise,
            },
            SectionShape::Curve { angle, radius } => Advance::Curve {
                center: arc_center_offset(TRACK_FORWARD, radius, angle),
                rotation: turn_rotation(subdivision.step),
            },
        };
        Ok(Self {
            subdivision,
            advance,
        })
    }

    pub fn subdivision(&self) -> Subdivision {
        self.subdivision
    }

    /// Sweep `item`'s cross-section into a strip mesh.
    pub fn build(&self, item: &LodItem) -> TrackMesh {
        let steps = self.subdivision.count as usize;
        let stride = item.vertex_count();
        let rise = Vec3::Y * self.subdivision.rise;

        let mut vertices = Vec::with_capacity(stride * (steps + 1));
        vertices.extend(item.base_vertices().map(TrackVertex::from));

        // Path point relative to the arc center, for curves.
        let mut radius = match self.advance {
            Advance::Curve { center, .. } => -center,
            Advance::Straight { .. } => Vec3::ZERO,
        };

        for step in 0..steps {
            let previous = step * stride;
            let mut offset = 0;
            for polyline in item.polylines() {
                let delta_tex = polyline.delta_tex_coord();
                for i in 0..polyline.vertex_count() {
                    let prev = vertices[previous + offset + i];
                    let (position, run) = match self.advance {
                        Advance::Straight { displacement } => {
                            (prev.position() + displacement, displacement.length())
                        }
                        Advance::Curve { center, rotation } => {
                            let next_radius = rotation * radius;
                            let relative = prev.position() - center - radius;
                            let position = rise + center + next_radius + rotation * relative;
                            (position, (next_radius - radius).length())
                        }
                    };
                    vertices.push(TrackVertex::new(
                        position,
                        prev.normal(),
                        prev.tex_coord() + delta_tex * run,
                    ));
                }
                offset += polyline.vertex_count();
            }
            if let Advance::Curve { rotation, .. } = self.advance {
                radius = rotation * radius;
            }
        }

        TrackMesh {
            vertices,
            indices: strip_indices(item, self.subdivision.count),
            material: item.material().clone(),
            subdivisions: self.subdivision.count,
        }
    }
}

/// Two clockwise triangles per polyline segment between each pair of adjacent slices.
fn strip_indices(item: &LodItem, steps: u32) -> Vec<u32> {
    let stride = item.vertex_count() as u32;
    let mut indices = Vec::with_capacity(item.segment_count() * steps as usize * 6);
    for step in 1..=steps {
        let mut first = step * stride;
        for polyline in item.polylines() {
            for i in 1..polyline.vertex_count() as u32 {
                let current = first + i;
                let previous = current - 1;
                indices.extend_from_slice(&[
                    current,
                    previous - stride,
                    previous,
                    current,
                    current - stride,
                    previous - stride,
                ]);
            }
            first += polyline.vertex_count() as u32;
        }
    }
    indices
}

/// Radius of the sphere around a subsection's start/end midpoint used for culling and
/// range tests: half the length of a straight, half the chord of a curve.
pub fn bounding_radius(spec: &TrackSectionSpec) -> f32 {
    match spec.shape {
        SectionShape::Straight { length } => 0.5 * length.abs(),
        SectionShape::Curve { angle, radius } => radius * (0.5 * angle.abs()).sin(),
    }
}

/// Every renderable unit of one subsection, in profile unit order.
#[derive(Clone, Debug, PartialEq)]
pub struct SubsectionMesh {
    pub subsection: Subsection,
    /// One mesh per profile item, indexed by [`LodLevel::prim_range`](dyntrack_profile::LodLevel::prim_range).
    pub units: Vec<TrackMesh>,
    pub bounding_radius: f32,
}

impl SubsectionMesh {
    pub fn vertex_count(&self) -> usize {
        self.units.iter().map(TrackMesh::vertex_count).sum()
    }

    pub fn index_count(&self) -> usize {
        self.units.iter().map(TrackMesh::index_count).sum()
    }
}

/// Build every item of `profile` along `subsection`.
pub fn build_subsection_mesh(
    subsection: &Subsection,
    profile: &Profile,
) -> Result<SubsectionMesh, GeometryError> {
    let builder = StripBuilder::new(&subsection.spec, profile)?;
    let units: Vec<TrackMesh> = profile.items().map(|item| builder.build(item)).collect();
    let mesh = SubsectionMesh {
        subsection: *subsection,
        units,
        bounding_radius: bounding_radius(&subsection.spec),
    };
    log::debug!(
        "Built track subsection at {}: {} steps, {} units, {} vertices, {} indices",
        subsection.start,
        builder.subdivision().count,
        mesh.units.len(),
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}
