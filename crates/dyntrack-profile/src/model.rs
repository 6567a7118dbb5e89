//! Validated, immutable profile hierarchy: Profile -> LodLevel -> LodItem -> Polyline -> Vertex.

use std::ops::Range;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// How LOD levels combine when the camera moves closer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LodMethod {
    /// Unspecified; behaves as [`LodMethod::ComponentAdditive`].
    #[default]
    None,
    /// The selected level is drawn together with every farther level.
    ComponentAdditive,
    /// Only the selected level is drawn.
    CompleteReplacement,
}

impl LodMethod {
    /// The method actually applied at draw time.
    pub fn resolved(self) -> LodMethod {
        match self {
            LodMethod::None => LodMethod::ComponentAdditive,
            other => other,
        }
    }
}

/// Error-control policy used to refine curve subdivision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchControl {
    /// Subdivide by chord span alone.
    #[default]
    None,
    /// Limit the chord length of each step.
    ChordLength,
    /// Limit the sagitta (chord-to-arc distance) of each step.
    ChordDisplacement,
}

/// Texture address mode forwarded to the material collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TexAddressMode {
    #[default]
    Wrap,
    Mirror,
    Clamp,
    Border,
}

/// A cross-section vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// An open chain of cross-section vertices swept into a strip.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    name: String,
    delta_tex_coord: Vec2,
    vertices: Vec<Vertex>,
}

impl Polyline {
    /// Create a polyline, checking that it spans at least one segment, advances its texture
    /// along the track, and has no zero normals.
    pub fn new(
        name: impl Into<String>,
        delta_tex_coord: Vec2,
        vertices: Vec<Vertex>,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if vertices.len() < 2 {
            return Err(ProfileError::TooFewVertices {
                name,
                count: vertices.len(),
            });
        }
        if delta_tex_coord == Vec2::ZERO {
            return Err(ProfileError::ZeroDeltaTexCoord(name));
        }
        if let Some(index) = vertices.iter().position(|v| v.normal == Vec3::ZERO) {
            return Err(ProfileError::ZeroNormal { name, index });
        }
        Ok(Self::assemble(name, delta_tex_coord, vertices))
    }

    pub(crate) fn assemble(name: String, delta_tex_coord: Vec2, vertices: Vec<Vertex>) -> Self {
        debug_assert!(vertices.len() >= 2);
        Self {
            name,
            delta_tex_coord,
            vertices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Texture coordinate advance per meter of track.
    pub fn delta_tex_coord(&self) -> Vec2 {
        self.delta_tex_coord
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of segments between consecutive vertices.
    pub fn segment_count(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Material and pipeline binding of an [`LodItem`].
///
/// Opaque to mesh generation; forwarded unchanged to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialBinding {
    pub texture_ref: String,
    pub shader_ref: String,
    pub light_model_ref: String,
    pub alpha_test_mode: u32,
    pub tex_address_mode: TexAddressMode,
    pub alt_texture_index: u32,
    pub mip_bias: f32,
}

/// A renderable component of one LOD level.
#[derive(Clone, Debug, PartialEq)]
pub struct LodItem {
    name: String,
    material: MaterialBinding,
    polylines: Vec<Polyline>,
    vertex_count: usize,
    segment_count: usize,
}

impl LodItem {
    /// Create an item from at least one polyline.
    pub fn new(
        name: impl Into<String>,
        material: MaterialBinding,
        polylines: Vec<Polyline>,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if polylines.is_empty() {
            return Err(ProfileError::EmptyLodItem(name));
        }
        Ok(Self::assemble(name, material, polylines))
    }

    pub(crate) fn assemble(name: String, material: MaterialBinding, polylines: Vec<Polyline>) -> Self {
        let mut vertex_count = 0;
        let mut segment_count = 0;
        for polyline in &polylines {
            vertex_count += polyline.vertex_count();
            segment_count += polyline.segment_count();
        }
        Self {
            name,
            material,
            polylines,
            vertex_count,
            segment_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &MaterialBinding {
        &self.material
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Vertices in one cross-section: the sum over all polylines.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Segments in one cross-section: each polyline contributes `vertex_count - 1`.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// The base cross-section, in polyline order then vertex order.
    pub fn base_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.polylines.iter().flat_map(|p| p.vertices().iter())
    }
}

/// A distance-gated bundle of [`LodItem`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct LodLevel {
    cutoff_radius: f32,
    items: Vec<LodItem>,
    prim_start: usize,
    prim_stop: usize,
}

impl LodLevel {
    /// Create a level. Its renderable-unit range is assigned when it joins a [`Profile`].
    pub fn new(cutoff_radius: f32, items: Vec<LodItem>) -> Self {
        Self {
            cutoff_radius,
            items,
            prim_start: 0,
            prim_stop: 0,
        }
    }

    /// Farthest distance, in meters, at which this level is drawn.
    pub fn cutoff_radius(&self) -> f32 {
        self.cutoff_radius
    }

    pub fn items(&self) -> &[LodItem] {
        &self.items
    }

    /// Indices of this level's units in the profile's flattened unit list.
    pub fn prim_range(&self) -> Range<usize> {
        self.prim_start..self.prim_stop
    }
}

/// A complete, validated track cross-section profile.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    name: String,
    lod_method: LodMethod,
    chord_span_degrees: f32,
    pitch_control: PitchControl,
    pitch_control_scalar: f32,
    lods: Vec<LodLevel>,
}

impl Profile {
    /// Create a profile from nearest-first LOD levels.
    pub fn new(
        name: impl Into<String>,
        lod_method: LodMethod,
        chord_span_degrees: f32,
        pitch_control: PitchControl,
        pitch_control_scalar: f32,
        lods: Vec<LodLevel>,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if lods.is_empty() {
            return Err(ProfileError::NoLodLevels(name));
        }
        for (index, pair) in lods.windows(2).enumerate() {
            if pair[1].cutoff_radius < pair[0].cutoff_radius {
                return Err(ProfileError::UnorderedCutoffs {
                    index: index + 1,
                    cutoff: pair[1].cutoff_radius,
                    previous: pair[0].cutoff_radius,
                });
            }
        }
        if !(chord_span_degrees > 0.0) {
            return Err(ProfileError::InvalidChordSpan(chord_span_degrees));
        }
        if pitch_control != PitchControl::None && !(pitch_control_scalar > 0.0) {
            return Err(ProfileError::InvalidPitchControlScalar(pitch_control_scalar));
        }
        Ok(Self::assemble(
            name,
            lod_method,
            chord_span_degrees,
            pitch_control,
            pitch_control_scalar,
            lods,
        ))
    }

    pub(crate) fn assemble(
        name: String,
        lod_method: LodMethod,
        chord_span_degrees: f32,
        pitch_control: PitchControl,
        pitch_control_scalar: f32,
        mut lods: Vec<LodLevel>,
    ) -> Self {
        let mut next = 0;
        for lod in &mut lods {
            lod.prim_start = next;
            next += lod.items.len();
            lod.prim_stop = next;
        }
        Self {
            name,
            lod_method,
            chord_span_degrees,
            pitch_control,
            pitch_control_scalar,
            lods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lod_method(&self) -> LodMethod {
        self.lod_method
    }

    /// Target arc angle per curve subdivision, in degrees.
    pub fn chord_span_degrees(&self) -> f32 {
        self.chord_span_degrees
    }

    pub fn pitch_control(&self) -> PitchControl {
        self.pitch_control
    }

    /// Limit, in meters, applied by [`PitchControl::ChordLength`] or
    /// [`PitchControl::ChordDisplacement`].
    pub fn pitch_control_scalar(&self) -> f32 {
        self.pitch_control_scalar
    }

    /// LOD levels, nearest cutoff first.
    pub fn lods(&self) -> &[LodLevel] {
        &self.lods
    }

    /// Every item of every level, in renderable-unit order.
    pub fn items(&self) -> impl Iterator<Item = &LodItem> + '_ {
        self.lods.iter().flat_map(|lod| lod.items.iter())
    }

    /// Total number of renderable units a subsection built from this profile carries.
    pub fn unit_count(&self) -> usize {
        self.lods.last().map_or(0, |lod| lod.prim_stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, 0.0), Vec3::Y, Vec2::new(x, 0.0))
    }

    fn polyline(name: &str, count: usize) -> Polyline {
        let vertices = (0..count).map(|i| vertex(i as f32, 0.0)).collect();
        Polyline::new(name, Vec2::new(0.0, 0.1), vertices).unwrap()
    }

    fn item(name: &str, polylines: Vec<Polyline>) -> LodItem {
        LodItem::new(name, MaterialBinding::default(), polylines).unwrap()
    }

    #[test]
    fn test_lod_method_none_resolves_to_additive() {
        assert_eq!(LodMethod::None.resolved(), LodMethod::ComponentAdditive);
        assert_eq!(
            LodMethod::CompleteReplacement.resolved(),
            LodMethod::CompleteReplacement
        );
    }

    #[test]
    fn test_polyline_requires_two_vertices() {
        let err = Polyline::new("rail", Vec2::X, vec![vertex(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ProfileError::TooFewVertices { count: 1, .. }));
    }

    #[test]
    fn test_polyline_rejects_zero_delta_tex_coord() {
        let err = Polyline::new("rail", Vec2::ZERO, vec![vertex(0.0, 0.0), vertex(1.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, ProfileError::ZeroDeltaTexCoord(_)));
    }

    #[test]
    fn test_polyline_rejects_zero_normal() {
        let mut flat = vertex(1.0, 0.0);
        flat.normal = Vec3::ZERO;
        let err = Polyline::new("rail", Vec2::X, vec![vertex(0.0, 0.0), flat]).unwrap_err();
        assert!(matches!(err, ProfileError::ZeroNormal { index: 1, .. }));
    }

    #[test]
    fn test_item_requires_polyline() {
        let err = LodItem::new("empty", MaterialBinding::default(), Vec::new()).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyLodItem(_)));
    }

    #[test]
    fn test_item_accumulates_counts() {
        let item = item("mixed", vec![polyline("a", 2), polyline("b", 4), polyline("c", 3)]);
        assert_eq!(item.vertex_count(), 9);
        assert_eq!(item.segment_count(), 6);
        assert_eq!(item.base_vertices().count(), 9);
    }

    #[test]
    fn test_profile_requires_lod() {
        let err = Profile::new("p", LodMethod::None, 1.0, PitchControl::None, 0.0, Vec::new())
            .unwrap_err();
        assert!(matches!(err, ProfileError::NoLodLevels(_)));
    }

    #[test]
    fn test_profile_rejects_descending_cutoffs() {
        let lods = vec![
            LodLevel::new(500.0, vec![item("a", vec![polyline("a", 2)])]),
            LodLevel::new(200.0, vec![item("b", vec![polyline("b", 2)])]),
        ];
        let err =
            Profile::new("p", LodMethod::None, 1.0, PitchControl::None, 0.0, lods).unwrap_err();
        assert!(matches!(err, ProfileError::UnorderedCutoffs { index: 1, .. }));
    }

    #[test]
    fn test_profile_rejects_non_positive_chord_span() {
        let lods = vec![LodLevel::new(500.0, vec![item("a", vec![polyline("a", 2)])])];
        let err =
            Profile::new("p", LodMethod::None, 0.0, PitchControl::None, 0.0, lods).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidChordSpan(_)));
    }

    #[test]
    fn test_pitch_control_needs_scalar() {
        let lods = vec![LodLevel::new(500.0, vec![item("a", vec![polyline("a", 2)])])];
        let err = Profile::new("p", LodMethod::None, 1.0, PitchControl::ChordLength, 0.0, lods)
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidPitchControlScalar(_)));
    }

    #[test]
    fn test_prim_ranges_are_contiguous() {
        let lods = vec![
            LodLevel::new(
                100.0,
                vec![item("a", vec![polyline("a", 2)]), item("b", vec![polyline("b", 2)])],
            ),
            LodLevel::new(200.0, vec![item("c", vec![polyline("c", 2)])]),
            LodLevel::new(300.0, vec![item("d", vec![polyline("d", 2)])]),
        ];
        let profile =
            Profile::new("p", LodMethod::None, 1.0, PitchControl::None, 0.0, lods).unwrap();
        let ranges: Vec<_> = profile.lods().iter().map(LodLevel::prim_range).collect();
        assert_eq!(ranges, vec![0..2, 2..3, 3..4]);
        assert_eq!(profile.unit_count(), 4);
        let names: Vec<_> = profile.items().map(LodItem::name).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }
}
