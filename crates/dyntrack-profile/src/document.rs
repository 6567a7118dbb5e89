//! Serde mirror of the authored profile schema.
//!
//! Field names follow the authoring convention (`Name`, `LODMethod`, `ChordSpan`, ...),
//! so the same documents read from RON and JSON. Documents are unchecked; converting one
//! into a [`Profile`] runs every validation rule.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::model::{
    LodItem, LodLevel, LodMethod, MaterialBinding, PitchControl, Polyline, Profile,
    TexAddressMode, Vertex,
};

fn default_chord_span() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileDocument {
    pub name: String,
    #[serde(rename = "LODMethod", default)]
    pub lod_method: LodMethod,
    /// Degrees.
    #[serde(default = "default_chord_span")]
    pub chord_span: f32,
    #[serde(default)]
    pub pitch_control: PitchControl,
    /// Meters.
    #[serde(default)]
    pub pitch_control_scalar: f32,
    #[serde(rename = "LOD")]
    pub lods: Vec<LodDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LodDocument {
    pub cutoff_radius: f32,
    #[serde(rename = "LODItem")]
    pub items: Vec<LodItemDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LodItemDocument {
    pub name: String,
    #[serde(default)]
    pub texture_ref: String,
    #[serde(default)]
    pub shader_ref: String,
    #[serde(default)]
    pub light_model_ref: String,
    #[serde(default)]
    pub alpha_test_mode: u32,
    #[serde(default)]
    pub tex_address_mode: TexAddressMode,
    #[serde(default)]
    pub alt_texture_index: u32,
    #[serde(default)]
    pub mip_bias: f32,
    #[serde(rename = "Polyline")]
    pub polylines: Vec<PolylineDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolylineDocument {
    pub name: String,
    pub delta_tex_coord: [f32; 2],
    #[serde(rename = "Vertex")]
    pub vertices: Vec<VertexDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VertexDocument {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl From<VertexDocument> for Vertex {
    fn from(doc: VertexDocument) -> Self {
        Vertex::new(
            Vec3::from_array(doc.position),
            Vec3::from_array(doc.normal),
            Vec2::from_array(doc.tex_coord),
        )
    }
}

impl TryFrom<PolylineDocument> for Polyline {
    type Error = ProfileError;

    fn try_from(doc: PolylineDocument) -> Result<Self, Self::Error> {
        let vertices = doc.vertices.into_iter().map(Vertex::from).collect();
        Polyline::new(doc.name, Vec2::from_array(doc.delta_tex_coord), vertices)
    }
}

impl TryFrom<LodItemDocument> for LodItem {
    type Error = ProfileError;

    fn try_from(doc: LodItemDocument) -> Result<Self, Self::Error> {
        let material = MaterialBinding {
            texture_ref: doc.texture_ref,
            shader_ref: doc.shader_ref,
            light_model_ref: doc.light_model_ref,
            alpha_test_mode: doc.alpha_test_mode,
            tex_address_mode: doc.tex_address_mode,
            alt_texture_index: doc.alt_texture_index,
            mip_bias: doc.mip_bias,
        };
        let polylines = doc
            .polylines
            .into_iter()
            .map(Polyline::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        LodItem::new(doc.name, material, polylines)
    }
}

impl TryFrom<LodDocument> for LodLevel {
    type Error = ProfileError;

    fn try_from(doc: LodDocument) -> Result<Self, Self::Error> {
        let items = doc
            .items
            .into_iter()
            .map(LodItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LodLevel::new(doc.cutoff_radius, items))
    }
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = ProfileError;

    fn try_from(doc: ProfileDocument) -> Result<Self, Self::Error> {
        let lods = doc
            .lods
            .into_iter()
            .map(LodLevel::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Profile::new(
            doc.name,
            doc.lod_method,
            doc.chord_span,
            doc.pitch_control,
            doc.pitch_control_scalar,
            lods,
        )
    }
}

impl From<&Profile> for ProfileDocument {
    fn from(profile: &Profile) -> Self {
        let lods = profile
            .lods()
            .iter()
            .map(|lod| LodDocument {
                cutoff_radius: lod.cutoff_radius(),
                items: lod.items().iter().map(LodItemDocument::from).collect(),
            })
            .collect();
        Self {
            name: profile.name().to_string(),
            lod_method: profile.lod_method(),
            chord_span: profile.chord_span_degrees(),
            pitch_control: profile.pitch_control(),
            pitch_control_scalar: profile.pitch_control_scalar(),
            lods,
        }
    }
}

impl From<&LodItem> for LodItemDocument {
    fn from(item: &LodItem) -> Self {
        let material = item.material();
        let polylines = item
            .polylines()
            .iter()
            .map(|polyline| PolylineDocument {
                name: polyline.name().to_string(),
                delta_tex_coord: polyline.delta_tex_coord().to_array(),
                vertices: polyline
                    .vertices()
                    .iter()
                    .map(|v| VertexDocument {
                        position: v.position.to_array(),
                        normal: v.normal.to_array(),
                        tex_coord: v.tex_coord.to_array(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            name: item.name().to_string(),
            texture_ref: material.texture_ref.clone(),
            shader_ref: material.shader_ref.clone(),
            light_model_ref: material.light_model_ref.clone(),
            alpha_test_mode: material.alpha_test_mode,
            tex_address_mode: material.tex_address_mode,
            alt_texture_index: material.alt_texture_index,
            mip_bias: material.mip_bias,
            polylines,
        }
    }
}
