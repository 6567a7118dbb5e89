//! Built-in standard-gauge profile used when a route ships none, or ships a broken one.

use glam::{Vec2, Vec3};

use crate::model::{
    LodItem, LodLevel, LodMethod, MaterialBinding, PitchControl, Polyline, Profile,
    TexAddressMode, Vertex,
};

const RAIL_TEXTURE: &str = "DB_Rails10.ace";
const BALLAST_TEXTURE: &str = "acleantrack1.ace";

/// Rail head half-widths (inner and outer face), in meters from the track center line.
const RAIL_INNER: f32 = 0.7175;
const RAIL_OUTER: f32 = 0.8675;
/// Rail foot and head heights above the formation.
const RAIL_FOOT: f32 = 0.200;
const RAIL_HEAD: f32 = 0.325;
/// Ballast shoulder half-width.
const BALLAST_HALF_WIDTH: f32 = 2.5;

fn vertex(x: f32, y: f32, normal: Vec3, u: f32, v: f32) -> Vertex {
    Vertex::new(Vec3::new(x, y, 0.0), normal, Vec2::new(u, v))
}

fn polyline(name: &str, delta_tex_coord: Vec2, vertices: [Vertex; 2]) -> Polyline {
    Polyline::assemble(name.to_string(), delta_tex_coord, vertices.to_vec())
}

fn material(texture: &str, shader: &str, light_model: &str) -> MaterialBinding {
    MaterialBinding {
        texture_ref: texture.to_string(),
        shader_ref: shader.to_string(),
        light_model_ref: light_model.to_string(),
        alpha_test_mode: 0,
        tex_address_mode: TexAddressMode::Wrap,
        alt_texture_index: 0,
        mip_bias: 0.0,
    }
}

fn railsides() -> LodLevel {
    let delta = Vec2::new(0.167_337_2, 0.0);
    let (u, v_foot, v_head) = (0.232_067, 0.126_953, 0.224_609);
    let polylines = vec![
        polyline(
            "left_outer",
            delta,
            [
                vertex(-RAIL_OUTER, RAIL_FOOT, Vec3::NEG_X, u, v_foot),
                vertex(-RAIL_OUTER, RAIL_HEAD, Vec3::NEG_X, u, v_head),
            ],
        ),
        polyline(
            "left_inner",
            delta,
            [
                vertex(-RAIL_INNER, RAIL_HEAD, Vec3::X, u, v_foot),
                vertex(-RAIL_INNER, RAIL_FOOT, Vec3::X, u, v_head),
            ],
        ),
        polyline(
            "right_inner",
            delta,
            [
                vertex(RAIL_INNER, RAIL_FOOT, Vec3::NEG_X, u, v_foot),
                vertex(RAIL_INNER, RAIL_HEAD, Vec3::NEG_X, u, v_head),
            ],
        ),
        polyline(
            "right_outer",
            delta,
            [
                vertex(RAIL_OUTER, RAIL_HEAD, Vec3::X, u, v_foot),
                vertex(RAIL_OUTER, RAIL_FOOT, Vec3::X, u, v_head),
            ],
        ),
    ];
    let item = LodItem::assemble(
        "Railsides".to_string(),
        material(RAIL_TEXTURE, "TexDiff", "OptSpecular0"),
        polylines,
    );
    LodLevel::new(700.0, vec![item])
}

fn railtops() -> LodLevel {
    let delta = Vec2::new(0.074_472_6, 0.0);
    let (u, v_inner, v_outer) = (0.232_067, 0.351_563, 0.388_672);
    let polylines = vec![
        polyline(
            "left",
            delta,
            [
                vertex(-RAIL_OUTER, RAIL_HEAD, Vec3::Y, u, v_outer),
                vertex(-RAIL_INNER, RAIL_HEAD, Vec3::Y, u, v_inner),
            ],
        ),
        polyline(
            "right",
            delta,
            [
                vertex(RAIL_INNER, RAIL_HEAD, Vec3::Y, u, v_inner),
                vertex(RAIL_OUTER, RAIL_HEAD, Vec3::Y, u, v_outer),
            ],
        ),
    ];
    let item = LodItem::assemble(
        "Railtops".to_string(),
        material(RAIL_TEXTURE, "TexDiff", "OptSpecular25"),
        polylines,
    );
    LodLevel::new(1200.0, vec![item])
}

fn ballast() -> LodLevel {
    let polylines = vec![polyline(
        "ballast",
        Vec2::new(0.0, 0.208_854_5),
        [
            vertex(-BALLAST_HALF_WIDTH, RAIL_FOOT, Vec3::Y, -0.153_916, -0.280_582),
            vertex(BALLAST_HALF_WIDTH, RAIL_FOOT, Vec3::Y, 0.862_105, -0.280_582),
        ],
    )];
    let item = LodItem::assemble(
        "Ballast".to_string(),
        material(BALLAST_TEXTURE, "BlendATexDiff", "OptSpecular0"),
        polylines,
    );
    LodLevel::new(2000.0, vec![item])
}

impl Profile {
    /// The built-in profile: rail sides out to 700 m, rail tops to 1200 m and ballast to
    /// 2000 m, combined additively, curves subdivided every degree with chords capped at
    /// 10 m.
    pub fn default_profile() -> Profile {
        Profile::assemble(
            "Default track profile".to_string(),
            LodMethod::ComponentAdditive,
            1.0,
            PitchControl::ChordLength,
            10.0,
            vec![railsides(), railtops(), ballast()],
        )
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::default_profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_levels() {
        let profile = Profile::default_profile();
        let cutoffs: Vec<f32> = profile.lods().iter().map(LodLevel::cutoff_radius).collect();
        assert_eq!(cutoffs, vec![700.0, 1200.0, 2000.0]);
        let item_counts: Vec<usize> = profile.lods().iter().map(|l| l.items().len()).collect();
        assert_eq!(item_counts, vec![1, 1, 1]);
        let polyline_counts: Vec<usize> = profile
            .lods()
            .iter()
            .map(|l| l.items()[0].polylines().len())
            .collect();
        assert_eq!(polyline_counts, vec![4, 2, 1]);
    }

    #[test]
    fn test_default_profile_policy() {
        let profile = Profile::default();
        assert_eq!(profile.lod_method(), LodMethod::ComponentAdditive);
        assert_eq!(profile.pitch_control(), PitchControl::ChordLength);
        assert_eq!(profile.pitch_control_scalar(), 10.0);
        assert_eq!(profile.chord_span_degrees(), 1.0);
    }

    #[test]
    fn test_default_profile_passes_validation() {
        let profile = Profile::default_profile();
        let rebuilt = Profile::new(
            profile.name(),
            profile.lod_method(),
            profile.chord_span_degrees(),
            profile.pitch_control(),
            profile.pitch_control_scalar(),
            profile.lods().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, profile);
        for item in profile.items() {
            for polyline in item.polylines() {
                let checked = Polyline::new(
                    polyline.name(),
                    polyline.delta_tex_coord(),
                    polyline.vertices().to_vec(),
                );
                assert!(checked.is_ok(), "{} failed validation", polyline.name());
            }
        }
    }

    #[test]
    fn test_default_item_counts() {
        let profile = Profile::default_profile();
        let counts: Vec<(usize, usize)> = profile
            .items()
            .map(|i| (i.vertex_count(), i.segment_count()))
            .collect();
        assert_eq!(counts, vec![(8, 4), (4, 2), (2, 1)]);
    }
}
