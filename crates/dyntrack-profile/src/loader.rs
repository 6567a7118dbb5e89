//! Reading profiles from RON and JSON documents, with fallback to the built-in profile.

use std::path::Path;

use crate::document::ProfileDocument;
use crate::error::ProfileError;
use crate::model::Profile;

impl Profile {
    /// Parse and validate a RON profile document.
    pub fn from_ron_str(source: &str) -> Result<Self, ProfileError> {
        let doc: ProfileDocument = ron::from_str(source).map_err(ProfileError::ParseRon)?;
        Profile::try_from(doc)
    }

    /// Parse and validate a JSON profile document.
    pub fn from_json_str(source: &str) -> Result<Self, ProfileError> {
        let doc: ProfileDocument =
            serde_json::from_str(source).map_err(ProfileError::ParseJson)?;
        Profile::try_from(doc)
    }

    /// Load a profile, choosing the format from the file extension (`.ron` or `.json`).
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Profile, ProfileError> = match extension.as_deref() {
            Some("ron") => Profile::from_ron_str,
            Some("json") => Profile::from_json_str,
            _ => return Err(ProfileError::UnsupportedFormat(path.to_path_buf())),
        };
        let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = parse(&contents)?;
        log::info!(
            "Loaded track profile {:?} ({} LOD levels) from {}",
            profile.name(),
            profile.lods().len(),
            path.display()
        );
        Ok(profile)
    }

    /// Load a profile, substituting [`Profile::default_profile`] if anything goes wrong.
    pub fn load_or_default(path: &Path) -> Self {
        match Profile::load(path) {
            Ok(profile) => profile,
            Err(err) => {
                log::warn!("Using default track profile: {err}");
                Profile::default_profile()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LodMethod, PitchControl, TexAddressMode};

    const SINGLE_RAIL: &str = r#"
// One rail top, swapped out wholesale past 500 m.
(
    Name: "Single rail",
    LODMethod: CompleteReplacement,
    ChordSpan: 2.0,
    PitchControl: ChordDisplacement,
    PitchControlScalar: 0.05,
    LOD: [
        (
            CutoffRadius: 500.0,
            LODItem: [
                (
                    Name: "Rail",
                    TextureRef: "rail.ace",
                    ShaderRef: "TexDiff",
                    TexAddressMode: Clamp,
                    Polyline: [
                        (
                            Name: "top",
                            DeltaTexCoord: (0.1, 0.0),
                            Vertex: [
                                (Position: (-0.1, 0.3, 0.0), Normal: (0.0, 1.0, 0.0), TexCoord: (0.0, 0.0)),
                                (Position: (0.0, 0.31, 0.0), Normal: (0.0, 1.0, 0.0), TexCoord: (0.5, 0.0)),
                                (Position: (0.1, 0.3, 0.0), Normal: (0.0, 1.0, 0.0), TexCoord: (1.0, 0.0)),
                            ],
                        ),
                    ],
                ),
            ],
        ),
    ],
)
"#;

    #[test]
    fn test_ron_profile_parses() {
        let profile = Profile::from_ron_str(SINGLE_RAIL).unwrap();
        assert_eq!(profile.name(), "Single rail");
        assert_eq!(profile.lod_method(), LodMethod::CompleteReplacement);
        assert_eq!(profile.pitch_control(), PitchControl::ChordDisplacement);
        assert_eq!(profile.chord_span_degrees(), 2.0);
        let item = &profile.lods()[0].items()[0];
        assert_eq!(item.material().texture_ref, "rail.ace");
        assert_eq!(item.material().tex_address_mode, TexAddressMode::Clamp);
        assert_eq!(item.material().light_model_ref, "");
        assert_eq!(item.vertex_count(), 3);
        assert_eq!(item.segment_count(), 2);
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let source = r#"(
            Name: "Minimal",
            LOD: [(CutoffRadius: 100.0, LODItem: [(Name: "a", Polyline: [(
                Name: "p",
                DeltaTexCoord: (0.0, 1.0),
                Vertex: [
                    (Position: (0.0, 0.0, 0.0), Normal: (0.0, 1.0, 0.0), TexCoord: (0.0, 0.0)),
                    (Position: (1.0, 0.0, 0.0), Normal: (0.0, 1.0, 0.0), TexCoord: (1.0, 0.0)),
                ],
            )])])],
        )"#;
        let profile = Profile::from_ron_str(source).unwrap();
        assert_eq!(profile.lod_method(), LodMethod::None);
        assert_eq!(profile.pitch_control(), PitchControl::None);
        assert_eq!(profile.chord_span_degrees(), 1.0);
    }

    #[test]
    fn test_json_matches_default_profile() {
        let default = Profile::default_profile();
        let json = serde_json::to_string(&ProfileDocument::from(&default)).unwrap();
        let parsed = Profile::from_json_str(&json).unwrap();
        assert_eq!(parsed, default);
    }

    #[test]
    fn test_invalid_polyline_is_rejected() {
        let broken = SINGLE_RAIL.replace("DeltaTexCoord: (0.1, 0.0)", "DeltaTexCoord: (0.0, 0.0)");
        let err = Profile::from_ron_str(&broken).unwrap_err();
        assert!(matches!(err, ProfileError::ZeroDeltaTexCoord(_)));
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = Profile::from_ron_str("(Name: \"x\", LOD: [").unwrap_err();
        assert!(matches!(err, ProfileError::ParseRon(_)));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let ron_path = dir.path().join("rail.ron");
        std::fs::write(&ron_path, SINGLE_RAIL).unwrap();
        assert_eq!(Profile::load(&ron_path).unwrap().name(), "Single rail");

        let json_path = dir.path().join("default.JSON");
        let json = serde_json::to_string_pretty(&ProfileDocument::from(&Profile::default())).unwrap();
        std::fs::write(&json_path, json).unwrap();
        assert_eq!(Profile::load(&json_path).unwrap(), Profile::default());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.stf");
        std::fs::write(&path, SINGLE_RAIL).unwrap();
        assert!(matches!(
            Profile::load(&path),
            Err(ProfileError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ron");
        assert!(matches!(Profile::load(&path), Err(ProfileError::Read { .. })));
        assert_eq!(Profile::load_or_default(&path), Profile::default_profile());
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ron");
        std::fs::write(&path, "(Name: \"Empty\", LOD: [])").unwrap();
        assert!(matches!(Profile::load(&path), Err(ProfileError::NoLodLevels(_))));
        assert_eq!(Profile::load_or_default(&path), Profile::default_profile());
    }
}
