//! Route documents: where a placement starts and the sections laid from there.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use dyntrack_math::WorldPose;
use dyntrack_mesh::TrackSectionSpec;
use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(default)]
    pub origin: Origin,
    pub sections: Vec<TrackSectionSpec>,
}

/// Start of the placement: tile index, translation within the tile, heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub tile: (i32, i32),
    pub translation: (f32, f32, f32),
    /// Rotation about +Y away from the default heading, in degrees.
    pub yaw_degrees: f32,
}

impl Origin {
    pub fn pose(&self) -> WorldPose {
        let (x, y, z) = self.translation;
        WorldPose::from_yaw(
            IVec2::new(self.tile.0, self.tile.1),
            Vec3::new(x, y, z),
            self.yaw_degrees.to_radians(),
        )
    }
}

impl RouteDocument {
    pub fn from_ron_str(source: &str) -> Result<Self, DemoError> {
        ron::from_str(source).map_err(DemoError::ParseRoute)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DemoError::ReadRoute {
            path: path.to_path_buf(),
            source,
        })?;
        let route = Self::from_ron_str(&contents)?;
        tracing::info!(
            "Loaded route with {} sections from {}",
            route.sections.len(),
            path.display()
        );
        Ok(route)
    }

    /// Rounded-rectangle loop with a short grade, starting at the world origin.
    pub fn sample_loop() -> Self {
        let corner = TrackSectionSpec::curve(FRAC_PI_2, 300.0);
        Self {
            origin: Origin::default(),
            sections: vec![
                TrackSectionSpec::straight(400.0).with_delta_y(4.0),
                corner,
                TrackSectionSpec::straight(150.0),
                corner,
                TrackSectionSpec::straight(400.0).with_delta_y(-4.0),
                corner,
                TrackSectionSpec::straight(150.0),
                corner,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyntrack_mesh::decompose;

    #[test]
    fn test_sample_loop_closes() {
        let route = RouteDocument::sample_loop();
        let subsections = decompose(&route.sections, route.origin.pose());
        let last = subsections.last().unwrap().end;
        let origin = route.origin.pose();
        assert!(last.translation.abs_diff_eq(origin.translation, 1e-2));
        assert!(last.forward().abs_diff_eq(origin.forward(), 1e-5));
    }

    #[test]
    fn test_bundled_route_parses() {
        let route = RouteDocument::from_ron_str(include_str!("../routes/sample_loop.ron")).unwrap();
        assert_eq!(route.sections.len(), 8);
        assert_eq!(route.origin.tile, (-3, 12));
        assert_eq!(route.sections.iter().filter(|s| s.is_curved()).count(), 4);
    }

    #[test]
    fn test_origin_defaults() {
        let route =
            RouteDocument::from_ron_str("(sections: [(shape: Straight(length: 10.0))])").unwrap();
        assert_eq!(route.origin.pose(), WorldPose::default());
    }

    #[test]
    fn test_origin_yaw() {
        let origin = Origin {
            yaw_degrees: 90.0,
            ..Default::default()
        };
        assert!(origin.pose().forward().abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RouteDocument::load(&dir.path().join("none.ron")).unwrap_err();
        assert!(matches!(err, DemoError::ReadRoute { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.ron");
        std::fs::write(&path, include_str!("../routes/sample_loop.ron")).unwrap();
        assert_eq!(RouteDocument::load(&path).unwrap().sections.len(), 8);
    }
}
