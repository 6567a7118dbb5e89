//! Cutoff-radius LOD selection under a profile's LOD method.

use std::ops::Range;

use dyntrack_profile::{LodMethod, Profile};

/// Chooses which of a profile's renderable units to draw for one subsection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackLodSelector {
    /// Optional global cap applied to every level's cutoff radius.
    viewing_distance: Option<f32>,
}

impl TrackLodSelector {
    pub fn new(viewing_distance: Option<f32>) -> Self {
        Self { viewing_distance }
    }

    pub fn viewing_distance(&self) -> Option<f32> {
        self.viewing_distance
    }

    /// Effective cutoff of a level after applying the viewing-distance cap.
    fn cutoff(&self, cutoff_radius: f32) -> f32 {
        match self.viewing_distance {
            Some(limit) => cutoff_radius.min(limit),
            None => cutoff_radius,
        }
    }

    /// Index of the nearest level in range for a bounding sphere whose center lies
    /// `distance` meters from the camera.
    ///
    /// A level is in range while the camera is within its cutoff of the sphere's surface.
    pub fn select_level(&self, profile: &Profile, distance: f32, radius: f32) -> Option<usize> {
        debug_assert!(distance >= 0.0, "distance must be non-negative");
        profile
            .lods()
            .iter()
            .position(|lod| distance <= self.cutoff(lod.cutoff_radius()) + radius)
    }

    /// Renderable units to draw, as a range into the subsection's unit list.
    ///
    /// `CompleteReplacement` draws only the selected level; `ComponentAdditive` (and `None`)
    /// also draws every farther level. Returns `None` when no level is in range.
    pub fn select_units(
        &self,
        profile: &Profile,
        distance: f32,
        radius: f32,
    ) -> Option<Range<usize>> {
        let index = self.select_level(profile, distance, radius)?;
        let selected = profile.lods()[index].prim_range();
        match profile.lod_method().resolved() {
            LodMethod::CompleteReplacement => Some(selected),
            _ => Some(selected.start..profile.unit_count()),
        }
    }
}
