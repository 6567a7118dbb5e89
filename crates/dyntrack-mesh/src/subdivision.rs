//! How many cross-section steps a subsection is swept in.
//!
//! Straights are swept in one step. Curves start from one step per profile chord span
//! and are refined when the profile's pitch control finds the per-step chord (or its
//! sagitta) longer than the configured limit.

use dyntrack_math::{chord_length, sagitta};
use dyntrack_profile::{PitchControl, Profile};

use crate::section::{SectionShape, TrackSectionSpec};

/// Step count and per-step increments for sweeping one subsection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subdivision {
    /// Number of steps `N`; the sweep produces `N + 1` cross-sections.
    pub count: u32,
    /// Length (straight, meters) or signed angle (curve, radians) of one step.
    pub step: f32,
    /// Elevation change per step.
    pub rise: f32,
}

/// Subdivide `spec` under `profile`'s chord span and pitch-control policy.
///
/// `spec` must already be validated: curves need a positive radius.
pub fn subdivide(spec: &TrackSectionSpec, profile: &Profile) -> Subdivision {
    let count = match spec.shape {
        SectionShape::Straight { .. } => 1,
        SectionShape::Curve { angle, radius } => curve_steps(angle.abs(), radius, profile),
    };
    Subdivision {
        count,
        step: spec.length_or_angle() / count as f32,
        rise: spec.delta_y / count as f32,
    }
}

fn curve_steps(angle: f32, radius: f32, profile: &Profile) -> u32 {
    let base = ((angle.to_degrees() / profile.chord_span_degrees()).round() as u32).max(1);
    let limit = profile.pitch_control_scalar();
    let base_step = angle / base as f32;

    let chord_angle = match profile.pitch_control() {
        PitchControl::None => return base,
        PitchControl::ChordLength => {
            if chord_length(radius, base_step) <= limit {
                return base;
            }
            2.0 * (0.5 * limit / radius).clamp(-1.0, 1.0).asin()
        }
        PitchControl::ChordDisplacement => {
            if sagitta(radius, base_step) <= limit {
                return base;
            }
            2.0 * (1.0 - limit / radius).clamp(-1.0, 1.0).acos()
        }
    };
    ((angle / chord_angle).floor() as u32).max(1)
}
