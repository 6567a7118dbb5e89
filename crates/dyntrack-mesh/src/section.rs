//! Decomposition of a multi-section track placement into single-run subsections.
//!
//! A placement is an ordered list of [`TrackSectionSpec`]s laid end to end from an initial
//! [`WorldPose`]. The decomposer walks the list once, carrying the heading and the offset
//! from the placement origin, and emits one [`Subsection`] per non-degenerate spec with its
//! start and end poses.

use dyntrack_math::{WorldPose, arc_center_offset, turn_rotation};
use glam::{IVec2, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Shape of a single run of track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SectionShape {
    /// Straight run of `length` meters.
    Straight { length: f32 },
    /// Circular arc of signed `angle` radians (positive turns right) and `radius` meters.
    Curve { angle: f32, radius: f32 },
}

/// Geometry of one track section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackSectionSpec {
    pub shape: SectionShape,
    /// Total elevation change over the section, in meters.
    #[serde(default)]
    pub delta_y: f32,
}

impl TrackSectionSpec {
    pub fn straight(length: f32) -> Self {
        Self {
            shape: SectionShape::Straight { length },
            delta_y: 0.0,
        }
    }

    pub fn curve(angle: f32, radius: f32) -> Self {
        Self {
            shape: SectionShape::Curve { angle, radius },
            delta_y: 0.0,
        }
    }

    pub fn with_delta_y(mut self, delta_y: f32) -> Self {
        self.delta_y = delta_y;
        self
    }

    pub fn is_curved(&self) -> bool {
        matches!(self.shape, SectionShape::Curve { .. })
    }

    /// Length in meters for straights, signed angle in radians for curves.
    pub fn length_or_angle(&self) -> f32 {
        match self.shape {
            SectionShape::Straight { length } => length,
            SectionShape::Curve { angle, .. } => angle,
        }
    }

    /// Distance run along the track center line.
    pub fn real_run(&self) -> f32 {
        match self.shape {
            SectionShape::Straight { length } => length,
            SectionShape::Curve { angle, radius } => radius * angle.abs(),
        }
    }
}

/// One straight-or-curved run of track bounded by its start and end poses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subsection {
    pub spec: TrackSectionSpec,
    pub start: WorldPose,
    pub end: WorldPose,
    /// Center-line length in meters.
    pub real_run: f32,
}

impl Subsection {
    /// Midpoint of the start and end positions, relative to `tile`.
    pub fn midpoint_relative_to(&self, tile: IVec2) -> Vec3 {
        (self.start.translation_relative_to(tile) + self.end.translation_relative_to(tile)) * 0.5
    }
}

/// Running state of a decomposition.
///
/// Positions are accumulated as an offset from the placement origin so every emitted pose
/// is `origin + offset`, rather than chaining translations through each end pose.
#[derive(Clone, Debug)]
pub struct SectionDecomposer {
    tile: IVec2,
    origin: Vec3,
    local_offset: Vec3,
    heading: Vec3,
    orientation: Quat,
}

impl SectionDecomposer {
    /// Start a placement at `pose`.
    pub fn new(pose: WorldPose) -> Self {
        Self {
            tile: pose.tile,
            origin: pose.translation,
            local_offset: Vec3::ZERO,
            heading: pose.forward(),
            orientation: pose.orientation,
        }
    }

    /// Current travel direction.
    pub fn heading(&self) -> Vec3 {
        self.heading
    }

    /// Offset of the next subsection start from the placement origin.
    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    /// Pose the next subsection will start from.
    pub fn next_root(&self) -> WorldPose {
        WorldPose::new(self.tile, self.origin + self.local_offset, self.orientation)
    }

    /// Lay `spec` after the previous section.
    ///
    /// Returns `None`, leaving the state untouched, when the spec has zero length or angle.
    pub fn push(&mut self, spec: TrackSectionSpec) -> Option<Subsection> {
        if spec.length_or_angle() == 0.0 {
            return None;
        }

        let start = self.next_root();
        let (displacement, rotation) = match spec.shape {
            SectionShape::Straight { length } => (self.heading * length, Quat::IDENTITY),
            SectionShape::Curve { angle, radius } => {
                let to_center = arc_center_offset(self.heading, radius, angle);
                let rotation = turn_rotation(angle);
                (to_center + rotation * -to_center, rotation)
            }
        };
        let displacement = displacement + Vec3::Y * spec.delta_y;

        self.local_offset += displacement;
        self.heading = (rotation * self.heading).normalize();
        self.orientation = (rotation * self.orientation).normalize();

        Some(Subsection {
            spec,
            start,
            end: self.next_root(),
            real_run: spec.real_run(),
        })
    }
}

/// Decompose `specs`, laid end to end from `pose`, into subsections.
///
/// Zero-length specs are dropped without affecting the ones that follow.
pub fn decompose(specs: &[TrackSectionSpec], pose: WorldPose) -> Vec<Subsection> {
    let mut decomposer = SectionDecomposer::new(pose);
    specs.iter().filter_map(|&spec| decomposer.push(spec)).collect()
}
