//! Scripted camera path over a decomposed route.

use dyntrack_config::ViewConfig;
use dyntrack_lod::TrackCamera;
use dyntrack_math::WorldPose;
use dyntrack_mesh::Subsection;
use glam::Vec3;

/// Eye height of the cab view above the rail head.
const CAB_HEIGHT: f32 = 3.5;

/// Heights of the closing overview shots, chosen to step through the default LOD cutoffs.
const OVERVIEW_HEIGHTS: [f32; 4] = [50.0, 600.0, 1600.0, 3000.0];

fn camera_at(pose: WorldPose, lift: Vec3, forward: Vec3, view: &ViewConfig) -> TrackCamera {
    let pose = WorldPose::new(pose.tile, pose.translation + lift, pose.orientation).normalized();
    TrackCamera::look_to(
        pose.tile,
        pose.translation,
        forward,
        view.fov_y_degrees.to_radians(),
        view.aspect_ratio,
        view.near,
        view.far,
    )
}

/// A cab view at the start of every subsection, then a climb away from the first one.
pub fn camera_path(subsections: &[Subsection], view: &ViewConfig) -> Vec<TrackCamera> {
    let mut cameras: Vec<TrackCamera> = subsections
        .iter()
        .map(|s| camera_at(s.start, Vec3::Y * CAB_HEIGHT, s.start.forward(), view))
        .collect();

    if let Some(first) = subsections.first() {
        let forward = first.start.forward();
        let look_down = (forward - Vec3::Y).normalize();
        cameras.extend(OVERVIEW_HEIGHTS.iter().map(|&height| {
            let lift = Vec3::Y * height - forward * height;
            camera_at(first.start, lift, look_down, view)
        }));
    }
    cameras
}
