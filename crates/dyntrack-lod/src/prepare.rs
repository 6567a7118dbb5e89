//! Frame preparation: turn built subsection meshes into this frame's draw items.

use dyntrack_mesh::SubsectionMesh;
use dyntrack_profile::Profile;

use crate::camera::CameraView;
use crate::draw_list::{DrawItem, DrawList};
use crate::selector::TrackLodSelector;

/// Append the units of every visible, in-range subsection in `meshes` to `draw_list`.
///
/// Reads `profile` and `meshes` only. Returns the number of items appended.
pub fn prepare_frame(
    meshes: &[SubsectionMesh],
    profile: &Profile,
    camera: &impl CameraView,
    selector: &TrackLodSelector,
    draw_list: &mut DrawList,
) -> usize {
    let tile = camera.tile();
    let before = draw_list.len();

    for (index, mesh) in meshes.iter().enumerate() {
        let center = mesh.subsection.midpoint_relative_to(tile);
        if !camera.in_fov(center, mesh.bounding_radius) {
            continue;
        }
        let distance = camera.position().distance(center);
        let Some(units) = selector.select_units(profile, distance, mesh.bounding_radius) else {
            continue;
        };
        let transform = mesh.subsection.start.transform_relative_to(tile);
        for unit in units {
            draw_list.push(DrawItem {
                subsection: index,
                unit,
                transform,
            });
        }
    }

    let appended = draw_list.len() - before;
    log::trace!("Prepared {appended} track draw items from {} subsections", meshes.len());
    appended
}
