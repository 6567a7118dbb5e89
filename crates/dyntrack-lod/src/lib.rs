//! Per-frame level-of-detail selection for dynamic track: frustum rejection, cutoff-radius
//! level choice under the profile's LOD method, and camera-relative draw submission.

mod camera;
mod draw_list;
mod frustum;
mod prepare;
mod selector;

pub use camera::{CameraView, TrackCamera};
pub use draw_list::{DrawItem, DrawList};
pub use frustum::Frustum;
pub use prepare::prepare_frame;
pub use selector::TrackLodSelector;
