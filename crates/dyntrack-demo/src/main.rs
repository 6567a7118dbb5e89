//! Builds every mesh of a track placement and runs a scripted camera pass over it,
//! logging what each frame would submit.

mod error;
mod flight;
mod route;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dyntrack_config::{CliArgs, Config, default_config_dir};
use dyntrack_lod::{CameraView, DrawList, TrackLodSelector, prepare_frame};
use dyntrack_mesh::{SubsectionMesh, build_subsection_mesh, decompose};
use dyntrack_profile::Profile;
use tracing::{error, info};

use crate::error::DemoError;
use crate::route::RouteDocument;

fn load_profile(config: &Config) -> Profile {
    match &config.route.profile_path {
        Some(path) => Profile::load_or_default(path),
        None => {
            info!("No track profile configured, using the built-in profile");
            Profile::default_profile()
        }
    }
}

fn load_route(config: &Config) -> Result<RouteDocument, DemoError> {
    match &config.route.route_path {
        Some(path) => RouteDocument::load(path),
        None => {
            info!("No route configured, laying the sample loop");
            Ok(RouteDocument::sample_loop())
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let profile = load_profile(config);
    let route = load_route(config)?;

    let subsections = decompose(&route.sections, route.origin.pose());
    let meshes = subsections
        .iter()
        .map(|subsection| build_subsection_mesh(subsection, &profile))
        .collect::<Result<Vec<SubsectionMesh>, _>>()?;

    let vertices: usize = meshes.iter().map(SubsectionMesh::vertex_count).sum();
    let indices: usize = meshes.iter().map(SubsectionMesh::index_count).sum();
    let real_run: f32 = subsections.iter().map(|s| s.real_run).sum();
    info!(
        "Built {} subsections ({real_run:.1} m of track) with {} units each: {vertices} vertices, {indices} indices",
        meshes.len(),
        profile.unit_count()
    );

    let selector = TrackLodSelector::new(config.view.viewing_distance);
    let mut draw_list = DrawList::with_capacity(meshes.len() * profile.unit_count());
    for (frame, camera) in flight::camera_path(&subsections, &config.view)
        .iter()
        .enumerate()
    {
        draw_list.clear();
        let submitted = prepare_frame(&meshes, &profile, camera, &selector, &mut draw_list);
        draw_list.sort();
        info!(
            frame,
            tile = %camera.tile(),
            position = %camera.position(),
            submitted,
            "Prepared track frame"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config.log_dir(&config_dir);
    dyntrack_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
