use std::path::PathBuf;

use dyntrack_mesh::GeometryError;

/// Failures that stop the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("failed to read route {}: {source}", path.display())]
    ReadRoute {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse route: {0}")]
    ParseRoute(#[source] ron::error::SpannedError),

    #[error("track geometry: {0}")]
    Geometry(#[from] GeometryError),
}
