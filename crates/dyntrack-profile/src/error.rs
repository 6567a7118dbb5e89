//! Profile loading and validation errors.

use std::path::PathBuf;

/// Errors that make a profile unusable.
///
/// Every variant is recoverable at the route level: callers fall back to
/// [`Profile::default_profile`](crate::Profile::default_profile).
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Failed to read the profile file from disk.
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a RON profile document.
    #[error("failed to parse RON profile: {0}")]
    ParseRon(#[source] ron::error::SpannedError),

    /// Failed to parse a JSON profile document.
    #[error("failed to parse JSON profile: {0}")]
    ParseJson(#[source] serde_json::Error),

    /// The file extension does not name a known profile format.
    #[error("unsupported profile format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The profile has no LOD levels.
    #[error("profile {0:?} has no LOD levels")]
    NoLodLevels(String),

    /// LOD cutoffs must be listed nearest first.
    #[error("LOD {index} cutoff {cutoff} is below the previous cutoff {previous}")]
    UnorderedCutoffs {
        index: usize,
        cutoff: f32,
        previous: f32,
    },

    /// An LOD item has no polylines.
    #[error("LOD item {0:?} has no polylines")]
    EmptyLodItem(String),

    /// A polyline needs at least two vertices to span a segment.
    #[error("polyline {name:?} has {count} vertices, at least 2 required")]
    TooFewVertices { name: String, count: usize },

    /// A polyline's texture coordinates would not advance along the track.
    #[error("polyline {0:?} has a zero DeltaTexCoord")]
    ZeroDeltaTexCoord(String),

    /// A vertex normal has zero length.
    #[error("vertex {index} of polyline {name:?} has a zero normal")]
    ZeroNormal { name: String, index: usize },

    /// Chord span must be a positive angle.
    #[error("chord span must be positive, got {0} degrees")]
    InvalidChordSpan(f32),

    /// Pitch control needs a positive length to compare against.
    #[error("pitch control scalar must be positive, got {0} m")]
    InvalidPitchControlScalar(f32),
}
