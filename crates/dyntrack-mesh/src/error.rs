//! Geometry contract violations.

/// A track section that the mesh builder cannot sweep.
///
/// These indicate a broken contract upstream (sections come out of the decomposer already
/// filtered) and are not recovered from.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A curve needs a positive, finite radius.
    #[error("curve radius must be positive, got {0} m")]
    NonPositiveRadius(f32),

    /// A zero-length or non-finite section reached the builder.
    #[error("degenerate section: length or angle is {0}")]
    DegenerateSection(f32),
}
