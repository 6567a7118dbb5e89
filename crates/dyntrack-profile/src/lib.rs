//! Track cross-section profiles.
//!
//! A [`Profile`] describes how a piece of dynamic track looks in cross-section,
//! independent of where it is laid: a list of distance-gated [`LodLevel`]s, each holding
//! [`LodItem`]s (one renderable unit per item), each made of [`Polyline`]s of
//! [`Vertex`]es. Profiles are authored as RON or JSON documents and validated on load.
//! A route loads one profile and shares it read-only with every track section.

mod default;
mod document;
mod error;
mod loader;
mod model;

pub use document::{
    LodDocument, LodItemDocument, PolylineDocument, ProfileDocument, VertexDocument,
};
pub use error::ProfileError;
pub use model::{
    LodItem, LodLevel, LodMethod, MaterialBinding, PitchControl, Polyline, Profile,
    TexAddressMode, Vertex,
};
