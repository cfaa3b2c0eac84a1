//! External mesh representation.
//!
//! Provides the boundary-side view of the externally owned CFD mesh:
//! - The read-only catalog service boundary conditions query
//! - Patch kinds of the external case
//! - An in-memory mirror of the coupled patches

mod catalog;
mod patch_kind;
mod patch_mesh;

pub use catalog::ExternalMesh;
pub use patch_kind::PatchKind;
pub use patch_mesh::{Patch, PatchMesh};
