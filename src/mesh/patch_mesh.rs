//! In-memory boundary representation of an external CFD case.
//!
//! Only the boundary patches that take part in the coupling are mirrored.
//! Each mirrored patch keeps the external patch id as its subdomain id, so
//! both solvers address the same region with the same number and name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ExternalMesh, PatchKind};
use crate::error::{BcError, BcResult};
use crate::types::SubdomainId;

/// A boundary patch of the external case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// External patch id, mirrored as subdomain id
    pub id: SubdomainId,
    /// Patch name
    pub name: String,
    /// Patch type
    #[serde(default)]
    pub kind: PatchKind,
    /// Number of boundary faces on this rank
    #[serde(default)]
    pub n_faces: usize,
}

impl Patch {
    /// Create a new patch.
    pub fn new(id: usize, name: impl Into<String>, kind: PatchKind, n_faces: usize) -> Self {
        Self {
            id: SubdomainId::new(id),
            name: name.into(),
            kind,
            n_faces,
        }
    }

    /// Create a wall patch.
    pub fn wall(id: usize, name: impl Into<String>, n_faces: usize) -> Self {
        Self::new(id, name, PatchKind::Wall, n_faces)
    }
}

/// Boundary mesh mirrored from an external case.
#[derive(Clone, Debug, Default)]
pub struct PatchMesh {
    /// Mirrored patches, in configured order
    patches: Vec<Patch>,
    /// Subdomain ids, parallel to `patches`
    subdomain_list: Vec<SubdomainId>,
}

impl PatchMesh {
    /// Create a mesh from an explicit patch list.
    ///
    /// Later patches reusing an already used name or id are dropped, so
    /// every catalog name maps to exactly one subdomain.
    pub fn new(patches: impl IntoIterator<Item = Patch>) -> Self {
        let mut seen_names = HashSet::new();
        let mut seen_ids = HashSet::new();
        let mut mesh = Self::default();
        for patch in patches {
            if seen_names.contains(&patch.name) || seen_ids.contains(&patch.id) {
                warn!(patch = %patch.name, id = %patch.id, "duplicate patch ignored");
                continue;
            }
            seen_names.insert(patch.name.clone());
            seen_ids.insert(patch.id);
            mesh.subdomain_list.push(patch.id);
            mesh.patches.push(patch);
        }
        mesh
    }

    /// Mirror the requested patches of an external case.
    ///
    /// # Arguments
    /// * `requested` - Names of the patches to mirror, in the order they
    ///   should appear in the catalog
    /// * `case_patches` - Every boundary patch the external case defines
    ///
    /// # Errors
    /// `BcError::UnknownPatch` if a requested name is not in the case.
    pub fn from_case(requested: &[String], case_patches: &[Patch]) -> BcResult<Self> {
        let selected = requested
            .iter()
            .map(|name| {
                case_patches
                    .iter()
                    .find(|p| &p.name == name)
                    .cloned()
                    .ok_or_else(|| BcError::UnknownPatch {
                        patch: name.clone(),
                    })
            })
            .collect::<BcResult<Vec<_>>>()?;

        let mesh = Self::new(selected);
        debug!(n_patches = mesh.n_patches(), "mirrored external patches");
        Ok(mesh)
    }

    /// Number of mirrored patches.
    pub fn n_patches(&self) -> usize {
        self.patches.len()
    }

    /// Total number of boundary faces over all patches.
    pub fn n_faces(&self) -> usize {
        self.patches.iter().map(|p| p.n_faces).sum()
    }

    /// Iterate over the mirrored patches.
    pub fn patches(&self) -> impl Iterator<Item = &Patch> {
        self.patches.iter()
    }

    /// Get a patch by subdomain id.
    pub fn patch(&self, id: SubdomainId) -> Option<&Patch> {
        self.patches.iter().find(|p| p.id == id)
    }
}

impl ExternalMesh for PatchMesh {
    fn subdomain_list(&self) -> &[SubdomainId] {
        &self.subdomain_list
    }

    fn subdomain_names(&self, ids: &[SubdomainId]) -> Vec<String> {
        ids.iter()
            .map(|&id| self.patch(id).map(|p| p.name.clone()).unwrap_or_default())
            .collect()
    }

    fn patch_size(&self, id: SubdomainId) -> Option<usize> {
        self.patch(id).map(|p| p.n_faces)
    }

    fn patch_kind(&self, id: SubdomainId) -> Option<PatchKind> {
        self.patch(id).map(|p| p.kind)
    }
}
