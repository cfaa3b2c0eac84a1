//! The mesh catalog service.
//!
//! The external mesh is owned by the coupled problem. Boundary conditions
//! only ever read from it through [`ExternalMesh`]:
//!
//! - [`ExternalMesh::subdomain_list`]: ids of every boundary subdomain
//! - [`ExternalMesh::subdomain_names`]: id → name mapping
//!
//! The names returned for the full id list form the *catalog*, the
//! authoritative vocabulary that configured boundary names are checked
//! against.

use std::fmt::Debug;

use super::PatchKind;
use crate::types::SubdomainId;

/// Read-only view of an externally owned mesh's boundary subdomains.
pub trait ExternalMesh: Debug + Send + Sync {
    /// Ids of all boundary subdomains, in the mesh's canonical order.
    fn subdomain_list(&self) -> &[SubdomainId];

    /// Map subdomain ids to their names, preserving order.
    ///
    /// Ids unknown to the mesh map to an empty name.
    fn subdomain_names(&self, ids: &[SubdomainId]) -> Vec<String>;

    /// Number of boundary faces in a subdomain.
    fn patch_size(&self, id: SubdomainId) -> Option<usize>;

    /// Kind of the patch backing a subdomain.
    fn patch_kind(&self, id: SubdomainId) -> Option<PatchKind>;

    /// Names of every subdomain in canonical order.
    fn catalog(&self) -> Vec<String> {
        self.subdomain_names(self.subdomain_list())
    }

    /// Look up a subdomain id by name.
    fn subdomain_id(&self, name: &str) -> Option<SubdomainId> {
        let ids = self.subdomain_list();
        self.subdomain_names(ids)
            .iter()
            .position(|n| n == name)
            .map(|i| ids[i])
    }
}
