//! Problem variant that owns an externally meshed representation.

use tracing::info;

use super::{ProblemContext, SimulationProblem, TransferConfig};
use crate::error::BcResult;
use crate::mesh::ExternalMesh;

/// Simulation problem coupled to an external CFD solver.
///
/// Owns the external mesh; boundary conditions borrow it for at most the
/// lifetime of the problem.
#[derive(Debug)]
pub struct CoupledProblem<M> {
    mesh: M,
    transfer: TransferConfig,
}

impl<M: ExternalMesh> CoupledProblem<M> {
    /// Create a coupled problem.
    ///
    /// # Errors
    /// `BcError::ConflictingTransfer` if two transfer parameters of the same
    /// direction name the same variable.
    pub fn new(mesh: M, transfer: TransferConfig) -> BcResult<Self> {
        transfer.validate()?;
        info!(
            n_subdomains = mesh.subdomain_list().len(),
            "coupled problem ready"
        );
        Ok(Self { mesh, transfer })
    }

    /// The external mesh.
    pub fn mesh(&self) -> &M {
        &self.mesh
    }

    /// Variable transfer configuration.
    pub fn transfer(&self) -> &TransferConfig {
        &self.transfer
    }

    /// Context for assembling boundary conditions of this problem.
    pub fn context(&self) -> ProblemContext<'_> {
        ProblemContext::new(self)
    }
}

impl<M: ExternalMesh> SimulationProblem for CoupledProblem<M> {
    fn problem_type(&self) -> &str {
        "CoupledProblem"
    }

    fn coupled_mesh(&self) -> Option<&dyn ExternalMesh> {
        Some(&self.mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BcError;
    use crate::mesh::{Patch, PatchMesh};

    #[test]
    fn test_context_exposes_mesh() {
        let mesh = PatchMesh::new(vec![Patch::wall(3, "hot_wall", 10)]);
        let problem = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
        let ctx = problem.context();

        assert_eq!(ctx.problem_type(), "CoupledProblem");
        let mesh = ctx.coupled_mesh().unwrap();
        assert_eq!(mesh.catalog(), vec!["hot_wall".to_string()]);
    }

    #[test]
    fn test_conflicting_transfer_rejected() {
        let transfer = TransferConfig {
            temp: Some("T".to_string()),
            heat_flux: Some("T".to_string()),
            ..Default::default()
        };
        let err = CoupledProblem::new(PatchMesh::default(), transfer).unwrap_err();
        assert!(matches!(err, BcError::ConflictingTransfer { .. }));
    }
}
