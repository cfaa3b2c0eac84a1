//! State shared by every coupled boundary condition.

use tracing::{info, warn};

use super::resolve_boundaries;
use crate::config::BcParams;
use crate::error::BcResult;
use crate::mesh::ExternalMesh;
use crate::problem::ProblemContext;

/// Common part of a coupled boundary condition.
///
/// Built atomically: [`CoupledBCBase::new`] either returns a fully resolved
/// object or an error, never something in between. After construction the
/// solver variable and boundary set never change.
///
/// The mesh is borrowed from the owning problem for `'m`, so a condition
/// cannot outlive the problem it was built in.
#[derive(Debug)]
pub struct CoupledBCBase<'m> {
    solver_variable: String,
    boundaries: Vec<String>,
    mesh: &'m dyn ExternalMesh,
}

impl<'m> CoupledBCBase<'m> {
    /// Bind to the owning problem and resolve the configured boundaries.
    ///
    /// An empty boundary list resolves to the whole mesh catalog, so the
    /// resolved set is non-empty unless the mesh itself has no subdomains.
    /// In that case it is empty.
    ///
    /// # Errors
    /// * `BcError::IncompatibleProblem` if the problem is not coupled; this is
    ///   checked before anything else
    /// * `BcError::MissingParameter` if the solver variable is empty
    /// * `BcError::UnknownBoundary` if a configured boundary is not in the
    ///   mesh catalog
    pub fn new(params: &BcParams, ctx: ProblemContext<'m>) -> BcResult<Self> {
        let mesh = ctx.coupled_mesh()?;
        params.validate()?;

        let catalog = mesh.subdomain_names(mesh.subdomain_list());
        let boundaries = resolve_boundaries(&params.boundary, &catalog)?;

        info!(
            variable = %params.solver_variable,
            n_boundaries = boundaries.len(),
            "coupled boundary condition bound"
        );

        Ok(Self {
            solver_variable: params.solver_variable.clone(),
            boundaries,
            mesh,
        })
    }

    /// External solver variable this condition acts on.
    pub fn solver_variable(&self) -> &str {
        &self.solver_variable
    }

    /// Resolved boundaries this condition applies to.
    pub fn boundaries(&self) -> &[String] {
        &self.boundaries
    }

    /// The external mesh.
    pub fn mesh(&self) -> &'m dyn ExternalMesh {
        self.mesh
    }

    /// Resolved boundaries whose patch is constrained by the external solver.
    pub fn constrained_boundaries(&self) -> Vec<&str> {
        self.boundaries
            .iter()
            .filter(|name| {
                self.mesh
                    .subdomain_id(name)
                    .and_then(|id| self.mesh.patch_kind(id))
                    .is_some_and(|kind| kind.is_constrained())
            })
            .map(String::as_str)
            .collect()
    }

    /// Log a warning for each constrained boundary; the external solver will
    /// override whatever is imposed there.
    pub(crate) fn warn_constrained(&self, bc_type: &str) {
        for boundary in self.constrained_boundaries() {
            warn!(
                bc_type,
                variable = %self.solver_variable,
                boundary,
                "boundary is constrained by the external solver"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BcError;
    use crate::mesh::{Patch, PatchKind, PatchMesh};
    use crate::problem::{CoupledProblem, StandaloneProblem, TransferConfig};

    fn problem() -> CoupledProblem<PatchMesh> {
        let mesh = PatchMesh::new(vec![
            Patch::new(0, "inlet", PatchKind::Patch, 2),
            Patch::new(1, "outlet", PatchKind::Patch, 2),
            Patch::wall(2, "wall", 8),
            Patch::new(3, "sides", PatchKind::Empty, 16),
        ]);
        CoupledProblem::new(mesh, TransferConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_boundary_means_all() {
        let problem = problem();
        let base = CoupledBCBase::new(&BcParams::new("T"), problem.context()).unwrap();

        assert_eq!(base.solver_variable(), "T");
        assert_eq!(base.boundaries(), &["inlet", "outlet", "wall", "sides"]);
    }

    #[test]
    fn test_accessors_are_stable() {
        let problem = problem();
        let params = BcParams::new("U").with_boundary(["outlet", "inlet"]);
        let base = CoupledBCBase::new(&params, problem.context()).unwrap();

        let first = base.boundaries().to_vec();
        for _ in 0..3 {
            assert_eq!(base.boundaries(), first.as_slice());
            assert_eq!(base.solver_variable(), "U");
        }
    }

    #[test]
    fn test_unknown_boundary() {
        let problem = problem();
        let params = BcParams::new("T").with_boundary(["inlet", "roof"]);
        let err = CoupledBCBase::new(&params, problem.context()).unwrap_err();
        assert_eq!(err, BcError::unknown_boundary("roof"));
    }

    #[test]
    fn test_incompatible_problem_checked_first() {
        let standalone = StandaloneProblem::default();
        let params = BcParams::new("").with_boundary(["nowhere"]);
        let err = CoupledBCBase::new(&params, ProblemContext::new(&standalone)).unwrap_err();
        assert_eq!(err, BcError::incompatible_problem("FEProblem"));
    }

    #[test]
    fn test_missing_variable() {
        let problem = problem();
        let err = CoupledBCBase::new(&BcParams::new(""), problem.context()).unwrap_err();
        assert_eq!(err, BcError::MissingParameter("solver_variable"));
    }

    #[test]
    fn test_empty_catalog_resolves_to_empty_set() {
        let problem = CoupledProblem::new(PatchMesh::default(), TransferConfig::default()).unwrap();
        let base = CoupledBCBase::new(&BcParams::new("T"), problem.context()).unwrap();
        assert!(base.boundaries().is_empty());
    }

    #[test]
    fn test_constrained_boundaries() {
        let problem = problem();
        let base = CoupledBCBase::new(&BcParams::new("T"), problem.context()).unwrap();
        assert_eq!(base.constrained_boundaries(), vec!["sides"]);
    }
}
