//! The owning simulation problem.
//!
//! A boundary condition never looks up its problem through a downcast.
//! Instead every problem answers one capability query,
//! [`SimulationProblem::coupled_mesh`], and [`ProblemContext`] turns the
//! answer into a typed result:
//!
//! ```
//! use coupled_bc::mesh::{Patch, PatchMesh};
//! use coupled_bc::problem::{CoupledProblem, ProblemContext, StandaloneProblem, TransferConfig};
//!
//! let mesh = PatchMesh::new(vec![Patch::wall(0, "wall", 8)]);
//! let coupled = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
//! assert!(coupled.context().coupled_mesh().is_ok());
//!
//! let standalone = StandaloneProblem::default();
//! assert!(ProblemContext::new(&standalone).coupled_mesh().is_err());
//! ```

mod coupled;
mod transfer;

pub use coupled::CoupledProblem;
pub use transfer::{SyncDirection, SyncVariables, TransferConfig};

use std::fmt::Debug;

use crate::error::{BcError, BcResult};
use crate::mesh::ExternalMesh;

/// A simulation problem as seen from its boundary conditions.
pub trait SimulationProblem: Debug {
    /// Type name of the problem, used in diagnostics.
    fn problem_type(&self) -> &str;

    /// The external mesh, if this problem is coupled to an external solver.
    fn coupled_mesh(&self) -> Option<&dyn ExternalMesh> {
        None
    }
}

/// Handle to the problem that is assembling boundary conditions.
///
/// The lifetime `'p` bounds every mesh borrow obtained through the context,
/// so nothing built from it can outlive the problem.
#[derive(Clone, Copy, Debug)]
pub struct ProblemContext<'p> {
    problem: &'p dyn SimulationProblem,
}

impl<'p> ProblemContext<'p> {
    /// Create a context for the given problem.
    pub fn new(problem: &'p dyn SimulationProblem) -> Self {
        Self { problem }
    }

    /// Type name of the current problem.
    pub fn problem_type(&self) -> &'p str {
        self.problem.problem_type()
    }

    /// The current problem's external mesh.
    ///
    /// # Errors
    /// `BcError::IncompatibleProblem` if the problem is not coupled.
    pub fn coupled_mesh(&self) -> BcResult<&'p dyn ExternalMesh> {
        self.problem
            .coupled_mesh()
            .ok_or_else(|| BcError::incompatible_problem(self.problem.problem_type()))
    }
}

/// A problem meshed entirely by the host solver.
#[derive(Clone, Debug)]
pub struct StandaloneProblem {
    problem_type: String,
}

impl StandaloneProblem {
    /// Create a standalone problem with a custom type name.
    pub fn new(problem_type: impl Into<String>) -> Self {
        Self {
            problem_type: problem_type.into(),
        }
    }
}

impl Default for StandaloneProblem {
    fn default() -> Self {
        Self::new("FEProblem")
    }
}

impl SimulationProblem for StandaloneProblem {
    fn problem_type(&self) -> &str {
        &self.problem_type
    }
}
