//! Coupled boundary conditions.
//!
//! A coupled boundary condition is imposed by the host on a variable of the
//! external CFD solver, over a set of named boundaries of the external mesh.
//!
//! # Lifecycle
//!
//! | Stage | Trigger | Failure |
//! |-------|---------|---------|
//! | Bound | [`CoupledBCBase::new`] obtains the mesh from the problem | `IncompatibleProblem` |
//! | Ready | configured boundaries resolved against the mesh catalog | `UnknownBoundary` |
//! | Set up | [`CoupledBoundaryCondition::initial_setup`], once per run | variant specific |
//! | Applied | [`CoupledBoundaryCondition::apply_boundary_condition`] | variant specific |
//!
//! Construction is atomic: a condition object only exists once it is Ready.
//!
//! # Available Boundary Conditions
//!
//! | Type name | Description |
//! |-----------|-------------|
//! | `FixedValue` | Prescribed face value (Dirichlet) |
//! | `ZeroGradient` | Face value copied from the interior |

mod base;
mod fixed_value;
mod registry;
mod resolver;
mod system;
mod zero_gradient;

pub use base::CoupledBCBase;
pub use fixed_value::FixedValueBC;
pub use registry::{BcConstructor, BcRegistry};
pub use resolver::resolve_boundaries;
pub use system::CoupledBCSystem;
pub use zero_gradient::ZeroGradientBC;

use std::fmt::Debug;

use crate::diagnostics::InfoTable;
use crate::error::BcResult;
use crate::field::BoundaryFields;

/// Trait for boundary conditions imposed on the external solver.
///
/// Implementations own a [`CoupledBCBase`] built in their constructor and
/// add the solver-specific numeric behaviour.
pub trait CoupledBoundaryCondition: Debug + Send + Sync {
    /// The shared, resolved state of this condition.
    fn base(&self) -> &CoupledBCBase<'_>;

    /// Registered type name, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// External solver variable this condition acts on.
    fn solver_variable(&self) -> &str {
        self.base().solver_variable()
    }

    /// Resolved boundaries this condition applies to.
    fn boundaries(&self) -> &[String] {
        self.base().boundaries()
    }

    /// One-time preparation, run before the first application.
    fn initial_setup(&mut self) -> BcResult<()>;

    /// Impose the condition on every boundary in [`Self::boundaries`].
    fn apply_boundary_condition(&self, fields: &mut BoundaryFields) -> BcResult<()>;

    /// Contribute one row describing this condition.
    fn add_info_row(&self, table: &mut InfoTable) -> BcResult<()>;
}
