//! Construction of coupled boundary conditions by type name.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::{CoupledBoundaryCondition, FixedValueBC, ZeroGradientBC};
use crate::config::{BcParams, BcSpec};
use crate::error::{BcError, BcResult};
use crate::problem::ProblemContext;

/// Constructor stored in the registry.
pub type BcConstructor =
    for<'m> fn(&BcParams, ProblemContext<'m>) -> BcResult<Box<dyn CoupledBoundaryCondition + 'm>>;

/// Factory mapping type names to constructors.
///
/// # Example
/// ```
/// use coupled_bc::boundary::{BcRegistry, CoupledBoundaryCondition};
/// use coupled_bc::config::BcParams;
/// use coupled_bc::mesh::{Patch, PatchMesh};
/// use coupled_bc::problem::{CoupledProblem, TransferConfig};
///
/// let mesh = PatchMesh::new(vec![Patch::wall(0, "wall", 4)]);
/// let problem = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
///
/// let registry = BcRegistry::with_builtin();
/// let bc = registry
///     .build("ZeroGradient", &BcParams::new("T"), problem.context())
///     .unwrap();
/// assert_eq!(bc.boundaries(), &["wall"]);
/// ```
#[derive(Clone, Default)]
pub struct BcRegistry {
    constructors: BTreeMap<String, BcConstructor>,
}

impl fmt::Debug for BcRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.constructors.keys()).finish()
    }
}

fn build_fixed_value<'m>(
    params: &BcParams,
    ctx: ProblemContext<'m>,
) -> BcResult<Box<dyn CoupledBoundaryCondition + 'm>> {
    Ok(Box::new(FixedValueBC::new(params, ctx)?))
}

fn build_zero_gradient<'m>(
    params: &BcParams,
    ctx: ProblemContext<'m>,
) -> BcResult<Box<dyn CoupledBoundaryCondition + 'm>> {
    Ok(Box::new(ZeroGradientBC::new(params, ctx)?))
}

impl BcRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in conditions.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FixedValueBC::TYPE_NAME, build_fixed_value);
        registry.register(ZeroGradientBC::TYPE_NAME, build_zero_gradient);
        registry
    }

    /// Register a constructor, replacing any previous one of the same name.
    pub fn register(&mut self, type_name: impl Into<String>, constructor: BcConstructor) {
        self.constructors.insert(type_name.into(), constructor);
    }

    /// Check if a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Registered type names in sorted order.
    pub fn registered_types(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Build a condition by type name.
    ///
    /// # Errors
    /// `BcError::UnknownBcType` for an unregistered name, otherwise whatever
    /// the constructor returns.
    pub fn build<'m>(
        &self,
        type_name: &str,
        params: &BcParams,
        ctx: ProblemContext<'m>,
    ) -> BcResult<Box<dyn CoupledBoundaryCondition + 'm>> {
        let constructor = self
            .constructors
            .get(type_name)
            .ok_or_else(|| BcError::UnknownBcType(type_name.to_string()))?;
        debug!(type_name, "building coupled boundary condition");
        constructor(params, ctx)
    }

    /// Build a condition from a configured spec.
    pub fn build_spec<'m>(
        &self,
        spec: &BcSpec,
        ctx: ProblemContext<'m>,
    ) -> BcResult<Box<dyn CoupledBoundaryCondition + 'm>> {
        self.build(&spec.bc_type, &spec.params, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Patch, PatchMesh};
    use crate::problem::{CoupledProblem, StandaloneProblem, TransferConfig};

    fn problem() -> CoupledProblem<PatchMesh> {
        let mesh = PatchMesh::new(vec![Patch::wall(0, "wall", 4)]);
        CoupledProblem::new(mesh, TransferConfig::default()).unwrap()
    }

    #[test]
    fn test_builtin_types() {
        let registry = BcRegistry::with_builtin();
        let types: Vec<&str> = registry.registered_types().collect();
        assert_eq!(types, vec!["FixedValue", "ZeroGradient"]);
    }

    #[test]
    fn test_build_by_name() {
        let problem = problem();
        let registry = BcRegistry::with_builtin();
        let params = BcParams::new("T").with_value("value", 2.0);

        let bc = registry.build("FixedValue", &params, problem.context()).unwrap();
        assert_eq!(bc.type_name(), "FixedValue");
        assert_eq!(bc.solver_variable(), "T");
    }

    #[test]
    fn test_unknown_type() {
        let problem = problem();
        let registry = BcRegistry::with_builtin();
        let err = registry
            .build("Robin", &BcParams::new("T"), problem.context())
            .unwrap_err();
        assert_eq!(err, BcError::UnknownBcType("Robin".to_string()));
    }

    #[test]
    fn test_constructor_errors_propagate() {
        let standalone = StandaloneProblem::default();
        let registry = BcRegistry::with_builtin();
        let err = registry
            .build(
                "ZeroGradient",
                &BcParams::new("T"),
                ProblemContext::new(&standalone),
            )
            .unwrap_err();
        assert!(matches!(err, BcError::IncompatibleProblem { .. }));
    }

    #[test]
    fn test_built_conditions_are_debug() {
        let problem = problem();
        let registry = BcRegistry::with_builtin();
        let bc = registry
            .build("ZeroGradient", &BcParams::new("T"), problem.context())
            .unwrap();
        assert!(format!("{bc:?}").contains("ZeroGradientBC"));
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = BcRegistry::new();
        assert!(!registry.contains("Wall"));
        registry.register("Wall", build_zero_gradient);
        assert!(registry.contains("Wall"));
    }
}
