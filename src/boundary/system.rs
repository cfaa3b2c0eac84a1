//! The set of coupled boundary conditions of one problem.

use tracing::{debug, info};

use super::{BcRegistry, CoupledBoundaryCondition};
use crate::config::BcSpec;
use crate::diagnostics::InfoTable;
use crate::error::{BcError, BcResult};
use crate::field::BoundaryFields;
use crate::problem::ProblemContext;

/// Owns the coupled boundary conditions of a problem and drives their
/// lifecycle: one `initial_setup` pass, then any number of `apply_all`.
#[derive(Debug, Default)]
pub struct CoupledBCSystem<'m> {
    bcs: Vec<Box<dyn CoupledBoundaryCondition + 'm>>,
    setup_done: bool,
}

impl<'m> CoupledBCSystem<'m> {
    /// Create an empty system.
    pub fn new() -> Self {
        Self {
            bcs: Vec::new(),
            setup_done: false,
        }
    }

    /// Build every configured condition through the registry.
    ///
    /// Fails on the first condition that cannot be built.
    pub fn from_specs(
        registry: &BcRegistry,
        specs: &[BcSpec],
        ctx: ProblemContext<'m>,
    ) -> BcResult<Self> {
        let mut system = Self::new();
        for spec in specs {
            system.add(registry.build_spec(spec, ctx)?);
        }
        Ok(system)
    }

    /// Add a condition. Conditions run in insertion order.
    pub fn add(&mut self, bc: Box<dyn CoupledBoundaryCondition + 'm>) {
        self.bcs.push(bc);
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.bcs.len()
    }

    /// Check if the system has no conditions.
    pub fn is_empty(&self) -> bool {
        self.bcs.is_empty()
    }

    /// Iterate over the conditions.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn CoupledBoundaryCondition + 'm)> {
        self.bcs.iter().map(|bc| bc.as_ref())
    }

    /// Whether `initial_setup` has completed.
    pub fn is_setup(&self) -> bool {
        self.setup_done
    }

    /// Run the one-time setup of every condition.
    ///
    /// Repeated calls are no-ops. A failing condition aborts setup and
    /// leaves the system not set up.
    pub fn initial_setup(&mut self) -> BcResult<()> {
        if self.setup_done {
            debug!("coupled boundary conditions already set up");
            return Ok(());
        }
        for bc in &mut self.bcs {
            bc.initial_setup()?;
        }
        self.setup_done = true;
        info!(n_bcs = self.bcs.len(), "coupled boundary conditions set up");
        Ok(())
    }

    /// Impose every condition on the boundary fields.
    ///
    /// # Errors
    /// `BcError::SetupNotRun` before `initial_setup` succeeded.
    pub fn apply_all(&self, fields: &mut BoundaryFields) -> BcResult<()> {
        if !self.setup_done {
            return Err(BcError::SetupNotRun);
        }
        for bc in &self.bcs {
            bc.apply_boundary_condition(fields)?;
        }
        Ok(())
    }

    /// Diagnostics table with one row per condition.
    pub fn info_table(&self) -> BcResult<InfoTable> {
        let mut table = InfoTable::coupled_bc();
        for bc in &self.bcs {
            bc.add_info_row(&mut table)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BcParams;
    use crate::field::PatchField;
    use crate::mesh::{Patch, PatchKind, PatchMesh};
    use crate::problem::{CoupledProblem, TransferConfig};

    fn problem() -> CoupledProblem<PatchMesh> {
        let mesh = PatchMesh::new(vec![
            Patch::new(0, "inlet", PatchKind::Patch, 2),
            Patch::wall(1, "wall", 2),
        ]);
        CoupledProblem::new(mesh, TransferConfig::default()).unwrap()
    }

    fn specs() -> Vec<BcSpec> {
        vec![
            BcSpec::new(
                "FixedValue",
                BcParams::new("T")
                    .with_boundary(["inlet"])
                    .with_value("value", 5.0),
            ),
            BcSpec::new("ZeroGradient", BcParams::new("T").with_boundary(["wall"])),
        ]
    }

    #[test]
    fn test_apply_requires_setup() {
        let problem = problem();
        let mut system =
            CoupledBCSystem::from_specs(&BcRegistry::with_builtin(), &specs(), problem.context())
                .unwrap();
        let mut fields = BoundaryFields::for_mesh(problem.mesh(), &["T"]);

        assert_eq!(system.apply_all(&mut fields).unwrap_err(), BcError::SetupNotRun);

        system.initial_setup().unwrap();
        assert!(system.is_setup());
        system.apply_all(&mut fields).unwrap();
        assert_eq!(fields.get("T", "inlet").unwrap().face, vec![5.0, 5.0]);
    }

    #[test]
    fn test_apply_in_insertion_order() {
        let problem = problem();
        let registry = BcRegistry::with_builtin();
        let mut system = CoupledBCSystem::new();
        let fixed = BcParams::new("T").with_value("value", 1.0);
        let zero_gradient = BcParams::new("T").with_boundary(["wall"]);
        system.add(registry.build("FixedValue", &fixed, problem.context()).unwrap());
        system.add(registry.build("ZeroGradient", &zero_gradient, problem.context()).unwrap());
        system.initial_setup().unwrap();

        let mut fields = BoundaryFields::new();
        fields.insert("T", "inlet", PatchField::from_interior(vec![7.0, 7.0]));
        fields.insert("T", "wall", PatchField::from_interior(vec![8.0, 9.0]));
        system.apply_all(&mut fields).unwrap();

        assert_eq!(fields.get("T", "inlet").unwrap().face, vec![1.0, 1.0]);
        assert_eq!(fields.get("T", "wall").unwrap().face, vec![8.0, 9.0]);
    }

    #[test]
    fn test_failed_setup_keeps_system_unset() {
        let problem = problem();
        let registry = BcRegistry::with_builtin();
        let mut system = CoupledBCSystem::new();
        system.add(
            registry
                .build(
                    "FixedValue",
                    &BcParams::new("T").with_value("value", f64::INFINITY),
                    problem.context(),
                )
                .unwrap(),
        );

        assert!(system.initial_setup().is_err());
        assert!(!system.is_setup());
    }

    #[test]
    fn test_info_table_one_row_per_bc() {
        let problem = problem();
        let system =
            CoupledBCSystem::from_specs(&BcRegistry::with_builtin(), &specs(), problem.context())
                .unwrap();

        let table = system.info_table().unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.rows()[0][2], "inlet");
        assert_eq!(table.rows()[1][0], "ZeroGradient");
    }

    #[test]
    fn test_from_specs_fails_on_bad_boundary() {
        let problem = problem();
        let specs = vec![BcSpec::new(
            "ZeroGradient",
            BcParams::new("T").with_boundary(["outlet"]),
        )];
        let result =
            CoupledBCSystem::from_specs(&BcRegistry::with_builtin(), &specs, problem.context());
        assert_eq!(result.err(), Some(BcError::unknown_boundary("outlet")));
    }
}
