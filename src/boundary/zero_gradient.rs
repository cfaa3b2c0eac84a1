//! Zero-gradient coupled boundary condition.
//!
//! Copies the adjacent interior value onto each boundary face:
//!
//! φ_face = φ_interior

use super::{CoupledBCBase, CoupledBoundaryCondition};
use crate::config::BcParams;
use crate::diagnostics::{InfoTable, list_from_vec};
use crate::error::BcResult;
use crate::field::BoundaryFields;
use crate::problem::ProblemContext;

/// Zero-gradient (extrapolation) boundary condition.
#[derive(Debug)]
pub struct ZeroGradientBC<'m> {
    base: CoupledBCBase<'m>,
}

impl<'m> ZeroGradientBC<'m> {
    /// Registered type name.
    pub const TYPE_NAME: &'static str = "ZeroGradient";

    /// Build from configuration.
    pub fn new(params: &BcParams, ctx: ProblemContext<'m>) -> BcResult<Self> {
        Ok(Self {
            base: CoupledBCBase::new(params, ctx)?,
        })
    }
}

impl CoupledBoundaryCondition for ZeroGradientBC<'_> {
    fn base(&self) -> &CoupledBCBase<'_> {
        &self.base
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn initial_setup(&mut self) -> BcResult<()> {
        self.base.warn_constrained(Self::TYPE_NAME);
        Ok(())
    }

    fn apply_boundary_condition(&self, fields: &mut BoundaryFields) -> BcResult<()> {
        let variable = self.base.solver_variable();
        for boundary in self.base.boundaries() {
            let patch = fields.patch_mut(variable, boundary)?;
            patch.check_lengths(variable, boundary)?;
            patch.face.copy_from_slice(&patch.interior);
        }
        Ok(())
    }

    fn add_info_row(&self, table: &mut InfoTable) -> BcResult<()> {
        table.add_row(vec![
            Self::TYPE_NAME.to_string(),
            self.base.solver_variable().to_string(),
            list_from_vec(self.base.boundaries()),
            String::new(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BcError;
    use crate::field::PatchField;
    use crate::mesh::{Patch, PatchMesh};
    use crate::problem::{CoupledProblem, TransferConfig};

    #[test]
    fn test_faces_copy_interior() {
        let mesh = PatchMesh::new(vec![Patch::wall(0, "wall", 3)]);
        let problem = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
        let mut bc = ZeroGradientBC::new(&BcParams::new("T"), problem.context()).unwrap();
        bc.initial_setup().unwrap();

        let mut fields = BoundaryFields::new();
        fields.insert("T", "wall", PatchField::from_interior(vec![1.0, 2.0, 3.0]));
        bc.apply_boundary_condition(&mut fields).unwrap();

        assert_eq!(fields.get("T", "wall").unwrap().face, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let mesh = PatchMesh::new(vec![Patch::wall(0, "wall", 3)]);
        let problem = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
        let bc = ZeroGradientBC::new(&BcParams::new("T"), problem.context()).unwrap();

        let mut fields = BoundaryFields::new();
        let mut field = PatchField::from_interior(vec![1.0, 2.0, 3.0]);
        field.face.truncate(2);
        fields.insert("T", "wall", field);

        let err = bc.apply_boundary_condition(&mut fields).unwrap_err();
        assert!(matches!(err, BcError::FieldLength { face: 2, interior: 3, .. }));
        assert_eq!(fields.get("T", "wall").unwrap().face, vec![0.0, 0.0]);
    }

    #[test]
    fn test_info_row_has_empty_parameters() {
        let mesh = PatchMesh::new(vec![Patch::wall(0, "a", 1), Patch::wall(1, "b", 1)]);
        let problem = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
        let bc = ZeroGradientBC::new(&BcParams::new("p"), problem.context()).unwrap();

        let mut table = InfoTable::coupled_bc();
        bc.add_info_row(&mut table).unwrap();
        assert_eq!(table.rows()[0], vec!["ZeroGradient", "p", "a, b", ""]);
    }
}
