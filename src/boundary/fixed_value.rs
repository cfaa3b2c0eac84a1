//! Fixed value (Dirichlet) coupled boundary condition.
//!
//! Sets every face of every resolved boundary to one prescribed value:
//!
//! φ_face = value

use super::{CoupledBCBase, CoupledBoundaryCondition};
use crate::config::BcParams;
use crate::diagnostics::{InfoTable, list_from_vec};
use crate::error::{BcError, BcResult};
use crate::field::BoundaryFields;
use crate::problem::ProblemContext;

/// Fixed value boundary condition.
///
/// Parameters: `solver_variable`, optional `boundary`, and
/// `values.value` (required).
#[derive(Debug)]
pub struct FixedValueBC<'m> {
    base: CoupledBCBase<'m>,
    /// Prescribed face value
    value: f64,
}

impl<'m> FixedValueBC<'m> {
    /// Registered type name.
    pub const TYPE_NAME: &'static str = "FixedValue";

    /// Build from configuration.
    pub fn new(params: &BcParams, ctx: ProblemContext<'m>) -> BcResult<Self> {
        let base = CoupledBCBase::new(params, ctx)?;
        let value = params.required_value("value")?;
        Ok(Self { base, value })
    }

    /// Prescribed face value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl CoupledBoundaryCondition for FixedValueBC<'_> {
    fn base(&self) -> &CoupledBCBase<'_> {
        &self.base
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn initial_setup(&mut self) -> BcResult<()> {
        if !self.value.is_finite() {
            return Err(BcError::NonFiniteValue {
                variable: self.base.solver_variable().to_string(),
                value: self.value,
            });
        }
        self.base.warn_constrained(Self::TYPE_NAME);
        Ok(())
    }

    fn apply_boundary_condition(&self, fields: &mut BoundaryFields) -> BcResult<()> {
        let variable = self.base.solver_variable();
        for boundary in self.base.boundaries() {
            let patch = fields.patch_mut(variable, boundary)?;
            patch.face.fill(self.value);
        }
        Ok(())
    }

    fn add_info_row(&self, table: &mut InfoTable) -> BcResult<()> {
        table.add_row(vec![
            Self::TYPE_NAME.to_string(),
            self.base.solver_variable().to_string(),
            list_from_vec(self.base.boundaries()),
            format!("value = {}", self.value),
        ])
    }
}
