//! Configuration bundle accepted by every coupled boundary condition.
//!
//! The host's parameter system hands over already-parsed values; this
//! module only defines their shape and the checks the core needs.
//!
//! ```
//! use coupled_bc::config::BcParams;
//!
//! let params = BcParams::new("T")
//!     .with_boundary(["inlet", "wall"])
//!     .with_value("value", 300.0);
//! assert_eq!(params.boundary, vec!["inlet", "wall"]);
//! assert_eq!(params.value("value"), Some(300.0));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BcError, BcResult};

/// Parameters of a coupled boundary condition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BcParams {
    /// External solver variable the condition is imposed on
    pub solver_variable: String,
    /// Boundaries the condition applies to; empty means all
    #[serde(default)]
    pub boundary: Vec<String>,
    /// Numeric parameters specific to the concrete condition
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

impl BcParams {
    /// System attribute name under which coupled conditions are grouped.
    pub const SYSTEM_ATTRIBUTE: &'static str = "CoupledBC";

    /// Base category every coupled condition registers under.
    pub const BASE: &'static str = "CoupledBC";

    /// Create parameters for a solver variable, applying to all boundaries.
    pub fn new(solver_variable: impl Into<String>) -> Self {
        Self {
            solver_variable: solver_variable.into(),
            ..Default::default()
        }
    }

    /// Restrict the condition to the given boundaries.
    pub fn with_boundary<I, S>(mut self, boundary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boundary = boundary.into_iter().map(Into::into).collect();
        self
    }

    /// Set a numeric parameter.
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Get a numeric parameter.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get a numeric parameter the condition cannot do without.
    pub fn required_value(&self, key: &'static str) -> BcResult<f64> {
        self.value(key).ok_or(BcError::MissingParameter(key))
    }

    /// Check that required parameters are present.
    pub fn validate(&self) -> BcResult<()> {
        if self.solver_variable.trim().is_empty() {
            return Err(BcError::MissingParameter("solver_variable"));
        }
        Ok(())
    }
}

/// A configured condition: registered type name plus its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BcSpec {
    /// Registered type name, e.g. `"FixedValue"`
    #[serde(rename = "type")]
    pub bc_type: String,
    /// Parameters passed to the constructor
    #[serde(flatten)]
    pub params: BcParams,
}

impl BcSpec {
    /// Create a spec.
    pub fn new(bc_type: impl Into<String>, params: BcParams) -> Self {
        Self {
            bc_type: bc_type.into(),
            params,
        }
    }
}
