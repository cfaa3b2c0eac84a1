//! Error type shared by every coupled boundary condition operation.

use thiserror::Error;

/// Errors raised while assembling or running coupled boundary conditions.
///
/// Construction-time variants (`IncompatibleProblem`, `UnknownBoundary`,
/// `MissingParameter`) are fatal: no boundary condition object exists when
/// they are returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BcError {
    /// The owning problem does not expose an external mesh.
    #[error("coupled boundary conditions can only be used with a coupled problem, got '{problem_type}'")]
    IncompatibleProblem { problem_type: String },

    /// A configured boundary is not part of the mesh catalog.
    #[error("boundary '{boundary}' not found in the external mesh")]
    UnknownBoundary { boundary: String },

    /// A required parameter is missing or empty.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// A requested patch does not exist in the external case.
    #[error("patch '{patch}' not found in the external case")]
    UnknownPatch { patch: String },

    /// Two transfer parameters point at the same variable.
    #[error("parameters '{first}' and '{second}' cannot refer to the same variable: '{variable}'")]
    ConflictingTransfer {
        first: &'static str,
        second: &'static str,
        variable: String,
    },

    /// No constructor is registered under this type name.
    #[error("unknown coupled boundary condition type '{0}'")]
    UnknownBcType(String),

    /// A diagnostics row does not match the table header.
    #[error("info row has {actual} columns, table expects {expected}")]
    InfoRowWidth { expected: usize, actual: usize },

    /// `apply` was requested before the one-time setup ran.
    #[error("boundary conditions applied before initial setup")]
    SetupNotRun,

    /// The field store has no data for a variable on a boundary.
    #[error("no field data for variable '{variable}' on boundary '{boundary}'")]
    MissingField { variable: String, boundary: String },

    /// Face and interior values of a patch field differ in length.
    #[error(
        "field '{variable}' on boundary '{boundary}' has {face} face values but {interior} interior values"
    )]
    FieldLength {
        variable: String,
        boundary: String,
        face: usize,
        interior: usize,
    },

    /// A prescribed value is NaN or infinite.
    #[error("non-finite value {value} prescribed for variable '{variable}'")]
    NonFiniteValue { variable: String, value: f64 },
}

impl BcError {
    /// Create an unknown-boundary error.
    pub fn unknown_boundary(boundary: impl Into<String>) -> Self {
        Self::UnknownBoundary {
            boundary: boundary.into(),
        }
    }

    /// Create an incompatible-problem error.
    pub fn incompatible_problem(problem_type: impl Into<String>) -> Self {
        Self::IncompatibleProblem {
            problem_type: problem_type.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(variable: impl Into<String>, boundary: impl Into<String>) -> Self {
        Self::MissingField {
            variable: variable.into(),
            boundary: boundary.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type BcResult<T> = Result<T, BcError>;
