//! # coupled-bc
//!
//! Boundary conditions that couple a host finite-element solver to an
//! externally meshed CFD solver.
//!
//! This crate provides the building blocks for imposing conditions on the
//! external solver's boundaries:
//! - Boundary name resolution against the external mesh catalog
//! - The shared base every coupled boundary condition is built on
//! - Typed access to the owning coupled problem and its mesh
//! - A registry building conditions by type name
//! - Tabular diagnostics of the configured conditions
//!
//! # Example
//! ```
//! use coupled_bc::{
//!     BcParams, BcRegistry, CoupledBoundaryCondition, CoupledProblem, Patch, PatchKind, PatchMesh,
//!     TransferConfig,
//! };
//!
//! let mesh = PatchMesh::new(vec![
//!     Patch::new(0, "inlet", PatchKind::Patch, 4),
//!     Patch::new(1, "outlet", PatchKind::Patch, 4),
//!     Patch::wall(2, "wall", 32),
//! ]);
//! let problem = CoupledProblem::new(mesh, TransferConfig::default()).unwrap();
//!
//! let params = BcParams::new("T").with_boundary(["inlet", "wall"]).with_value("value", 300.0);
//! let bc = BcRegistry::with_builtin()
//!     .build("FixedValue", &params, problem.context())
//!     .unwrap();
//! assert_eq!(bc.boundaries(), &["inlet", "wall"]);
//! ```

pub mod boundary;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod mesh;
pub mod problem;
pub mod types;

pub use boundary::{
    BcConstructor, BcRegistry, CoupledBCBase, CoupledBCSystem, CoupledBoundaryCondition,
    FixedValueBC, ZeroGradientBC, resolve_boundaries,
};
pub use config::{BcParams, BcSpec};
pub use diagnostics::{InfoTable, list_from_vec};
pub use error::{BcError, BcResult};
pub use field::{BoundaryFields, PatchField};
pub use mesh::{ExternalMesh, Patch, PatchKind, PatchMesh};
pub use problem::{
    CoupledProblem, ProblemContext, SimulationProblem, StandaloneProblem, SyncDirection,
    SyncVariables, TransferConfig,
};
pub use types::{FaceIndex, SubdomainId};
