//! Patch kinds for boundary regions of the external mesh.
//!
//! Each boundary patch of the external CFD case carries a type that tells
//! the host which kinds of coupled boundary condition make sense on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a boundary patch in the external mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchKind {
    /// Solid wall (no-slip, heat transfer surface)
    Wall,

    /// Generic patch (inlet, outlet, far field)
    Patch,

    /// Symmetry plane
    Symmetry,

    /// Empty patch of a 2D or 1D case
    Empty,

    /// Cyclic patch paired with another patch
    /// The value is the id of the neighbour patch
    Cyclic(usize),
}

impl PatchKind {
    /// Check if this is a solid wall.
    pub fn is_wall(&self) -> bool {
        matches!(self, PatchKind::Wall)
    }

    /// Check if this is a cyclic patch.
    pub fn is_cyclic(&self) -> bool {
        matches!(self, PatchKind::Cyclic(_))
    }

    /// Check if a boundary condition can be imposed on this patch.
    ///
    /// Empty, symmetry and cyclic patches are constrained by the external
    /// solver itself.
    pub fn is_constrained(&self) -> bool {
        matches!(self, PatchKind::Empty | PatchKind::Symmetry | PatchKind::Cyclic(_))
    }
}

impl Default for PatchKind {
    fn default() -> Self {
        PatchKind::Patch
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchKind::Wall => write!(f, "wall"),
            PatchKind::Patch => write!(f, "patch"),
            PatchKind::Symmetry => write!(f, "symmetry"),
            PatchKind::Empty => write!(f, "empty"),
            PatchKind::Cyclic(neighbour) => write!(f, "cyclic({neighbour})"),
        }
    }
}
