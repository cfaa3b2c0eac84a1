//! Strongly-typed index newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Subdomain id in the external mesh.
    ///
    /// Mirrors the external solver's patch id, so the same number names the
    /// same region on both sides of the coupling.
    ///
    /// # Example
    ///
    /// ```
    /// use coupled_bc::types::SubdomainId;
    ///
    /// let id = SubdomainId::new(3);
    /// assert_eq!(id.get(), 3);
    /// assert_eq!(id.to_string(), "subdomain3");
    /// ```
    SubdomainId,
    "subdomain"
);

define_index!(
    /// Face index local to one boundary patch.
    FaceIndex,
    "f"
);
