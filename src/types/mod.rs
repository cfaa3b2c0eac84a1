//! Strongly-typed identifiers.
//!
//! Subdomain ids and face indices are both plain integers on the external
//! side; the newtypes keep them from being mixed up.

mod indices;

pub use indices::{FaceIndex, SubdomainId};
