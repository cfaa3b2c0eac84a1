//! Boundary name resolution against the mesh catalog.
//!
//! Boundary names are shared between two independently versioned solvers.
//! A renamed or mistyped boundary must fail at setup instead of silently
//! selecting nothing.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{BcError, BcResult};

/// Validate and normalize the boundaries a condition will operate on.
///
/// # Arguments
/// * `requested` - Configured boundary names, possibly empty
/// * `catalog` - Every subdomain name known to the external mesh
///
/// # Returns
/// * `catalog` in its own order if `requested` is empty
/// * `requested` unchanged (order and duplicates kept) otherwise
///
/// # Errors
/// `BcError::UnknownBoundary` naming the first requested entry, in input
/// order, that is missing from `catalog`.
///
/// # Example
/// ```
/// use coupled_bc::boundary::resolve_boundaries;
///
/// let catalog = vec!["inlet".to_string(), "outlet".to_string(), "wall".to_string()];
/// assert_eq!(resolve_boundaries(&[], &catalog).unwrap(), catalog);
/// assert!(resolve_boundaries(&["ceiling".to_string()], &catalog).is_err());
/// ```
pub fn resolve_boundaries(requested: &[String], catalog: &[String]) -> BcResult<Vec<String>> {
    if requested.is_empty() {
        debug!(n_boundaries = catalog.len(), "no boundaries given, using whole catalog");
        return Ok(catalog.to_vec());
    }

    let known: HashSet<&str> = catalog.iter().map(String::as_str).collect();
    if let Some(unknown) = requested.iter().find(|name| !known.contains(name.as_str())) {
        return Err(BcError::unknown_boundary(unknown.as_str()));
    }

    debug!(n_boundaries = requested.len(), "boundaries validated");
    Ok(requested.to_vec())
}
