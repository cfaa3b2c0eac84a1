//! Boundary field storage.
//!
//! Holds, for each solver variable and each boundary, the face values a
//! boundary condition writes and the adjacent interior values it may read.

use std::collections::BTreeMap;

use crate::error::{BcError, BcResult};
use crate::mesh::ExternalMesh;
use crate::types::FaceIndex;

/// Values of one variable on one boundary patch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchField {
    /// Values on the boundary faces
    pub face: Vec<f64>,
    /// Values in the cells adjacent to each face
    pub interior: Vec<f64>,
}

impl PatchField {
    /// Create a zero-initialised patch field with `n_faces` faces.
    pub fn new(n_faces: usize) -> Self {
        Self {
            face: vec![0.0; n_faces],
            interior: vec![0.0; n_faces],
        }
    }

    /// Create a patch field from interior values; faces start at zero.
    pub fn from_interior(interior: Vec<f64>) -> Self {
        Self {
            face: vec![0.0; interior.len()],
            interior,
        }
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.face.len()
    }

    /// Check if the patch has no faces.
    pub fn is_empty(&self) -> bool {
        self.face.is_empty()
    }

    /// Check that every face has an interior value.
    ///
    /// # Errors
    /// `BcError::FieldLength` if the two value arrays differ in length.
    pub fn check_lengths(&self, variable: &str, boundary: &str) -> BcResult<()> {
        if self.face.len() != self.interior.len() {
            return Err(BcError::FieldLength {
                variable: variable.to_string(),
                boundary: boundary.to_string(),
                face: self.face.len(),
                interior: self.interior.len(),
            });
        }
        Ok(())
    }

    /// Value on a face.
    pub fn face_value(&self, face: FaceIndex) -> Option<f64> {
        self.face.get(face.get()).copied()
    }
}

/// Boundary values of all coupled variables, keyed by variable then boundary.
#[derive(Clone, Debug, Default)]
pub struct BoundaryFields {
    fields: BTreeMap<String, BTreeMap<String, PatchField>>,
}

impl BoundaryFields {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate zeroed fields for each variable on every mesh subdomain.
    pub fn for_mesh(mesh: &dyn ExternalMesh, variables: &[&str]) -> Self {
        let ids = mesh.subdomain_list();
        let names = mesh.subdomain_names(ids);

        let mut store = Self::new();
        for variable in variables {
            for (&id, name) in ids.iter().zip(&names) {
                let n_faces = mesh.patch_size(id).unwrap_or(0);
                store.insert(*variable, name.clone(), PatchField::new(n_faces));
            }
        }
        store
    }

    /// Insert or replace the field of a variable on a boundary.
    pub fn insert(
        &mut self,
        variable: impl Into<String>,
        boundary: impl Into<String>,
        field: PatchField,
    ) {
        self.fields
            .entry(variable.into())
            .or_default()
            .insert(boundary.into(), field);
    }

    /// Field of a variable on a boundary.
    pub fn get(&self, variable: &str, boundary: &str) -> Option<&PatchField> {
        self.fields.get(variable)?.get(boundary)
    }

    /// Mutable field of a variable on a boundary.
    ///
    /// # Errors
    /// `BcError::MissingField` if no such field is stored.
    pub fn patch_mut(&mut self, variable: &str, boundary: &str) -> BcResult<&mut PatchField> {
        self.fields
            .get_mut(variable)
            .and_then(|by_boundary| by_boundary.get_mut(boundary))
            .ok_or_else(|| BcError::missing_field(variable, boundary))
    }

    /// Number of stored (variable, boundary) fields.
    pub fn len(&self) -> usize {
        self.fields.values().map(BTreeMap::len).sum()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Patch, PatchKind, PatchMesh};

    #[test]
    fn test_for_mesh_allocates_every_patch() {
        let mesh = PatchMesh::new(vec![
            Patch::new(0, "inlet", PatchKind::Patch, 3),
            Patch::wall(1, "wall", 5),
        ]);
        let fields = BoundaryFields::for_mesh(&mesh, &["T", "p"]);

        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get("T", "inlet").unwrap().len(), 3);
        assert_eq!(fields.get("p", "wall").unwrap().len(), 5);
        assert!(fields.get("U", "wall").is_none());
    }

    #[test]
    fn test_patch_mut_missing() {
        let mut fields = BoundaryFields::new();
        fields.insert("T", "wall", PatchField::new(2));

        assert!(fields.patch_mut("T", "wall").is_ok());
        assert_eq!(
            fields.patch_mut("T", "inlet").unwrap_err(),
            BcError::missing_field("T", "inlet")
        );
    }

    #[test]
    fn test_check_lengths() {
        let mut field = PatchField::new(3);
        assert!(field.check_lengths("T", "wall").is_ok());

        field.interior.pop();
        assert_eq!(
            field.check_lengths("T", "wall").unwrap_err(),
            BcError::FieldLength {
                variable: "T".to_string(),
                boundary: "wall".to_string(),
                face: 3,
                interior: 2,
            }
        );
    }

    #[test]
    fn test_face_value() {
        let mut field = PatchField::from_interior(vec![1.0, 2.0]);
        field.face[1] = 4.0;

        assert_eq!(field.face_value(FaceIndex::new(1)), Some(4.0));
        assert_eq!(field.face_value(FaceIndex::new(2)), None);
    }
}
