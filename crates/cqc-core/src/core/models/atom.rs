use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents a single atom of a loaded structure model.
///
/// Atoms are immutable values once the model is built: every metric reads
/// them, none mutates them. The serial id comes from the source file and is
/// unique within one model; the element symbol is stored uppercased so it
/// can be used directly as a lookup key into the Van-der-Waals radius table.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial id from the source file, unique within the model.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "OP1").
    pub name: String,
    /// Uppercase element symbol (e.g., "C", "CL").
    pub element: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// The element symbol is uppercased and trimmed on construction so all
    /// downstream element lookups operate on a canonical form.
    ///
    /// # Arguments
    ///
    /// * `serial` - Serial id from the source file.
    /// * `name` - The name of the atom.
    /// * `element` - Element symbol in any case (e.g., "Cl").
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        serial: usize,
        name: &str,
        element: &str,
        residue_id: ResidueId,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.trim().to_string(),
            element: element.trim().to_ascii_uppercase(),
            residue_id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::ResidueId;
    use nalgebra::Point3;

    #[test]
    fn new_atom_stores_fields() {
        let residue_id = ResidueId::default();
        let atom = Atom::new(7, "CA", "C", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, 7);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.element, "C");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn new_atom_canonicalizes_element_symbol() {
        let residue_id = ResidueId::default();
        let atom = Atom::new(1, "CL1", " Cl ", residue_id, Point3::origin());
        assert_eq!(atom.element, "CL");

        let atom = Atom::new(2, "BR1", "br", residue_id, Point3::origin());
        assert_eq!(atom.element, "BR");
    }

    #[test]
    fn new_atom_trims_name() {
        let atom = Atom::new(3, " OP1 ", "O", ResidueId::default(), Point3::origin());
        assert_eq!(atom.name, "OP1");
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(1, "N", "N", ResidueId::default(), Point3::origin());
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
