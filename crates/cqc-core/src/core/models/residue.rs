use super::ids::{AtomId, ChainId};
use std::collections::HashMap;

/// Atom name of the alpha carbon that anchors a polymer residue.
pub const ALPHA_CARBON: &str = "CA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub id: isize,                          // Residue sequence number from the source file
    pub name: String,                       // Name of the residue (e.g., "ALA", "DA", "LIG")
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // IDs of atoms belonging to this residue, in file order
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(id: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    /// Whether this residue has a defined alpha carbon.
    pub fn has_alpha_carbon(&self) -> bool {
        self.atom_name_map.contains_key(ALPHA_CARBON)
    }
}
