use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use slotmap::SlotMap;
use std::collections::HashMap;

/// An immutable structure model: chains of residues of atoms.
///
/// The model is the single input every metric operates on. It is built once
/// by a loader (or a test fixture) through the `add_*` methods and then only
/// read; no mutation or removal API exists. Chain order matters — several
/// metrics are defined over "the first two chains by model order" — so the
/// model keeps an explicit order vector alongside the arena storage.
#[derive(Debug, Clone, Default)]
pub struct StructureModel {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Chain IDs in model (file) order.
    chain_order: Vec<ChainId>,
    /// Lookup map for finding chains by their identifier.
    chain_id_map: HashMap<String, ChainId>,
    /// Lookup map for finding residues by chain ID and residue number.
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
}

impl StructureModel {
    /// Creates a new, empty structure model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all residues in the system.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Returns an iterator over the chains in model order.
    pub fn chains_in_order(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Returns an iterator over the residues of a chain in model order.
    pub fn chain_residues(&self, chain_id: ChainId) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.chains
            .get(chain_id)
            .into_iter()
            .flat_map(|chain| chain.residues.iter())
            .filter_map(|&res_id| self.residues.get(res_id).map(|residue| (res_id, residue)))
    }

    /// Returns an iterator over the atoms of a residue in model order.
    pub fn residue_atoms(&self, residue_id: ResidueId) -> impl Iterator<Item = &Atom> {
        self.residues
            .get(residue_id)
            .into_iter()
            .flat_map(|residue| residue.atoms.iter())
            .filter_map(|&atom_id| self.atoms.get(atom_id))
    }

    /// Returns an iterator over every atom in model order.
    ///
    /// Model order (chains → residues → atoms as they appeared in the source
    /// file) is the canonical iteration order; all metrics that depend on
    /// atom enumeration use it so results are deterministic.
    pub fn atoms_in_order(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.chains_in_order()
            .flat_map(|(_, chain)| chain.residues.iter().copied())
            .filter_map(|res_id| self.residues.get(res_id))
            .flat_map(|residue| residue.atoms.iter().copied())
            .filter_map(|atom_id| self.atoms.get(atom_id).map(|atom| (atom_id, atom)))
    }

    /// Number of chains in the model.
    pub fn chain_count(&self) -> usize {
        self.chain_order.len()
    }

    /// Number of atoms in the model.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Finds a chain ID by its identifier.
    pub fn find_chain_by_id(&self, id: &str) -> Option<ChainId> {
        self.chain_id_map.get(id).copied()
    }

    /// Finds a residue ID by its chain ID and residue number.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Adds a new chain to the model or returns the existing one.
    ///
    /// Idempotent; a chain that already exists keeps its position in the
    /// model order.
    pub fn add_chain(&mut self, id: &str) -> ChainId {
        let id = id.trim();
        if let Some(&existing) = self.chain_id_map.get(id) {
            return existing;
        }
        let chain_id = self.chains.insert(Chain::new(id));
        self.chain_id_map.insert(id.to_string(), chain_id);
        self.chain_order.push(chain_id);
        chain_id
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// Idempotent on (chain, residue number).
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if the chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (e.g., if the residue doesn't exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }

        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);

        let residue = self.residues.get_mut(residue_id).unwrap();
        residue.add_atom(&name, atom_id);

        Some(atom_id)
    }
}
