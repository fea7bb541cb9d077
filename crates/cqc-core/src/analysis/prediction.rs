use crate::core::chem::{ResidueClass, classify_residue};
use crate::core::models::system::StructureModel;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// The interaction category of a predicted complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    ProteinLigand,
    ProteinDnaRna,
    ProteinProtein,
    ProteinOnly,
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PredictionType::ProteinLigand => "protein_ligand",
                PredictionType::ProteinDnaRna => "protein_dna_rna",
                PredictionType::ProteinProtein => "protein_protein",
                PredictionType::ProteinOnly => "protein_only",
            }
        )
    }
}

/// Classifies a model into its interaction category.
///
/// One scan over the residues collects three facts: whether any residue is a
/// ligand candidate name (non-protein, non-nucleic, non-excluded — atom count
/// is deliberately not consulted here), whether any nucleic residue exists,
/// and how many distinct chains own residues. The category is then decided
/// by a fixed priority, not by enumerating every present category:
/// ligand > nucleic > multiple chains > single chain. A complex holding both
/// a ligand and a nucleic chain is therefore always `protein_ligand`.
pub fn detect_prediction_type(model: &StructureModel) -> PredictionType {
    let mut chains = HashSet::new();
    let mut has_ligand = false;
    let mut has_nucleic = false;

    for (_, residue) in model.residues_iter() {
        chains.insert(residue.chain_id);
        match classify_residue(&residue.name) {
            ResidueClass::Nucleic => has_nucleic = true,
            ResidueClass::Other => has_ligand = true,
            ResidueClass::Protein | ResidueClass::Excluded => {}
        }
    }

    let prediction_type = if has_ligand {
        PredictionType::ProteinLigand
    } else if has_nucleic {
        PredictionType::ProteinDnaRna
    } else if chains.len() > 1 {
        PredictionType::ProteinProtein
    } else {
        PredictionType::ProteinOnly
    };

    debug!(%prediction_type, chains = chains.len(), "model classified");
    prediction_type
}
