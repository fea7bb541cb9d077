//! Shared residue and element classification tables.
//!
//! Every metric derives its atom subsets from these tables, so they live in
//! one place: the three residue name sets are pairwise disjoint, and a
//! residue whose name appears in none of them is a ligand candidate once it
//! clears the atom-count threshold.

use phf::{Map, Set, phf_map, phf_set};

/// The 20 standard amino-acid residue codes.
static PROTEIN_RESIDUES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLU", "GLN", "GLY", "HIS",
    "ILE", "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP",
    "TYR", "VAL",
};

/// DNA and RNA residue codes.
static NUCLEIC_RESIDUES: Set<&'static str> = phf_set! {
    "DA", "DT", "DG", "DC",
    "A", "U", "G", "C",
};

/// Solvent and common monatomic ions, excluded from every interface metric.
static EXCLUDED_RESIDUES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "NA", "CL", "K", "MG", "ZN", "CA",
};

/// Positively charged protein residues (electrostatic interface filter).
static POSITIVE_RESIDUES: Set<&'static str> = phf_set! {
    "ARG", "LYS", "HIS",
};

/// Nucleic-acid backbone phosphate atom names, both naming conventions.
static PHOSPHATE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "P", "OP1", "OP2", "O1P", "O2P",
};

/// Van-der-Waals radii in Angstroms, keyed by uppercase element symbol.
static VDW_RADII: Map<&'static str, f64> = phf_map! {
    "H" => 1.20,
    "C" => 1.70,
    "N" => 1.55,
    "O" => 1.52,
    "F" => 1.47,
    "P" => 1.80,
    "S" => 1.80,
    "CL" => 1.75,
    "BR" => 1.85,
    "I" => 1.98,
};

/// Minimum atom count for a non-polymer residue name to count as a ligand.
///
/// Discriminates true small molecules from modified residues, caps, and
/// monatomic ions or crystallization additives.
pub const LIGAND_MIN_ATOMS: usize = 8;

/// Coarse classification of a residue name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    /// Standard amino acid.
    Protein,
    /// DNA or RNA nucleotide.
    Nucleic,
    /// Solvent or ion, excluded from all metrics.
    Excluded,
    /// None of the above; a ligand candidate.
    Other,
}

/// Classifies a residue name into one of the four coarse classes.
///
/// Matching is exact on the trimmed name; source files use uppercase codes.
pub fn classify_residue(name: &str) -> ResidueClass {
    let name = name.trim();
    if PROTEIN_RESIDUES.contains(name) {
        ResidueClass::Protein
    } else if NUCLEIC_RESIDUES.contains(name) {
        ResidueClass::Nucleic
    } else if EXCLUDED_RESIDUES.contains(name) {
        ResidueClass::Excluded
    } else {
        ResidueClass::Other
    }
}

pub fn is_protein_residue(name: &str) -> bool {
    PROTEIN_RESIDUES.contains(name.trim())
}

pub fn is_nucleic_residue(name: &str) -> bool {
    NUCLEIC_RESIDUES.contains(name.trim())
}

pub fn is_excluded_residue(name: &str) -> bool {
    EXCLUDED_RESIDUES.contains(name.trim())
}

/// Whether the residue carries a positively charged side chain (ARG/LYS/HIS).
pub fn is_positive_residue(name: &str) -> bool {
    POSITIVE_RESIDUES.contains(name.trim())
}

/// Whether the atom name belongs to the nucleic backbone phosphate group.
pub fn is_phosphate_atom(name: &str) -> bool {
    PHOSPHATE_ATOM_NAMES.contains(name.trim())
}

/// Van-der-Waals radius for an uppercase element symbol, if tabulated.
pub fn vdw_radius(element: &str) -> Option<f64> {
    VDW_RADII.get(element.trim()).copied()
}
