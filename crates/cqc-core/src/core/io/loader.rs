use crate::core::models::atom::Atom;
use crate::core::models::system::StructureModel;
use nalgebra::Point3;
use pdbtbx::{Format, ReadOptions, StrictnessLevel};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while resolving a coordinate file into a [`StructureModel`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("structure file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse structure file '{path}': {details}", path = path.display())]
    Parse { path: PathBuf, details: String },

    #[error("structure file contains no atoms: {0}")]
    Empty(PathBuf),
}

/// Loads a coordinate file (PDB or mmCIF, chosen by extension) into a
/// [`StructureModel`].
///
/// Parsing is delegated to `pdbtbx` in loose mode; recoverable parser
/// diagnostics are logged and ignored, breaking ones become
/// [`LoadError::Parse`]. The flattened model keeps chains, residues, and
/// atoms in file order.
///
/// # Errors
///
/// [`LoadError::NotFound`] if the path does not exist, [`LoadError::Parse`]
/// if the file cannot be read or parsed, [`LoadError::Empty`] if the parsed
/// model holds no atoms.
pub fn load_structure(path: &Path) -> Result<StructureModel, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let format = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("cif") || ext.eq_ignore_ascii_case("mmcif") => {
            Format::Mmcif
        }
        _ => Format::Pdb,
    };

    let file = File::open(path).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let (pdb, warnings) = ReadOptions::default()
        .set_level(StrictnessLevel::Loose)
        .set_format(format)
        .read_raw(BufReader::new(file))
        .map_err(|errors| LoadError::Parse {
            path: path.to_path_buf(),
            details: errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        })?;

    for warning in &warnings {
        debug!(file = %path.display(), "parser diagnostic: {warning}");
    }

    let mut model = StructureModel::new();
    for chain in pdb.chains() {
        let chain_id = model.add_chain(chain.id());
        for residue in chain.residues() {
            let name = residue.name().map(|n| n.to_string()).unwrap_or_default();
            let Some(residue_id) = model.add_residue(chain_id, residue.serial_number(), &name)
            else {
                continue;
            };
            for atom in residue.atoms() {
                let element = atom
                    .element()
                    .map(|e| e.symbol().to_string())
                    .unwrap_or_else(|| guess_element(atom.name()));
                let (x, y, z) = atom.pos();
                model.add_atom_to_residue(
                    residue_id,
                    Atom::new(
                        atom.serial_number(),
                        atom.name(),
                        &element,
                        residue_id,
                        Point3::new(x, y, z),
                    ),
                );
            }
        }
    }

    if model.atom_count() == 0 {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    debug!(
        file = %path.display(),
        chains = model.chain_count(),
        atoms = model.atom_count(),
        "structure loaded"
    );

    Ok(model)
}

/// Falls back to the leading alphabetic character of the atom name when the
/// file carries no element column. Correct for organic elements; two-letter
/// elements in name-only files are resolved to their first letter.
fn guess_element(atom_name: &str) -> String {
    atom_name
        .trim()
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}
