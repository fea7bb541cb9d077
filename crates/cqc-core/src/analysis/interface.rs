//! Protein–protein interface metrics.

use super::contacts::{ContactFinder, GridContacts};
use super::error::{AnalysisError, AnalysisResult};
use super::round2;
use crate::core::models::ids::ChainId;
use crate::core::models::system::StructureModel;
use crate::core::surface::{SurfaceAtom, SurfaceCalculator};
use nalgebra::Point3;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Default atom-distance cutoff for residue-level interface contacts.
pub const DEFAULT_OVERLAP_CUTOFF: f64 = 5.0;

/// Surface area buried between the first two chains of a complex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuriedSurfaceArea {
    #[serde(rename = "chain_A")]
    pub chain_a: String,
    #[serde(rename = "chain_B")]
    pub chain_b: String,
    #[serde(rename = "sasa_chain_A")]
    pub sasa_chain_a: f64,
    #[serde(rename = "sasa_chain_B")]
    pub sasa_chain_b: f64,
    pub sasa_complex: f64,
    pub buried_surface_area: f64,
    pub units: &'static str,
}

/// Residue-level contact counts across the first two chains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactResidueOverlap {
    #[serde(rename = "chain_A_contact_residues")]
    pub chain_a_contact_residues: usize,
    #[serde(rename = "chain_B_contact_residues")]
    pub chain_b_contact_residues: usize,
    pub shared_interface_contacts: usize,
    #[serde(rename = "contact_cutoff_angstrom")]
    pub cutoff: f64,
}

/// Computes the buried surface area between the first two chains by model
/// order: `SASA(A) + SASA(B) − SASA(complex)`. The complex term covers every
/// atom of the model.
///
/// # Errors
///
/// `InsufficientData` if the model has fewer than two chains; surface
/// capability failures are propagated.
pub fn buried_surface_area<S: SurfaceCalculator>(
    model: &StructureModel,
    surface: &S,
) -> AnalysisResult<BuriedSurfaceArea> {
    let chains: Vec<(ChainId, &str)> = model
        .chains_in_order()
        .map(|(id, chain)| (id, chain.id.as_str()))
        .collect();
    if chains.len() < 2 {
        return Err(AnalysisError::insufficient(
            "buried_surface_area",
            "protein-protein complex requires at least 2 chains",
        ));
    }
    let (chain_a_id, chain_a_label) = chains[0];
    let (chain_b_id, chain_b_label) = chains[1];

    let complex_atoms: Vec<SurfaceAtom> = model
        .atoms_in_order()
        .map(|(_, atom)| SurfaceAtom::from_atom(atom))
        .collect();
    let sasa_complex = surface.total_area(&complex_atoms)?;

    let sasa_chain_a = surface.total_area(&chain_surface_atoms(model, chain_a_id))?;
    let sasa_chain_b = surface.total_area(&chain_surface_atoms(model, chain_b_id))?;

    let buried = (sasa_chain_a + sasa_chain_b) - sasa_complex;
    debug!(
        chain_a = chain_a_label,
        chain_b = chain_b_label,
        buried, "buried surface measured"
    );

    Ok(BuriedSurfaceArea {
        chain_a: chain_a_label.to_string(),
        chain_b: chain_b_label.to_string(),
        sasa_chain_a: round2(sasa_chain_a),
        sasa_chain_b: round2(sasa_chain_b),
        sasa_complex: round2(sasa_complex),
        buried_surface_area: round2(buried),
        units: "Å²",
    })
}

fn chain_surface_atoms(model: &StructureModel, chain_id: ChainId) -> Vec<SurfaceAtom> {
    model
        .chain_residues(chain_id)
        .flat_map(|(residue_id, _)| model.residue_atoms(residue_id))
        .map(SurfaceAtom::from_atom)
        .collect()
}

/// Counts interface residues across the first two chains: a residue pair is
/// in contact when any atom pair falls within the cutoff (scanning stops at
/// the first hit), and only residues with a defined alpha carbon take part.
///
/// Zero contacts is a valid all-zero result.
///
/// # Errors
///
/// `InsufficientData` if the model has fewer than two chains.
pub fn contact_residue_overlap(
    model: &StructureModel,
    cutoff: f64,
) -> AnalysisResult<ContactResidueOverlap> {
    let chains: Vec<ChainId> = model.chains_in_order().map(|(id, _)| id).collect();
    if chains.len() < 2 {
        return Err(AnalysisError::insufficient(
            "contact_residue_overlap",
            "protein-protein interface requires at least 2 chains",
        ));
    }

    let residues_a = anchored_residue_positions(model, chains[0]);
    let residues_b = anchored_residue_positions(model, chains[1]);

    let mut contacts_a: HashSet<isize> = HashSet::new();
    let mut contacts_b: HashSet<isize> = HashSet::new();
    let mut shared: HashSet<(isize, isize)> = HashSet::new();

    for (id_a, atoms_a) in &residues_a {
        for (id_b, atoms_b) in &residues_b {
            if GridContacts.have_contact(atoms_a, atoms_b, cutoff) {
                contacts_a.insert(*id_a);
                contacts_b.insert(*id_b);
                shared.insert((*id_a, *id_b));
            }
        }
    }

    debug!(
        chain_a = contacts_a.len(),
        chain_b = contacts_b.len(),
        shared = shared.len(),
        "interface residues counted"
    );

    Ok(ContactResidueOverlap {
        chain_a_contact_residues: contacts_a.len(),
        chain_b_contact_residues: contacts_b.len(),
        shared_interface_contacts: shared.len(),
        cutoff,
    })
}

/// Residue ids and atom positions for residues of one chain that carry an
/// alpha carbon.
fn anchored_residue_positions(
    model: &StructureModel,
    chain_id: ChainId,
) -> Vec<(isize, Vec<Point3<f64>>)> {
    model
        .chain_residues(chain_id)
        .filter(|(_, residue)| residue.has_alpha_carbon())
        .map(|(residue_id, residue)| {
            (
                residue.id,
                model
                    .residue_atoms(residue_id)
                    .map(|atom| atom.position)
                    .collect(),
            )
        })
        .collect()
}
