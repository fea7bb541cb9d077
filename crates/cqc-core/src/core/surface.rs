//! Solvent-accessible surface area as an injectable capability.
//!
//! The metrics never compute surface areas themselves; they hand a set of
//! spheres to a [`SurfaceCalculator`]. Evaluating the same atoms once as part
//! of the full complex and once in isolation is how burial is measured, so
//! the trait exposes per-atom areas, not just totals.

use crate::core::chem::vdw_radius;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use thiserror::Error;
use voronota::{Ball, RadicalTessellation};

/// Water-probe radius in Angstroms used by default.
pub const DEFAULT_PROBE_RADIUS: f64 = 1.4;

/// Radius assigned to elements outside the Van-der-Waals table.
const FALLBACK_ATOM_RADIUS: f64 = 1.5;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface evaluation requires at least one atom")]
    EmptySelection,
}

/// A sphere handed to the surface calculator: position plus element radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceAtom {
    pub position: Point3<f64>,
    pub radius: f64,
}

impl SurfaceAtom {
    /// Builds the surface sphere for a model atom from its element radius.
    pub fn from_atom(atom: &Atom) -> Self {
        Self {
            position: atom.position,
            radius: vdw_radius(&atom.element).unwrap_or(FALLBACK_ATOM_RADIUS),
        }
    }
}

/// Computes solvent-accessible surface areas over a set of atoms.
pub trait SurfaceCalculator {
    /// Per-atom accessible areas, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::EmptySelection`] for an empty atom set.
    fn atom_areas(&self, atoms: &[SurfaceAtom]) -> Result<Vec<f64>, SurfaceError>;

    /// Total accessible area of the set.
    fn total_area(&self, atoms: &[SurfaceAtom]) -> Result<f64, SurfaceError> {
        Ok(self.atom_areas(atoms)?.iter().sum())
    }
}

/// Surface calculator backed by a Voronota radical tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronotaSurface {
    probe_radius: f64,
}

impl VoronotaSurface {
    pub fn new(probe_radius: f64) -> Self {
        Self { probe_radius }
    }

    pub fn probe_radius(&self) -> f64 {
        self.probe_radius
    }
}

impl Default for VoronotaSurface {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_RADIUS)
    }
}

impl SurfaceCalculator for VoronotaSurface {
    fn atom_areas(&self, atoms: &[SurfaceAtom]) -> Result<Vec<f64>, SurfaceError> {
        if atoms.is_empty() {
            return Err(SurfaceError::EmptySelection);
        }
        let balls: Vec<Ball> = atoms
            .iter()
            .map(|atom| Ball {
                x: atom.position.x,
                y: atom.position.y,
                z: atom.position.z,
                r: atom.radius,
            })
            .collect();
        let tessellation = RadicalTessellation::from_balls(self.probe_radius, &balls, None);
        Ok((0..balls.len())
            .map(|i| tessellation.available_area(i))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere_area(radius: f64) -> f64 {
        4.0 * std::f64::consts::PI * radius * radius
    }

    #[test]
    fn empty_selection_is_rejected() {
        let surface = VoronotaSurface::default();
        assert!(matches!(
            surface.atom_areas(&[]),
            Err(SurfaceError::EmptySelection)
        ));
    }

    #[test]
    fn isolated_atom_exposes_its_full_probe_extended_sphere() {
        let surface = VoronotaSurface::default();
        let atom = SurfaceAtom {
            position: Point3::origin(),
            radius: 1.7,
        };
        let total = surface.total_area(&[atom]).unwrap();
        assert_relative_eq!(
            total,
            sphere_area(1.7 + DEFAULT_PROBE_RADIUS),
            max_relative = 1e-6
        );
    }

    #[test]
    fn far_apart_atoms_do_not_shadow_each_other() {
        let surface = VoronotaSurface::default();
        let atoms = [
            SurfaceAtom {
                position: Point3::new(0.0, 0.0, 0.0),
                radius: 1.7,
            },
            SurfaceAtom {
                position: Point3::new(100.0, 0.0, 0.0),
                radius: 1.52,
            },
        ];
        let areas = surface.atom_areas(&atoms).unwrap();
        assert_relative_eq!(
            areas[0],
            sphere_area(1.7 + DEFAULT_PROBE_RADIUS),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            areas[1],
            sphere_area(1.52 + DEFAULT_PROBE_RADIUS),
            max_relative = 1e-6
        );
    }

    #[test]
    fn close_atoms_bury_surface() {
        let surface = VoronotaSurface::default();
        let isolated = SurfaceAtom {
            position: Point3::origin(),
            radius: 1.7,
        };
        let pair = [
            isolated,
            SurfaceAtom {
                position: Point3::new(1.5, 0.0, 0.0),
                radius: 1.7,
            },
        ];
        let alone = surface.total_area(&[isolated]).unwrap();
        let together = surface.total_area(&pair).unwrap();
        assert!(together < 2.0 * alone);
    }

    #[test]
    fn surface_atom_radius_falls_back_for_unlisted_elements() {
        use crate::core::models::atom::Atom;
        use crate::core::models::ids::ResidueId;

        let carbon = Atom::new(1, "C1", "C", ResidueId::default(), Point3::origin());
        assert_relative_eq!(SurfaceAtom::from_atom(&carbon).radius, 1.7);

        let iron = Atom::new(2, "FE", "FE", ResidueId::default(), Point3::origin());
        assert_relative_eq!(SurfaceAtom::from_atom(&iron).radius, FALLBACK_ATOM_RADIUS);
    }
}
