//! Pairwise contact detection between two atom collections.
//!
//! The contract is exact: a pair is a contact iff its Euclidean distance is
//! less than or equal to the cutoff (boundary inclusive). Implementations
//! must return identical pair sets; both provided here emit pairs sorted by
//! `(i, j)` so every consumer is deterministic regardless of which one runs.

use nalgebra::Point3;
use std::collections::HashMap;

/// Finds index pairs of atoms within a cutoff distance of each other.
pub trait ContactFinder {
    /// All `(i, j)` with `|a[i] - b[j]| <= cutoff`, sorted by `(i, j)`.
    fn contact_pairs(
        &self,
        a: &[Point3<f64>],
        b: &[Point3<f64>],
        cutoff: f64,
    ) -> Vec<(usize, usize)>;

    /// Whether any pair is within the cutoff (first hit wins).
    fn have_contact(&self, a: &[Point3<f64>], b: &[Point3<f64>], cutoff: f64) -> bool {
        !self.contact_pairs(a, b, cutoff).is_empty()
    }
}

/// Exhaustive pairwise scan; the oracle the grid is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceContacts;

impl ContactFinder for BruteForceContacts {
    fn contact_pairs(
        &self,
        a: &[Point3<f64>],
        b: &[Point3<f64>],
        cutoff: f64,
    ) -> Vec<(usize, usize)> {
        let cutoff_sq = cutoff * cutoff;
        let mut pairs = Vec::new();
        for (i, pa) in a.iter().enumerate() {
            for (j, pb) in b.iter().enumerate() {
                if (pa - pb).norm_squared() <= cutoff_sq {
                    pairs.push((i, j));
                }
            }
        }
        // Generated in ascending (i, j) order already.
        pairs
    }

    fn have_contact(&self, a: &[Point3<f64>], b: &[Point3<f64>], cutoff: f64) -> bool {
        let cutoff_sq = cutoff * cutoff;
        a.iter()
            .any(|pa| b.iter().any(|pb| (pa - pb).norm_squared() <= cutoff_sq))
    }
}

/// Uniform-grid implementation with cell size equal to the cutoff.
///
/// Each probe atom only examines the 27-cell neighborhood of its own cell,
/// which bounds candidate pairs by local density instead of `|A|*|B|`.
/// Returns exactly the same pair set as [`BruteForceContacts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridContacts;

impl GridContacts {
    fn cell_of(point: &Point3<f64>, inv_cell: f64) -> (i64, i64, i64) {
        (
            (point.x * inv_cell).floor() as i64,
            (point.y * inv_cell).floor() as i64,
            (point.z * inv_cell).floor() as i64,
        )
    }

    fn bucket(b: &[Point3<f64>], inv_cell: f64) -> HashMap<(i64, i64, i64), Vec<usize>> {
        let mut cells: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        for (j, point) in b.iter().enumerate() {
            cells.entry(Self::cell_of(point, inv_cell)).or_default().push(j);
        }
        cells
    }
}

impl ContactFinder for GridContacts {
    fn contact_pairs(
        &self,
        a: &[Point3<f64>],
        b: &[Point3<f64>],
        cutoff: f64,
    ) -> Vec<(usize, usize)> {
        if !cutoff.is_finite() || cutoff <= 0.0 {
            // Degenerate cutoffs cannot key a grid; the exact loop can still
            // answer them (a zero cutoff matches coincident points).
            return BruteForceContacts.contact_pairs(a, b, cutoff);
        }

        let inv_cell = 1.0 / cutoff;
        let cells = Self::bucket(b, inv_cell);
        let cutoff_sq = cutoff * cutoff;

        let mut pairs = Vec::new();
        for (i, pa) in a.iter().enumerate() {
            let (cx, cy, cz) = Self::cell_of(pa, inv_cell);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let Some(js) = cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                            continue;
                        };
                        for &j in js {
                            if (pa - b[j]).norm_squared() <= cutoff_sq {
                                pairs.push((i, j));
                            }
                        }
                    }
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }

    fn have_contact(&self, a: &[Point3<f64>], b: &[Point3<f64>], cutoff: f64) -> bool {
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return BruteForceContacts.have_contact(a, b, cutoff);
        }

        let inv_cell = 1.0 / cutoff;
        let cells = Self::bucket(b, inv_cell);
        let cutoff_sq = cutoff * cutoff;

        for pa in a {
            let (cx, cy, cz) = Self::cell_of(pa, inv_cell);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let Some(js) = cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                            continue;
                        };
                        if js.iter().any(|&j| (pa - b[j]).norm_squared() <= cutoff_sq) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
