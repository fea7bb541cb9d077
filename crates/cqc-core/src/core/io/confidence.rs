use ndarray::Array2;
use ndarray_npy::{NpzReader, ReadNpzError};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Array key under which the predicted-alignment-error matrix is stored.
pub const CONFIDENCE_ARRAY_KEY: &str = "pae";

/// Errors raised while loading or validating a confidence matrix.
#[derive(Debug, Error)]
pub enum ConfidenceError {
    #[error("confidence matrix file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to open confidence matrix '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read confidence matrix '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadNpzError,
    },

    #[error("confidence archive '{path}' has no '{key}' array", path = path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("confidence matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// A square per-residue confidence matrix (predicted alignment error).
///
/// Rows and columns are indexed by 0-based residue position; the diagonal is
/// used as a per-residue self-confidence proxy. The matrix is immutable for
/// the lifetime of a computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceMatrix {
    values: Array2<f64>,
}

impl ConfidenceMatrix {
    /// Wraps an in-memory matrix, enforcing squareness.
    pub fn from_array(values: Array2<f64>) -> Result<Self, ConfidenceError> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(ConfidenceError::NotSquare { rows, cols });
        }
        Ok(Self { values })
    }

    /// Reads the matrix from a compressed numeric archive (`.npz`) holding a
    /// square float array under [`CONFIDENCE_ARRAY_KEY`].
    ///
    /// Both `f64` and `f32` payloads are accepted; `f32` is widened.
    pub fn from_npz(path: &Path) -> Result<Self, ConfidenceError> {
        if !path.exists() {
            return Err(ConfidenceError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| ConfidenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut npz = NpzReader::new(file).map_err(|source| ConfidenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let names = npz.names().map_err(|source| ConfidenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // Archive entries carry the ".npy" suffix of their member files.
        let entry = names
            .iter()
            .find(|n| {
                n.as_str() == CONFIDENCE_ARRAY_KEY
                    || n.trim_end_matches(".npy") == CONFIDENCE_ARRAY_KEY
            })
            .cloned()
            .ok_or_else(|| ConfidenceError::MissingKey {
                path: path.to_path_buf(),
                key: CONFIDENCE_ARRAY_KEY,
            })?;

        let values: Array2<f64> = match npz.by_name(&entry) {
            Ok(values) => values,
            Err(_) => {
                let single: Array2<f32> =
                    npz.by_name(&entry).map_err(|source| ConfidenceError::Read {
                        path: path.to_path_buf(),
                        source,
                    })?;
                single.mapv(f64::from)
            }
        };

        Self::from_array(values)
    }

    /// Matrix dimension (number of residue positions).
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Diagonal entry for a 1-based residue sequence number, if in bounds.
    pub fn diagonal_at(&self, residue_number: isize) -> Option<f64> {
        if residue_number < 1 {
            return None;
        }
        let idx = (residue_number - 1) as usize;
        if idx < self.size() {
            Some(self.values[(idx, idx)])
        } else {
            None
        }
    }
}
