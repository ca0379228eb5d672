//! A membership matrix relates samples (rows) to features (columns). An
//! entry is set when the sample carries the feature.
//!
//! # Example
//!
//! ```rust
//! use bio_mgraph::matrix::MembershipMatrix;
//!
//! let m = MembershipMatrix::from_binary(vec![
//!  vec![1, 0, 1],
//!  vec![0, 1, 0],
//! ]).unwrap();
//! assert_eq!((m.n_rows(), m.n_cols()), (2, 3));
//! assert!(m[(0, 2)]);
//!
//! let parsed: MembershipMatrix = "1 0 1\n0 1 0".parse().unwrap();
//! assert_eq!(parsed, m);
//! ```

use std::ops::Index;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular boolean matrix with `n_rows` samples and `n_cols` features.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipMatrix {
    rows: Vec<Vec<bool>>,
    n_cols: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid entry {value:?} at row {row}, column {col}: expected 0 or 1")]
    InvalidEntry {
        row: usize,
        col: usize,
        value: String,
    },
}

impl MembershipMatrix {
    /// Create a new MembershipMatrix.
    ///
    /// All rows must have the same length. A matrix without rows has no
    /// columns.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, MatrixError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(MatrixError::Ragged {
                row,
                len: r.len(),
                expected: n_cols,
            });
        }
        Ok(Self { rows, n_cols })
    }

    /// Create a matrix from integer rows. Only entries equal to 1 are
    /// members, every other value is treated as absent.
    pub fn from_binary(rows: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        Self::new(
            rows.into_iter()
                .map(|r| r.into_iter().map(|x| x == 1).collect())
                .collect(),
        )
    }

    /// An `n_rows` by `n_cols` matrix without members.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            rows: vec![vec![false; n_cols]; n_rows],
            n_cols,
        }
    }

    /// Number of samples.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of features.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_member(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.rows[i]
    }

    /// Positions `(i, j)` of all set entries, in row-major order.
    pub fn members(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, r)| {
            r.iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(move |(j, _)| (i, j))
        })
    }
}

/// Index access by `(sample, feature)`.
impl Index<(usize, usize)> for MembershipMatrix {
    type Output = bool;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

/// Parse a matrix from text, one row per line.
///
/// Entries are separated by whitespace and/or commas. Blank lines and lines
/// starting with `#` are skipped.
///
/// ```
/// use bio_mgraph::matrix::MembershipMatrix;
///
/// let m: MembershipMatrix = "# s x f\n1,0\n\n0, 1\n".parse().unwrap();
/// assert_eq!(m.members().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
/// ```
impl FromStr for MembershipMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref SEPARATOR_RE: Regex = Regex::new(r"[\s,]+").unwrap();
        }

        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .enumerate()
            .map(|(row, line)| {
                SEPARATOR_RE
                    .split(line)
                    .filter(|entry| !entry.is_empty())
                    .enumerate()
                    .map(|(col, entry)| match entry {
                        "1" => Ok(true),
                        "0" => Ok(false),
                        value => Err(MatrixError::InvalidEntry {
                            row,
                            col,
                            value: value.to_owned(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }
}
