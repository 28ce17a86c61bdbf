use crate::utils::error::{IsingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Largest lattice the crate will allocate, 2^28 sites (256 MiB of spins).
///
/// At this size `2 * MAX_ENERGY_J * site_count` still fits in an `i64`.
pub const MAX_SITE_COUNT: usize = 1 << 28;

/// Dimensions of a rectangular lattice. Only constructed through [`Shape::new`],
/// so both sides are at least 1 and their product is at most [`MAX_SITE_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(IsingError::InvalidShape { rows, cols });
        }
        match rows.checked_mul(cols) {
            Some(sites) if sites <= MAX_SITE_COUNT => Ok(Self { rows, cols }),
            _ => Err(IsingError::LatticeTooLarge {
                rows,
                cols,
                max_sites: MAX_SITE_COUNT,
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn site_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    pub fn value(self) -> i8 {
        match self {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }

    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Spin::Up),
            -1 => Some(Spin::Down),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

/// Where the engine gets its lattice from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeSource {
    /// Uniformly random spins; `None` draws the seed from the OS.
    Random { shape: Shape, seed: Option<u64> },
    /// A CSV grid of 1 / -1 values.
    CsvFile(PathBuf),
}

impl fmt::Display for LatticeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeSource::Random { shape, seed: Some(seed) } => {
                write!(f, "random {} lattice (seed {})", shape, seed)
            }
            LatticeSource::Random { shape, seed: None } => {
                write!(f, "random {} lattice (unseeded)", shape)
            }
            LatticeSource::CsvFile(path) => write!(f, "lattice file {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_rejects_empty_dimensions() {
        assert!(Shape::new(0, 4).is_err());
        assert!(Shape::new(4, 0).is_err());
        assert_eq!(Shape::new(10, 5).unwrap().site_count(), 50);
    }

    #[test]
    fn test_shape_rejects_oversized_lattices() {
        assert!(matches!(
            Shape::new(usize::MAX / 2, 4),
            Err(IsingError::LatticeTooLarge { cols: 4, .. })
        ));
        assert!(matches!(
            Shape::new(usize::MAX, usize::MAX),
            Err(IsingError::LatticeTooLarge { .. })
        ));
        assert!(matches!(
            Shape::new(MAX_SITE_COUNT, 2),
            Err(IsingError::LatticeTooLarge { .. })
        ));

        let largest = Shape::new(MAX_SITE_COUNT, 1).unwrap();
        assert_eq!(largest.site_count(), MAX_SITE_COUNT);
        assert_eq!(largest.rows(), MAX_SITE_COUNT);
    }

    #[test]
    fn test_spin_values() {
        assert_eq!(Spin::Up.value(), 1);
        assert_eq!(Spin::Down.value(), -1);
        assert_eq!(Spin::from_value(-1), Some(Spin::Down));
        assert_eq!(Spin::from_value(0), None);
        assert_eq!(Spin::Up.flipped(), Spin::Down);
    }
}
