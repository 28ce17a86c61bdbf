//! Square-lattice Ising model with periodic boundaries.
//!
//! A [`Model`] holds an M×N grid of spins, each `+1` or `-1`, and the
//! coupling constant `J` by which an aligned neighbour pair lowers the
//! energy of the system.

use crate::domain::model::{Shape, Spin};
use crate::utils::error::{IsingError, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_ENERGY_J: i64 = 1;

/// Largest coupling magnitude a [`Model`] accepts. Together with
/// [`MAX_SITE_COUNT`](crate::domain::model::MAX_SITE_COUNT) this keeps every energy inside `i64`.
pub const MAX_ENERGY_J: i64 = 1_000_000;

fn check_energy_j(energy_j: i64) -> Result<i64> {
    if (-MAX_ENERGY_J..=MAX_ENERGY_J).contains(&energy_j) {
        Ok(energy_j)
    } else {
        Err(IsingError::CouplingOutOfRange {
            energy_j,
            max: MAX_ENERGY_J,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    shape: Shape,
    lattice: Array2<i8>,
    energy_j: i64,
}

impl Model {
    /// Random lattice drawn from an OS-seeded generator.
    pub fn new(shape: Shape, energy_j: i64) -> Result<Self> {
        let mut rng = StdRng::from_os_rng();
        Self::with_rng(shape, energy_j, &mut rng)
    }

    /// Random lattice drawn from a fixed seed. Equal seeds give equal lattices.
    pub fn seeded(shape: Shape, energy_j: i64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(shape, energy_j, &mut rng)
    }

    /// Each site draws a uniform value in `[0, 1)`: `>= 0.5` is up, anything else down.
    pub fn with_rng<R: Rng>(shape: Shape, energy_j: i64, rng: &mut R) -> Result<Self> {
        let energy_j = check_energy_j(energy_j)?;
        let lattice = Array2::from_shape_fn((shape.rows(), shape.cols()), |_| {
            if rng.random::<f64>() >= 0.5 {
                Spin::Up.value()
            } else {
                Spin::Down.value()
            }
        });

        Ok(Self {
            shape,
            lattice,
            energy_j,
        })
    }

    pub fn uniform(shape: Shape, spin: Spin, energy_j: i64) -> Result<Self> {
        Ok(Self {
            shape,
            lattice: Array2::from_elem((shape.rows(), shape.cols()), spin.value()),
            energy_j: check_energy_j(energy_j)?,
        })
    }

    pub fn from_spins(spins: Array2<i8>, energy_j: i64) -> Result<Self> {
        let energy_j = check_energy_j(energy_j)?;
        let (rows, cols) = spins.dim();
        let shape = Shape::new(rows, cols)?;

        if let Some(((row, col), value)) = spins
            .indexed_iter()
            .find(|(_, &value)| Spin::from_value(value).is_none())
        {
            return Err(IsingError::InvalidSpin {
                row,
                col,
                value: value.to_string(),
            });
        }

        Ok(Self {
            shape,
            lattice: spins,
            energy_j,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn energy_j(&self) -> i64 {
        self.energy_j
    }

    pub fn lattice(&self) -> &Array2<i8> {
        &self.lattice
    }

    pub fn site_count(&self) -> usize {
        self.shape.site_count()
    }

    pub fn spin(&self, row: usize, col: usize) -> Option<Spin> {
        self.lattice
            .get((row, col))
            .copied()
            .and_then(Spin::from_value)
    }

    /// Inverts one site and returns its new spin.
    pub fn flip(&mut self, row: usize, col: usize) -> Result<Spin> {
        let shape = self.shape;
        let site = self
            .lattice
            .get_mut((row, col))
            .ok_or(IsingError::SiteOutOfBounds {
                row,
                col,
                rows: shape.rows(),
                cols: shape.cols(),
            })?;
        let flipped = Spin::from_value(*site)
            .ok_or_else(|| IsingError::InvalidSpin {
                row,
                col,
                value: site.to_string(),
            })?
            .flipped();
        *site = flipped.value();
        Ok(flipped)
    }

    /// Absolute value of the summed spins.
    pub fn magnetism(&self) -> u64 {
        self.lattice
            .iter()
            .map(|&s| i64::from(s))
            .sum::<i64>()
            .unsigned_abs()
    }

    /// Total energy, `-J` times the sum over every site of its spin multiplied
    /// by the spins above and to the left of it, wrapping at the edges.
    ///
    /// Every bond is visited once per orientation, so a one-row lattice couples
    /// each site with itself vertically and a two-row lattice counts each
    /// vertical bond twice.
    pub fn energy(&self) -> i64 {
        let (rows, cols) = (self.shape.rows(), self.shape.cols());

        let interaction: i64 = self
            .lattice
            .indexed_iter()
            .map(|((i, j), &s)| {
                let above = self.lattice[[(i + rows - 1) % rows, j]];
                let left = self.lattice[[i, (j + cols - 1) % cols]];
                i64::from(s) * (i64::from(above) + i64::from(left))
            })
            .sum();

        // |interaction| <= 2 * MAX_SITE_COUNT and |J| <= MAX_ENERGY_J.
        -self.energy_j * interaction
    }
}
