//! Per-cell random inputs and edge weights
//!
//! Each staircase cell owns independent generators derived from the sample
//! seed and its coordinates. Cells can therefore be filled in any order, on
//! any thread, and still see the same bits and uniforms.

use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::bit_probability;
use crate::spatial::diagram::{Cell, staircase_cells};
use bitvec::vec::BitVec;
use rand::{Rng, SeedableRng, rngs::StdRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Independent random streams owned by every cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStream {
    /// Bernoulli input bit of the cell
    Bit,
    /// Uniforms consumed by the q-deformed island sweep
    Uniform,
}

impl CellStream {
    const fn tag(self) -> u64 {
        match self {
            Self::Bit => 0x0B17,
            Self::Uniform => 0x0F10_A7,
        }
    }
}

/// SplitMix64 output function
const fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed of one cell stream, mixing the sample seed with the coordinates
pub const fn cell_seed(seed: u64, (i, j): Cell, stream: CellStream) -> u64 {
    let mixed = splitmix64(seed ^ stream.tag());
    let mixed = splitmix64(mixed ^ i as u64);
    splitmix64(mixed ^ j as u64)
}

/// Deterministic generator for one stream of one cell
pub fn cell_rng(seed: u64, cell: Cell, stream: CellStream) -> StdRng {
    StdRng::seed_from_u64(cell_seed(seed, cell, stream))
}

/// Edge weights `x_i` (rows) and `y_j` (columns) of a weighted Schur process
///
/// Cell `(i, j)` draws its bit as Bernoulli(`x_i y_j / (1 + x_i y_j)`).
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeWeights {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl EdgeWeights {
    /// Create weights from row and column values
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length or contain a value
    /// that is not positive and finite
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(invalid_parameter(
                "weights",
                &format!("{} row and {} column weights", x.len(), y.len()),
                &"row and column weights must have the same length",
            ));
        }
        if let Some(bad) = x.iter().chain(&y).find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(invalid_parameter(
                "weights",
                bad,
                &"weights must be positive and finite",
            ));
        }
        Ok(Self { x, y })
    }

    /// All weights equal to 1, giving the uniform measure
    pub fn uniform(n: usize) -> Self {
        Self {
            x: vec![1.0; n],
            y: vec![1.0; n],
        }
    }

    /// Number of rows (and columns) covered by the weights
    pub const fn len(&self) -> usize {
        self.x.len()
    }

    /// Test whether no weights are present
    pub const fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Probability that the bit of a cell (1-based coordinates) is set
    pub fn bit_probability(&self, (i, j): Cell) -> f64 {
        let x = i.checked_sub(1).and_then(|row| self.x.get(row)).copied().unwrap_or(1.0);
        let y = j.checked_sub(1).and_then(|column| self.y.get(column)).copied().unwrap_or(1.0);
        bit_probability(x, y)
    }
}

/// Draw the input bits of every staircase cell, in staircase order
///
/// Without weights each bit is a fair coin.
pub fn random_bits(n: usize, seed: u64, weights: Option<&EdgeWeights>) -> BitVec {
    staircase_cells(n)
        .map(|cell| {
            let p = weights.map_or(0.5, |w| w.bit_probability(cell));
            cell_rng(seed, cell, CellStream::Bit).random_bool(p)
        })
        .collect()
}
