//! Staircase growth diagram
//!
//! The diagram stores one partition per lattice point `(i, j)` with
//! `0 <= i, j <= n`. The boundary row and column hold the empty partition and
//! the interior cells with `i + j <= n + 1` are computed from their three
//! predecessors `(i-1, j)`, `(i, j-1)` and `(i-1, j-1)`.

use crate::algorithm::transition::Transition;
use crate::io::configuration::MIN_CELLS_PER_WORKER;
use crate::io::error::{AlgorithmError, Result, invariant_violation};
use crate::math::partition::Partition;
use bitvec::slice::BitSlice;
use ndarray::Array2;

/// Lattice coordinates `(i, j)` of a growth diagram cell
pub type Cell = (usize, usize);

/// Number of interior cells in the staircase of a diamond of order `n`
pub const fn staircase_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Test whether `(i, j)` is an interior staircase cell
pub const fn in_staircase(n: usize, i: usize, j: usize) -> bool {
    i >= 1 && j >= 1 && i <= n && i + j <= n + 1
}

/// Position of an interior cell in row-major staircase order
///
/// Row `i` holds `n + 1 - i` cells, so the offset of row `i` is the sum of
/// the lengths of the rows above it.
pub const fn staircase_index(n: usize, i: usize, j: usize) -> Option<usize> {
    if !in_staircase(n, i, j) {
        return None;
    }
    let rows_above = i - 1;
    Some(rows_above * (n + 1) - rows_above * i / 2 + (j - 1))
}

/// Interior cells in row-major order
pub fn staircase_cells(n: usize) -> impl Iterator<Item = Cell> {
    (1..=n).flat_map(move |i| (1..=n + 1 - i).map(move |j| (i, j)))
}

/// Growth diagram of partitions indexed by staircase coordinates
#[derive(Clone, Debug)]
pub struct GrowthDiagram {
    n: usize,
    cells: Array2<Option<Partition>>,
}

impl GrowthDiagram {
    /// Create a diagram with empty boundary partitions and an unfilled interior
    pub fn new(n: usize) -> Self {
        let cells = Array2::from_shape_fn((n + 1, n + 1), |(i, j)| {
            (i == 0 || j == 0).then(Partition::empty)
        });
        Self { n, cells }
    }

    /// Order of the diamond
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Partition stored at `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates lie outside the staircase or the
    /// interior cell has not been filled yet
    pub fn get(&self, i: usize, j: usize) -> Result<&Partition> {
        let n = self.n;
        let outside = i > n || j > n || (i > 0 && j > 0 && i + j > n + 1);
        if outside {
            return Err(AlgorithmError::OutOfStaircase { i, j, n });
        }
        match self.cells.get([i, j]) {
            Some(Some(partition)) => Ok(partition),
            Some(None) => Err(AlgorithmError::UnfilledCell { i, j }),
            None => Err(AlgorithmError::OutOfStaircase { i, j, n }),
        }
    }

    /// Test whether every interior cell has been computed
    pub fn is_complete(&self) -> bool {
        staircase_cells(self.n).all(|(i, j)| matches!(self.cells.get([i, j]), Some(Some(_))))
    }

    /// Fill the staircase row by row, consuming one input per cell
    ///
    /// Inputs are consumed in staircase order. Extra inputs are ignored with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the input runs out before every cell is filled
    // Allow print for user feedback about ignored input
    #[allow(clippy::print_stderr)]
    pub fn fill<T, I>(&mut self, transition: &T, inputs: I) -> Result<()>
    where
        T: Transition + ?Sized,
        I: IntoIterator<Item = bool>,
    {
        let required = staircase_len(self.n);
        let mut inputs = inputs.into_iter();

        for (supplied, cell) in staircase_cells(self.n).enumerate() {
            let Some(bit) = inputs.next() else {
                return Err(AlgorithmError::InputExhausted { required, supplied });
            };
            let nu = self.compute_cell(transition, cell, bit)?;
            self.store(cell, nu);
        }

        if inputs.next().is_some() {
            eprintln!("Warning: ignoring input bits beyond the first {required}");
        }
        Ok(())
    }

    /// Fill the staircase one anti-diagonal `i + j = d` at a time
    ///
    /// Cells on a diagonal depend only on earlier diagonals, so they are
    /// spread over `workers` scoped threads. Bits are read by staircase index
    /// and the result is identical to [`GrowthDiagram::fill`].
    ///
    /// # Errors
    ///
    /// Returns an error if fewer bits than staircase cells are supplied or a
    /// worker thread panics
    // Allow print for user feedback about ignored input
    #[allow(clippy::print_stderr)]
    pub fn fill_by_diagonals<T>(&mut self, transition: &T, bits: &BitSlice, workers: usize) -> Result<()>
    where
        T: Transition + ?Sized,
    {
        let required = staircase_len(self.n);
        if bits.len() < required {
            return Err(AlgorithmError::InputExhausted {
                required,
                supplied: bits.len(),
            });
        }
        if bits.len() > required {
            eprintln!("Warning: ignoring input bits beyond the first {required}");
        }

        let workers = workers.max(1);
        for diagonal in 2..=self.n + 1 {
            let cells: Vec<(Cell, bool)> = (1..diagonal)
                .map(|i| {
                    let j = diagonal - i;
                    let bit = staircase_index(self.n, i, j)
                        .is_some_and(|index| bits.get(index).as_deref() == Some(&true));
                    ((i, j), bit)
                })
                .collect();

            for (cell, nu) in self.compute_diagonal(transition, &cells, workers)? {
                self.store(cell, nu);
            }
        }
        Ok(())
    }

    fn compute_diagonal<T>(
        &self,
        transition: &T,
        cells: &[(Cell, bool)],
        workers: usize,
    ) -> Result<Vec<(Cell, Partition)>>
    where
        T: Transition + ?Sized,
    {
        let compute = |chunk: &[(Cell, bool)]| -> Result<Vec<(Cell, Partition)>> {
            chunk
                .iter()
                .map(|&(cell, bit)| Ok((cell, self.compute_cell(transition, cell, bit)?)))
                .collect()
        };

        if workers == 1 || cells.len() < 2 * MIN_CELLS_PER_WORKER {
            return compute(cells);
        }

        let chunk_size = cells.len().div_ceil(workers).max(MIN_CELLS_PER_WORKER);
        std::thread::scope(|scope| {
            let handles: Vec<_> = cells
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || compute(chunk)))
                .collect();

            let mut computed = Vec::with_capacity(cells.len());
            for handle in handles {
                let chunk = handle.join().map_err(|panic| {
                    invariant_violation("anti-diagonal fill", &format!("worker panicked: {panic:?}"))
                })??;
                computed.extend(chunk);
            }
            Ok(computed)
        })
    }

    fn compute_cell<T>(&self, transition: &T, (i, j): Cell, bit: bool) -> Result<Partition>
    where
        T: Transition + ?Sized,
    {
        let lam = self.get(i - 1, j)?;
        let mu = self.get(i, j - 1)?;
        let kappa = self.get(i - 1, j - 1)?;
        Ok(transition.step((i, j), lam, mu, kappa, bit))
    }

    fn store(&mut self, (i, j): Cell, partition: Partition) {
        if let Some(slot) = self.cells.get_mut([i, j]) {
            *slot = Some(partition);
        }
    }
}
