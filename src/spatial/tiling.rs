//! Domino tilings of the Aztec diamond
//!
//! The diamond of order `n` is the union of unit squares `[x, x+1] x [y, y+1]`
//! with `|x + 1/2| + |y + 1/2| <= n`. Slicing it along the anti-diagonal
//! direction gives `2n + 1` slices; slice `t` holds `n` squares for even `t`
//! and `n + 1` squares for odd `t`. The boundary partition sequence of a
//! growth diagram selects, on each slice, which squares pair with a square of
//! the next slice, and those pairs are the dominoes.

use crate::io::error::{Result, invalid_parameter, invariant_violation};
use crate::math::partition::Partition;
use crate::spatial::maya::{holes, particles};
use ndarray::Array2;
use serde::Serialize;
use std::collections::VecDeque;

/// Domino classes keyed by the parity of their occupancy grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DominoKind {
    /// Horizontal domino on an (even, even) grid cell
    North,
    /// Horizontal domino on an (odd, odd) grid cell
    South,
    /// Vertical domino on an (even, odd) grid cell
    East,
    /// Vertical domino on an (odd, even) grid cell
    West,
}

impl DominoKind {
    /// Kind of the domino stored at grid cell `(i, j)`
    pub const fn from_grid_cell(i: usize, j: usize) -> Self {
        match (i % 2 == 0, j % 2 == 0) {
            (true, true) => Self::North,
            (false, false) => Self::South,
            (true, false) => Self::East,
            (false, true) => Self::West,
        }
    }

    /// Test whether dominoes of this kind lie horizontally
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// A domino given by its lower-left unit square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Domino {
    /// Horizontal coordinate of the lower-left square
    pub x: i32,
    /// Vertical coordinate of the lower-left square
    pub y: i32,
    /// Domino class
    pub kind: DominoKind,
}

impl Domino {
    /// The two unit squares covered by the domino
    pub const fn squares(&self) -> [(i32, i32); 2] {
        if self.kind.is_horizontal() {
            [(self.x, self.y), (self.x + 1, self.y)]
        } else {
            [(self.x, self.y), (self.x, self.y + 1)]
        }
    }

    /// Occupancy grid cell of the domino in a diamond of order `n`
    fn grid_cell(x: i32, y: i32, horizontal: bool, n: i32) -> Option<(usize, usize)> {
        let i = n - x - y - 2;
        let j = if horizontal { n + x - y } else { n + x - y - 1 };
        let size = 2 * n;
        ((0..size).contains(&i) && (0..size).contains(&j)).then_some((i as usize, j as usize))
    }

    /// Domino stored at grid cell `(i, j)` of a diamond of order `n`
    const fn from_grid_cell(i: usize, j: usize, n: i32) -> Self {
        let kind = DominoKind::from_grid_cell(i, j);
        let (i, j) = (i as i32, j as i32);
        let offset = if kind.is_horizontal() { j - i - 2 } else { j - i - 1 };
        let x = offset.div_euclid(2);
        Self {
            x,
            y: n - x - i - 2,
            kind,
        }
    }
}

/// Unit square at 1-based position `p` of slice `t`
const fn slice_square(n: i32, t: i32, position: i32) -> (i32, i32) {
    let s = t - n;
    let d = if t % 2 == 0 {
        2 * position - n - 1
    } else {
        2 * position - n - 2
    };
    ((s + d - 1).div_euclid(2), (s - d - 1).div_euclid(2))
}

/// Test whether a unit square lies inside the diamond of order `n`
const fn in_diamond(n: i32, (x, y): (i32, i32)) -> bool {
    // |x + 1/2| + |y + 1/2| <= n in doubled coordinates
    (2 * x + 1).abs() + (2 * y + 1).abs() <= 2 * n
}

/// A domino tiling of the Aztec diamond
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tiling {
    n: usize,
    dominoes: Vec<Domino>,
}

impl Tiling {
    /// Build the tiling encoded by a boundary partition sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence length is even, or if the partitions
    /// do not describe a tiling of the diamond
    pub fn from_sequence(sequence: &[Partition]) -> Result<Self> {
        if sequence.len() % 2 == 0 {
            return Err(invalid_parameter(
                "sequence",
                &sequence.len(),
                &"length must be 2n + 1",
            ));
        }
        let n = (sequence.len() - 1) / 2;
        let order = i32::try_from(n)
            .map_err(|error| invalid_parameter("sequence", &sequence.len(), &error))?;

        let mut dominoes = Vec::with_capacity(n * (n + 1));
        for t in 0..2 * n {
            let forward = forward_squares(sequence, n, t)?;
            let next_forward = forward_squares(sequence, n, t + 1)?;
            let backward = holes(&next_forward, slice_len(n, t + 1));

            if forward.len() != backward.len() {
                return Err(invariant_violation(
                    "tiling",
                    &format!(
                        "slice {t} sends {} squares forward but slice {} receives {}",
                        forward.len(),
                        t + 1,
                        backward.len()
                    ),
                ));
            }

            for (&from, &to) in forward.iter().zip(&backward) {
                let a = slice_square(order, t as i32, from as i32);
                let b = slice_square(order, t as i32 + 1, to as i32);
                dominoes.push(pair_squares(order, a, b)?);
            }
        }

        let tiling = Self { n, dominoes };
        tiling.verify_cover()?;
        Ok(tiling)
    }

    /// Rebuild a tiling from its `2n x 2n` occupancy grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square with even side, or if its
    /// dominoes do not cover the diamond exactly once
    pub fn from_occupancy_grid(grid: &Array2<u8>) -> Result<Self> {
        let (rows, columns) = grid.dim();
        if rows != columns || rows % 2 != 0 {
            return Err(invalid_parameter(
                "occupancy grid",
                &format!("{rows}x{columns}"),
                &"grid must be square with even side",
            ));
        }
        let n = rows / 2;
        let order = i32::try_from(n)
            .map_err(|error| invalid_parameter("occupancy grid", &rows, &error))?;

        let dominoes = grid
            .indexed_iter()
            .filter(|&(_, &occupied)| occupied != 0)
            .map(|((i, j), _)| Domino::from_grid_cell(i, j, order))
            .collect();

        let tiling = Self { n, dominoes };
        tiling.verify_cover()?;
        Ok(tiling)
    }

    /// Order of the diamond
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Dominoes of the tiling
    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }

    /// Number of dominoes of each kind, in North, South, East, West order
    pub fn kind_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for domino in &self.dominoes {
            let slot = match domino.kind {
                DominoKind::North => counts.get_mut(0),
                DominoKind::South => counts.get_mut(1),
                DominoKind::East => counts.get_mut(2),
                DominoKind::West => counts.get_mut(3),
            };
            if let Some(count) = slot {
                *count += 1;
            }
        }
        counts
    }

    /// `2n x 2n` grid with a 1 at the cell of every domino
    pub fn occupancy_grid(&self) -> Array2<u8> {
        let side = 2 * self.n;
        let mut grid = Array2::zeros((side, side));
        let order = self.n as i32;
        for domino in &self.dominoes {
            let cell = Domino::grid_cell(domino.x, domino.y, domino.kind.is_horizontal(), order);
            if let Some(slot) = cell.and_then(|(i, j)| grid.get_mut([i, j])) {
                *slot = 1;
            }
        }
        grid
    }

    /// Height function on the vertices of the diamond
    ///
    /// Entry `[y + n, x + n]` holds the height of vertex `(x, y)`, or `None`
    /// for vertices outside the diamond. Crossing an edge with the black
    /// square (`x + y` even) on the left changes the height by `-3` when both
    /// sides belong to the same domino and by `+1` otherwise. The leftmost
    /// vertex `(-n, 0)` has height 0.
    ///
    /// # Errors
    ///
    /// Returns an error if two paths assign different heights to a vertex
    pub fn height_function(&self) -> Result<Array2<Option<i32>>> {
        let n = self.n as i32;
        let side = 2 * self.n + 1;
        let owners = self.square_owners();
        let owner = |square: (i32, i32)| -> Option<usize> {
            let (x, y) = square;
            let index = [usize::try_from(y + n).ok()?, usize::try_from(x + n).ok()?];
            owners.get(index).copied().flatten()
        };

        let mut heights: Array2<Option<i32>> = Array2::from_elem((side, side), None);
        let vertex_index = |(x, y): (i32, i32)| [(y + n) as usize, (x + n) as usize];

        let start = (-n, 0);
        if let Some(slot) = heights.get_mut(vertex_index(start)) {
            *slot = Some(0);
        }
        let mut queue = VecDeque::from([start]);

        while let Some((x, y)) = queue.pop_front() {
            let Some(&Some(height)) = heights.get(vertex_index((x, y))) else {
                continue;
            };
            // Squares on the left and right of each outgoing edge
            let edges = [
                ((1, 0), (x, y), (x, y - 1)),
                ((0, 1), (x - 1, y), (x, y)),
                ((-1, 0), (x - 1, y - 1), (x - 1, y)),
                ((0, -1), (x, y - 1), (x - 1, y - 1)),
            ];
            for ((dx, dy), left, right) in edges {
                let (left_owner, right_owner) = (owner(left), owner(right));
                if left_owner.is_none() && right_owner.is_none() {
                    continue;
                }
                let inside = left_owner.is_some() && left_owner == right_owner;
                let step = if inside { -3 } else { 1 };
                let black_on_left = (left.0 + left.1).rem_euclid(2) == 0;
                let next_height = if black_on_left { height + step } else { height - step };

                let next = (x + dx, y + dy);
                match heights.get_mut(vertex_index(next)) {
                    Some(Some(existing)) if *existing != next_height => {
                        return Err(invariant_violation(
                            "height function",
                            &format!(
                                "vertex {next:?} reached with heights {existing} and {next_height}"
                            ),
                        ));
                    }
                    Some(slot @ None) => {
                        *slot = Some(next_height);
                        queue.push_back(next);
                    }
                    _ => {}
                }
            }
        }

        Ok(heights)
    }

    /// Index of the domino covering each square, `[y + n, x + n]`
    fn square_owners(&self) -> Array2<Option<usize>> {
        let side = 2 * self.n;
        let n = self.n as i32;
        let mut owners = Array2::from_elem((side, side), None);
        for (index, domino) in self.dominoes.iter().enumerate() {
            for (x, y) in domino.squares() {
                let (Ok(row), Ok(column)) = (usize::try_from(y + n), usize::try_from(x + n)) else {
                    continue;
                };
                if let Some(slot) = owners.get_mut([row, column]) {
                    *slot = Some(index);
                }
            }
        }
        owners
    }

    /// Check that the dominoes cover every square of the diamond exactly once
    fn verify_cover(&self) -> Result<()> {
        let expected = self.n * (self.n + 1);
        if self.dominoes.len() != expected {
            return Err(invariant_violation(
                "tiling cover",
                &format!("found {} dominoes, expected {expected}", self.dominoes.len()),
            ));
        }

        let side = 2 * self.n;
        let n = self.n as i32;
        let mut covered = Array2::from_elem((side, side), false);
        for domino in &self.dominoes {
            for square in domino.squares() {
                let (x, y) = square;
                let slot = if in_diamond(n, square) {
                    covered.get_mut([(y + n) as usize, (x + n) as usize])
                } else {
                    None
                };
                match slot {
                    Some(seen) if !*seen => *seen = true,
                    Some(_) => {
                        return Err(invariant_violation(
                            "tiling cover",
                            &format!("square {square:?} is covered twice"),
                        ));
                    }
                    None => {
                        return Err(invariant_violation(
                            "tiling cover",
                            &format!("square {square:?} lies outside the diamond"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Number of squares on slice `t`
const fn slice_len(n: usize, t: usize) -> usize {
    if t % 2 == 0 { n } else { n + 1 }
}

/// Sorted positions of the squares of slice `t` paired with slice `t + 1`
fn forward_squares(sequence: &[Partition], n: usize, t: usize) -> Result<Vec<usize>> {
    let partition = sequence
        .get(t)
        .ok_or_else(|| invariant_violation("tiling", &format!("missing partition for slice {t}")))?;
    let slots = slice_len(n, t);
    let count = n - t / 2;
    let occupied = particles(partition, slots, count).map_err(|error| {
        invariant_violation("tiling", &format!("slice {t}: {error}"))
    })?;

    Ok(if t % 2 == 0 {
        occupied
    } else {
        holes(&occupied, slots)
    })
}

/// Join two adjacent squares into a domino
fn pair_squares(n: i32, a: (i32, i32), b: (i32, i32)) -> Result<Domino> {
    let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
    let horizontal = match (upper.0 - lower.0, upper.1 - lower.1) {
        (1, 0) => true,
        (0, 1) => false,
        _ => {
            return Err(invariant_violation(
                "tiling",
                &format!("squares {a:?} and {b:?} are not adjacent"),
            ));
        }
    };

    let (i, j) = Domino::grid_cell(lower.0, lower.1, horizontal, n).ok_or_else(|| {
        invariant_violation(
            "tiling",
            &format!("domino at {lower:?} lies outside the occupancy grid"),
        )
    })?;

    Ok(Domino {
        x: lower.0,
        y: lower.1,
        kind: DominoKind::from_grid_cell(i, j),
    })
}
