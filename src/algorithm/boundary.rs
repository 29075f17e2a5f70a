//! Boundary path of the staircase and the partition sequence read along it

use crate::io::error::Result;
use crate::math::partition::Partition;
use crate::spatial::diagram::{Cell, GrowthDiagram};

/// Cells visited from `(0, n)` to `(n, 0)` along the outer staircase edge
///
/// The path alternates a step down `(i+1, j)` and a step left `(i, j-1)`,
/// taking the downward step whenever `(i+1, j)` is still in the staircase.
pub fn boundary_path(n: usize) -> Vec<Cell> {
    let mut path = Vec::with_capacity(2 * n + 1);
    let (mut i, mut j) = (0, n);
    path.push((i, j));

    while (i, j) != (n, 0) {
        if j + i <= n && i < n {
            i += 1;
        } else {
            j -= 1;
        }
        path.push((i, j));
    }
    path
}

/// Read the `2n + 1` partitions along the boundary of a filled diagram
///
/// # Errors
///
/// Returns an error if a boundary cell has not been filled
pub fn extract(diagram: &GrowthDiagram) -> Result<Vec<Partition>> {
    boundary_path(diagram.n())
        .into_iter()
        .map(|(i, j)| diagram.get(i, j).cloned())
        .collect()
}
