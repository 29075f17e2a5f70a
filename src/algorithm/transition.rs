//! Local growth rule shared by the deterministic and q-deformed samplers

use crate::math::partition::Partition;
use crate::spatial::diagram::Cell;

/// Local rule computing the partition at a growth diagram cell
///
/// Given `lam = tau(i-1, j)`, `mu = tau(i, j-1)` and `kappa = tau(i-1, j-1)`
/// with `lam / kappa` a horizontal strip and `mu / kappa` a vertical strip,
/// a transition returns `nu = tau(i, j)` such that `nu / lam` is a vertical
/// strip and `nu / mu` a horizontal strip.
///
/// Implementations must be shareable across the anti-diagonal fill workers
/// and must derive any randomness from the cell coordinates, never from
/// call order.
pub trait Transition: Sync {
    /// Compute the partition at `cell` from its three predecessors and bit
    fn step(
        &self,
        cell: Cell,
        lam: &Partition,
        mu: &Partition,
        kappa: &Partition,
        bit: bool,
    ) -> Partition;
}
