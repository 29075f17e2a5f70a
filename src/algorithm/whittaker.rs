//! q-deformed VH step sampling the q-Whittaker growth diagram
//!
//! Rows where `mu` exceeds `kappa` by exactly one form islands. Inside each
//! island the Schur rule moves a single row; the q-deformed rule instead picks
//! which row of `k..=m+1` stays put by a sequential sweep whose stop
//! probabilities are ratios of `1 - q^e` factors. At `q = 0` every stop
//! probability is 0 or 1 and the step coincides with the Schur bijection.

use crate::algorithm::inputs::{CellStream, cell_rng};
use crate::algorithm::transition::Transition;
use crate::math::partition::Partition;
use crate::math::probability::{continuation_stop_probability, first_stop_probability};
use crate::spatial::diagram::Cell;
use rand::Rng;

/// Maximal runs `(k, m)` of rows with `mu_idx - kappa_idx == 1`
pub fn islands(mu: &Partition, kappa: &Partition) -> Vec<(usize, usize)> {
    let mut islands = Vec::new();
    let mut start = None;

    // One row past the end of mu closes a trailing island
    for idx in 0..=mu.len() {
        let raised = mu.get(idx) == kappa.get(idx) + 1;
        match (raised, start) {
            (true, None) => start = Some(idx),
            (false, Some(k)) => {
                islands.push((k, idx - 1));
                start = None;
            }
            _ => {}
        }
    }
    islands
}

/// Difference `a - b + 1` of two parts as a signed exponent
fn exponent(a: u32, b: u32) -> i64 {
    i64::from(a) - i64::from(b) + 1
}

/// Row of the island `k..=m` that does not advance
fn sample_stop<R>(lam: &Partition, mu: &Partition, (k, m): (usize, usize), q: f64, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let denominator = (k > 0).then(|| exponent(mu.get(k - 1), mu.get(k)));
    let first = first_stop_probability(q, exponent(lam.get(k), mu.get(k)), denominator);
    if rng.random::<f64>() < first {
        return k;
    }

    for s in k + 1..=m {
        let continuation = continuation_stop_probability(q, exponent(lam.get(s), mu.get(s)));
        if rng.random::<f64>() < continuation {
            return s;
        }
    }
    m + 1
}

/// Apply the q-deformed VH local rule with uniforms drawn from `rng`
pub fn step<R>(lam: &Partition, mu: &Partition, kappa: &Partition, bit: bool, q: f64, rng: &mut R) -> Partition
where
    R: Rng + ?Sized,
{
    let length = lam.len().max(mu.len()) + 2;
    let mut nu: Vec<u32> = (0..length).map(|i| lam.get(i)).collect();
    if bit && let Some(first) = nu.first_mut() {
        *first += 1;
    }

    for island in islands(mu, kappa) {
        let (k, m) = island;
        // The incoming bit already moved row 0, so the rest of the island follows
        let (start, stop) = if bit && k == 0 {
            (1, None)
        } else {
            (k, Some(sample_stop(lam, mu, island, q, rng)))
        };

        for idx in start..=m + 1 {
            if Some(idx) != stop
                && let Some(part) = nu.get_mut(idx)
            {
                *part = lam.get(idx) + 1;
            }
        }
    }

    for (idx, part) in nu.iter_mut().enumerate() {
        *part = (*part).max(mu.get(idx));
    }

    Partition::trim(nu)
}

/// q-Whittaker growth rule with per-cell seeded uniforms
#[derive(Clone, Copy, Debug)]
pub struct QWhittakerTransition {
    q: f64,
    seed: u64,
}

impl QWhittakerTransition {
    /// Create a transition for `0 <= q < 1` drawing uniforms from `seed`
    pub const fn new(q: f64, seed: u64) -> Self {
        Self { q, seed }
    }

    /// Deformation parameter
    pub const fn q(&self) -> f64 {
        self.q
    }
}

impl Transition for QWhittakerTransition {
    fn step(
        &self,
        cell: Cell,
        lam: &Partition,
        mu: &Partition,
        kappa: &Partition,
        bit: bool,
    ) -> Partition {
        let mut rng = cell_rng(self.seed, cell, CellStream::Uniform);
        step(lam, mu, kappa, bit, self.q, &mut rng)
    }
}
