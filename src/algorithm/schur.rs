//! Deterministic VH bijection of the uniform (q = 0) growth diagram

use crate::algorithm::transition::Transition;
use crate::math::partition::Partition;
use crate::spatial::diagram::Cell;

/// Apply the VH local rule
///
/// The carry starts as the input bit. Row `i` receives the carry when
/// `mu_i <= lam_i < mu_{i-1}` and the carry is reloaded with
/// `min(lam_i, mu_i) - kappa_i` whenever `lam_{i+1} < mu_i <= lam_i`.
/// Satisfies `|lam| + |mu| + bit = |kappa| + |nu|`.
pub fn step(lam: &Partition, mu: &Partition, kappa: &Partition, bit: bool) -> Partition {
    let length = lam.len().max(mu.len()) + 2;
    let mut carry = u32::from(bit);
    let mut nu = Vec::with_capacity(length);

    for i in 0..length {
        let (lam_i, mu_i) = (lam.get(i), mu.get(i));
        let mu_above = if i == 0 { u32::MAX } else { mu.get(i - 1) };

        let base = lam_i.max(mu_i);
        if mu_i <= lam_i && lam_i < mu_above {
            nu.push(base + carry);
        } else {
            nu.push(base);
        }

        if lam.get(i + 1) < mu_i && mu_i <= lam_i {
            carry = lam_i.min(mu_i).saturating_sub(kappa.get(i));
        }
    }

    Partition::trim(nu)
}

/// Uniform domino tiling rule, the q = 0 case of the growth diagram
#[derive(Clone, Copy, Debug, Default)]
pub struct SchurTransition;

impl Transition for SchurTransition {
    fn step(
        &self,
        _cell: Cell,
        lam: &Partition,
        mu: &Partition,
        kappa: &Partition,
        bit: bool,
    ) -> Partition {
        step(lam, mu, kappa, bit)
    }
}
