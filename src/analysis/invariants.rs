//! Interlacing and conservation checks for growth diagrams
//!
//! These checks are used by the tests and by the `--check` command-line flag.
//! They never run on the sampling path itself.

use crate::io::error::{ErrorContext, Result, WithContext, invalid_parameter, invariant_violation};
use crate::math::partition::Partition;
use crate::spatial::diagram::{GrowthDiagram, staircase_cells, staircase_index};
use bitvec::slice::BitSlice;

/// Number of rows to compare so every non-zero part of either side is seen
fn span(outer: &Partition, inner: &Partition) -> usize {
    outer.len().max(inner.len()) + 1
}

/// Test whether `outer / inner` is a horizontal strip
///
/// Equivalent to the interlacing `outer_i >= inner_i >= outer_{i+1}` for all
/// `i`: at most one box is added in each column.
pub fn is_horizontal_strip(outer: &Partition, inner: &Partition) -> bool {
    (0..span(outer, inner)).all(|i| outer.get(i) >= inner.get(i) && inner.get(i) >= outer.get(i + 1))
}

/// Test whether `outer / inner` is a vertical strip
///
/// Every row grows by at most one box.
pub fn is_vertical_strip(outer: &Partition, inner: &Partition) -> bool {
    (0..span(outer, inner)).all(|i| {
        let (a, b) = (outer.get(i), inner.get(i));
        a >= b && a - b <= 1
    })
}

/// Check a boundary sequence read along the staircase
///
/// Steps alternate between growth by a vertical strip (down the staircase)
/// and removal of a horizontal strip (left along it). The first and last
/// partitions are empty.
///
/// # Errors
///
/// Returns an error if the length is even or any of the conditions fails
pub fn check_sequence(sequence: &[Partition]) -> Result<()> {
    if sequence.len() % 2 == 0 {
        return Err(invalid_parameter(
            "sequence",
            &sequence.len(),
            &"length must be 2n + 1",
        ));
    }

    let ends = [sequence.first(), sequence.last()];
    if ends.iter().any(|end| end.is_some_and(|p| !p.is_empty())) {
        return Err(invariant_violation(
            "boundary",
            &"first and last partitions must be empty",
        ));
    }

    for (t, pair) in sequence.windows(2).enumerate() {
        let [previous, current] = pair else {
            continue;
        };
        let valid = if t % 2 == 0 {
            is_vertical_strip(current, previous)
        } else {
            is_horizontal_strip(previous, current)
        };
        if !valid {
            let relation = if t % 2 == 0 { "vertical strip growth" } else { "horizontal strip removal" };
            return Err(invariant_violation(
                "sequence interlacing",
                &format!("step {t}: {previous} -> {current} is not a {relation}"),
            ));
        }
    }
    Ok(())
}

/// Check every interior cell of a filled diagram
///
/// Verifies the four strip relations around each cell and box conservation
/// `|lam| + |mu| + bit = |kappa| + |nu|` against the input bits.
///
/// # Errors
///
/// Returns an error naming the first cell that violates a relation
pub fn check_diagram(diagram: &GrowthDiagram, bits: &BitSlice) -> Result<()> {
    let n = diagram.n();
    for (i, j) in staircase_cells(n) {
        let context = ErrorContext {
            cell: Some((i, j)),
            operation: Some("diagram check"),
        };
        check_cell(diagram, bits, i, j).with_context(context)?;
    }
    Ok(())
}

fn check_cell(diagram: &GrowthDiagram, bits: &BitSlice, i: usize, j: usize) -> Result<()> {
    let lam = diagram.get(i - 1, j)?;
    let mu = diagram.get(i, j - 1)?;
    let kappa = diagram.get(i - 1, j - 1)?;
    let nu = diagram.get(i, j)?;

    let relations = [
        ("lam / kappa horizontal strip", is_horizontal_strip(lam, kappa)),
        ("mu / kappa vertical strip", is_vertical_strip(mu, kappa)),
        ("nu / lam vertical strip", is_vertical_strip(nu, lam)),
        ("nu / mu horizontal strip", is_horizontal_strip(nu, mu)),
    ];
    if let Some((relation, _)) = relations.iter().find(|(_, holds)| !holds) {
        return Err(invariant_violation(
            "interlacing",
            &format!("{relation} fails for lam = {lam}, mu = {mu}, kappa = {kappa}, nu = {nu}"),
        ));
    }

    let bit = staircase_index(diagram.n(), i, j)
        .is_some_and(|index| bits.get(index).as_deref() == Some(&true));
    let incoming = lam.size() + mu.size() + u64::from(bit);
    let outgoing = kappa.size() + nu.size();
    if incoming != outgoing {
        return Err(invariant_violation(
            "conservation",
            &format!("|lam| + |mu| + bit = {incoming} but |kappa| + |nu| = {outgoing}"),
        ));
    }
    Ok(())
}
