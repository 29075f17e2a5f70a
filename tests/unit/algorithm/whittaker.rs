//! Tests for island detection and the q-deformed VH step

#[cfg(test)]
mod tests {
    use aztec_growth::Partition;
    use aztec_growth::algorithm::inputs::random_bits;
    use aztec_growth::algorithm::schur::{self, SchurTransition};
    use aztec_growth::algorithm::whittaker::{QWhittakerTransition, islands, step};
    use aztec_growth::analysis::invariants::{is_horizontal_strip, is_vertical_strip};
    use aztec_growth::spatial::diagram::{GrowthDiagram, staircase_cells};
    use rand::{SeedableRng, rngs::StdRng};

    fn p(parts: &[u32]) -> Partition {
        Partition::trim(parts.to_vec())
    }

    // Tests islands are maximal runs where mu exceeds kappa by one
    // Verified by splitting runs at every row
    #[test]
    fn test_islands() {
        assert_eq!(islands(&p(&[2, 2, 1]), &p(&[1, 1, 1])), vec![(0, 1)]);
        assert_eq!(islands(&p(&[3, 2, 1]), &p(&[2, 2])), vec![(0, 0), (2, 2)]);
        assert_eq!(islands(&p(&[1, 1, 1]), &p(&[])), vec![(0, 2)]);
        assert!(islands(&p(&[]), &p(&[])).is_empty());
    }

    // Tests q = 0 reproduces the Schur step on every cell of sampled diagrams
    // Verified by stopping at m + 1 regardless of the first probability
    #[test]
    fn test_zero_q_matches_schur() {
        let mut rng = StdRng::seed_from_u64(17);
        for seed in 0..8 {
            let n = 12;
            let bits = random_bits(n, seed, None);
            let mut diagram = GrowthDiagram::new(n);
            diagram.fill(&SchurTransition, bits.iter().by_vals()).unwrap();

            for (index, (i, j)) in staircase_cells(n).enumerate() {
                let lam = diagram.get(i - 1, j).unwrap();
                let mu = diagram.get(i, j - 1).unwrap();
                let kappa = diagram.get(i - 1, j - 1).unwrap();
                let bit = bits[index];
                assert_eq!(
                    step(lam, mu, kappa, bit, 0.0, &mut rng),
                    schur::step(lam, mu, kappa, bit),
                    "cell ({i}, {j})"
                );
            }
        }
    }

    // Tests the deformed step keeps the strip relations and conserves boxes
    // Verified by flooring nu against lam instead of mu
    #[test]
    fn test_deformed_diagrams_interlace() {
        for (seed, q) in [(1, 0.3), (2, 0.6), (3, 0.95)] {
            let n = 12;
            let bits = random_bits(n, seed, None);
            let mut diagram = GrowthDiagram::new(n);
            let transition = QWhittakerTransition::new(q, seed);
            diagram.fill(&transition, bits.iter().by_vals()).unwrap();

            for (index, (i, j)) in staircase_cells(n).enumerate() {
                let lam = diagram.get(i - 1, j).unwrap();
                let mu = diagram.get(i, j - 1).unwrap();
                let kappa = diagram.get(i - 1, j - 1).unwrap();
                let nu = diagram.get(i, j).unwrap();

                assert!(is_vertical_strip(nu, lam), "nu / lam at ({i}, {j})");
                assert!(is_horizontal_strip(nu, mu), "nu / mu at ({i}, {j})");
                assert!(nu.size() >= lam.size().max(mu.size()));
                assert_eq!(
                    lam.size() + mu.size() + u64::from(bits[index]),
                    kappa.size() + nu.size()
                );
            }
        }
    }

    // Tests a forced island advances every row below the incoming bit
    // Verified by sampling the stop for islands starting at row 0
    #[test]
    fn test_forced_island() {
        let mut rng = StdRng::seed_from_u64(0);
        let nu = step(&p(&[]), &p(&[1, 1]), &p(&[]), true, 0.9, &mut rng);
        assert_eq!(nu, p(&[1, 1, 1]));
    }

    // Tests the transition replays the same uniforms for the same seed and cell
    // Verified by sharing one generator across calls
    #[test]
    fn test_transition_reproducible() {
        use aztec_growth::algorithm::transition::Transition;

        let transition = QWhittakerTransition::new(0.8, 99);
        assert!((transition.q() - 0.8).abs() < f64::EPSILON);
        let (lam, mu, kappa) = (p(&[2, 1]), p(&[2, 1, 1]), p(&[1, 1]));
        let first = transition.step((3, 2), &lam, &mu, &kappa, false);
        for _ in 0..5 {
            assert_eq!(transition.step((3, 2), &lam, &mu, &kappa, false), first);
        }
    }
}
