//! Tests for the sequence-to-tiling bijection, occupancy grids and heights

#[cfg(test)]
mod tests {
    use aztec_growth::spatial::tiling::{Domino, DominoKind, Tiling};
    use aztec_growth::{AlgorithmError, Partition, sample_sequence};
    use ndarray::Array2;
    use std::collections::HashSet;

    fn p(parts: &[u32]) -> Partition {
        Partition::trim(parts.to_vec())
    }

    fn height_at(heights: &Array2<Option<i32>>, n: i32, x: i32, y: i32) -> Option<i32> {
        heights
            .get([(y + n) as usize, (x + n) as usize])
            .copied()
            .flatten()
    }

    // Tests the order one diamond decodes into its two tilings
    // Verified by pairing forward squares with forward squares
    #[test]
    fn test_order_one_tilings() {
        let vertical = Tiling::from_sequence(&[p(&[]), p(&[]), p(&[])]).unwrap();
        let kinds: HashSet<_> = vertical.dominoes().iter().copied().collect();
        assert_eq!(
            kinds,
            HashSet::from([
                Domino { x: -1, y: -1, kind: DominoKind::West },
                Domino { x: 0, y: -1, kind: DominoKind::East },
            ])
        );

        let horizontal = Tiling::from_sequence(&[p(&[]), p(&[1]), p(&[])]).unwrap();
        let kinds: HashSet<_> = horizontal.dominoes().iter().copied().collect();
        assert_eq!(
            kinds,
            HashSet::from([
                Domino { x: -1, y: 0, kind: DominoKind::North },
                Domino { x: -1, y: -1, kind: DominoKind::South },
            ])
        );
    }

    // Tests the all-ones order two sequence gives an all-horizontal tiling
    // Verified by swapping the parity keys of North and East
    #[test]
    fn test_order_two_brick_wall() {
        let sequence = [p(&[]), p(&[1, 1]), p(&[1]), p(&[2]), p(&[])];
        let tiling = Tiling::from_sequence(&sequence).unwrap();

        assert_eq!(tiling.n(), 2);
        assert_eq!(tiling.dominoes().len(), 6);
        assert_eq!(tiling.kind_counts(), [3, 3, 0, 0]);
        assert!(tiling.dominoes().iter().all(|d| d.kind.is_horizontal()));
        assert!(
            tiling
                .dominoes()
                .contains(&Domino { x: 0, y: 0, kind: DominoKind::North })
        );
        assert!(
            tiling
                .dominoes()
                .contains(&Domino { x: -1, y: -2, kind: DominoKind::South })
        );
    }

    // Tests sampled tilings cover the diamond and survive the grid round trip
    // Verified by offsetting the grid column of vertical dominoes
    #[test]
    fn test_occupancy_grid_round_trip() {
        for (n, q, seed) in [(3, 0.0, 1), (6, 0.0, 2), (6, 0.7, 3), (9, 0.4, 4)] {
            let sequence = sample_sequence(n, q, None, Some(seed)).unwrap();
            let tiling = Tiling::from_sequence(&sequence).unwrap();
            assert_eq!(tiling.dominoes().len(), n * (n + 1));

            let grid = tiling.occupancy_grid();
            assert_eq!(grid.dim(), (2 * n, 2 * n));
            assert_eq!(grid.iter().map(|&v| usize::from(v)).sum::<usize>(), n * (n + 1));

            let rebuilt = Tiling::from_occupancy_grid(&grid).unwrap();
            let original: HashSet<_> = tiling.dominoes().iter().copied().collect();
            let decoded: HashSet<_> = rebuilt.dominoes().iter().copied().collect();
            assert_eq!(original, decoded);
        }
    }

    // Tests malformed sequences and grids are rejected
    // Verified by skipping the box check on slice partitions
    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            Tiling::from_sequence(&[p(&[]), p(&[])]),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Tiling::from_sequence(&[p(&[]), p(&[2]), p(&[])]),
            Err(AlgorithmError::InvariantViolation { .. })
        ));

        assert!(matches!(
            Tiling::from_occupancy_grid(&Array2::zeros((2, 4))),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Tiling::from_occupancy_grid(&Array2::zeros((4, 4))),
            Err(AlgorithmError::InvariantViolation { .. })
        ));
    }

    // Tests heights of the two order one tilings
    // Verified by flipping the sign convention for white squares
    #[test]
    fn test_order_one_heights() {
        let vertical = Tiling::from_sequence(&[p(&[]), p(&[]), p(&[])]).unwrap();
        let heights = vertical.height_function().unwrap();
        assert_eq!(heights.dim(), (3, 3));
        assert_eq!(height_at(&heights, 1, -1, 0), Some(0));
        assert_eq!(height_at(&heights, 1, 0, 0), Some(3));
        assert_eq!(height_at(&heights, 1, 0, 1), Some(2));
        assert_eq!(height_at(&heights, 1, 1, 1), Some(1));

        let horizontal = Tiling::from_sequence(&[p(&[]), p(&[1]), p(&[])]).unwrap();
        let heights = horizontal.height_function().unwrap();
        assert_eq!(height_at(&heights, 1, 0, 0), Some(-1));
        assert_eq!(height_at(&heights, 1, 1, 0), Some(0));
    }

    // Tests boundary heights do not depend on the tiling
    // Verified by charging +1 for edges inside dominoes
    #[test]
    fn test_boundary_heights_fixed() {
        let brick = Tiling::from_sequence(&[p(&[]), p(&[1, 1]), p(&[1]), p(&[2]), p(&[])]).unwrap();
        let columns = Tiling::from_sequence(&vec![p(&[]); 5]).unwrap();
        let (a, b) = (brick.height_function().unwrap(), columns.height_function().unwrap());

        for (x, y, h) in [(-2, 0, 0), (2, 0, 0), (0, 2, -4), (0, -2, -4), (-1, 2, -3), (2, 1, -1)] {
            assert_eq!(height_at(&a, 2, x, y), Some(h));
            assert_eq!(height_at(&b, 2, x, y), Some(h));
        }
        assert_eq!(height_at(&a, 2, 0, 0), Some(0));
        assert_eq!(height_at(&b, 2, 0, 0), Some(-4));
        assert_eq!(height_at(&a, 2, -2, -2), None);
    }

    // Tests heights are consistent for large sampled tilings
    // Verified by corrupting one domino before computing heights
    #[test]
    fn test_sampled_heights_consistent() {
        let sequence = sample_sequence(12, 0.0, None, Some(11)).unwrap();
        let tiling = Tiling::from_sequence(&sequence).unwrap();
        let heights = tiling.height_function().unwrap();
        let defined = heights.iter().filter(|h| h.is_some()).count();
        // 2n^2 + 6n + 1 vertices lie on the diamond
        assert_eq!(defined, 2 * 12 * 12 + 6 * 12 + 1);
        assert_eq!(height_at(&heights, 12, -12, 0), Some(0));
    }
}
