//! Tests for growth diagram storage, staircase indexing and fill orders

#[cfg(test)]
mod tests {
    use aztec_growth::algorithm::inputs::random_bits;
    use aztec_growth::algorithm::schur::SchurTransition;
    use aztec_growth::algorithm::whittaker::QWhittakerTransition;
    use aztec_growth::spatial::diagram::{
        GrowthDiagram, in_staircase, staircase_cells, staircase_index, staircase_len,
    };
    use aztec_growth::{AlgorithmError, Partition};
    use bitvec::bits;
    use bitvec::order::Lsb0;

    // Tests staircase indices enumerate cells in row-major order
    // Verified by swapping the row and column roles in the index
    #[test]
    fn test_staircase_index_matches_row_major_order() {
        for n in 0..8 {
            let cells: Vec<_> = staircase_cells(n).collect();
            assert_eq!(cells.len(), staircase_len(n));
            for (expected, &(i, j)) in cells.iter().enumerate() {
                assert!(in_staircase(n, i, j));
                assert_eq!(staircase_index(n, i, j), Some(expected));
            }
        }
        assert_eq!(staircase_index(3, 0, 1), None);
        assert_eq!(staircase_index(3, 2, 3), None);
    }

    // Tests a new diagram has empty boundaries and an unfilled interior
    // Verified by initializing interior cells to the empty partition
    #[test]
    fn test_new_diagram_boundary() {
        let diagram = GrowthDiagram::new(3);
        for k in 0..=3 {
            assert!(diagram.get(0, k).unwrap().is_empty());
            assert!(diagram.get(k, 0).unwrap().is_empty());
        }
        assert!(matches!(
            diagram.get(1, 1),
            Err(AlgorithmError::UnfilledCell { i: 1, j: 1 })
        ));
        assert!(!diagram.is_complete());
    }

    // Tests access outside the staircase is rejected
    // Verified by dropping the i + j bound
    #[test]
    fn test_get_outside_staircase() {
        let diagram = GrowthDiagram::new(2);
        assert!(matches!(
            diagram.get(2, 2),
            Err(AlgorithmError::OutOfStaircase { i: 2, j: 2, n: 2 })
        ));
        assert!(matches!(
            diagram.get(0, 3),
            Err(AlgorithmError::OutOfStaircase { .. })
        ));
    }

    // Tests row-major fill produces the known cells for all-one bits
    // Verified by consuming bits column by column
    #[test]
    fn test_fill_known_cells() {
        let mut diagram = GrowthDiagram::new(2);
        diagram.fill(&SchurTransition, [true, true, true]).unwrap();

        assert!(diagram.is_complete());
        assert_eq!(diagram.get(1, 1).unwrap(), &Partition::trim(vec![1]));
        assert_eq!(diagram.get(1, 2).unwrap(), &Partition::trim(vec![1, 1]));
        assert_eq!(diagram.get(2, 1).unwrap(), &Partition::trim(vec![2]));
    }

    // Tests a short input stream reports how many bits were supplied
    // Verified by padding missing bits with zeros
    #[test]
    fn test_fill_input_exhausted() {
        let mut diagram = GrowthDiagram::new(2);
        let result = diagram.fill(&SchurTransition, [true, false]);
        assert!(matches!(
            result,
            Err(AlgorithmError::InputExhausted {
                required: 3,
                supplied: 2
            })
        ));

        let mut diagonal = GrowthDiagram::new(2);
        let result = diagonal.fill_by_diagonals(&SchurTransition, bits![1, 0], 2);
        assert!(matches!(
            result,
            Err(AlgorithmError::InputExhausted {
                required: 3,
                supplied: 2
            })
        ));
    }

    // Tests extra input is ignored rather than rejected
    // Verified by failing on leftover input
    #[test]
    fn test_fill_ignores_extra_input() {
        let mut diagram = GrowthDiagram::new(1);
        diagram.fill(&SchurTransition, [true, true, true]).unwrap();
        assert_eq!(diagram.get(1, 1).unwrap(), &Partition::trim(vec![1]));
    }

    // Tests anti-diagonal fill on worker threads matches row-major fill
    // Verified by reading bits in diagonal order instead of staircase order
    #[test]
    fn test_fill_orders_agree() {
        let n = 48;
        let bits = random_bits(n, 7, None);

        let mut row_major = GrowthDiagram::new(n);
        row_major.fill(&SchurTransition, bits.iter().by_vals()).unwrap();
        let mut diagonal = GrowthDiagram::new(n);
        diagonal.fill_by_diagonals(&SchurTransition, &bits, 4).unwrap();

        let transition = QWhittakerTransition::new(0.6, 7);
        let mut deformed_row_major = GrowthDiagram::new(n);
        deformed_row_major.fill(&transition, bits.iter().by_vals()).unwrap();
        let mut deformed_diagonal = GrowthDiagram::new(n);
        deformed_diagonal.fill_by_diagonals(&transition, &bits, 3).unwrap();

        for (i, j) in staircase_cells(n) {
            assert_eq!(row_major.get(i, j).unwrap(), diagonal.get(i, j).unwrap());
            assert_eq!(
                deformed_row_major.get(i, j).unwrap(),
                deformed_diagonal.get(i, j).unwrap()
            );
        }
    }
}
