//! Tests for running averages over sampled sequences

#[cfg(test)]
mod tests {
    use aztec_growth::analysis::statistics::SequenceStatistics;
    use aztec_growth::{AlgorithmError, Partition};

    fn p(parts: &[u32]) -> Partition {
        Partition::trim(parts.to_vec())
    }

    // Tests means over two hand-made sequences
    // Verified by dividing by the sequence length instead of the sample count
    #[test]
    fn test_means() {
        let mut statistics = SequenceStatistics::new();
        statistics
            .accumulate(&[p(&[]), p(&[1, 1]), p(&[1]), p(&[2]), p(&[])])
            .unwrap();
        statistics
            .accumulate(&[p(&[]), p(&[]), p(&[]), p(&[]), p(&[])])
            .unwrap();

        assert_eq!(statistics.samples(), 2);
        assert_eq!(statistics.mean_sizes(), vec![0.0, 1.0, 0.5, 1.0, 0.0]);
        assert!((statistics.mean_middle_size() - 0.5).abs() < f64::EPSILON);
        assert!((statistics.mean_middle_first_part() - 0.5).abs() < f64::EPSILON);
        assert!((statistics.mean_middle_length() - 0.5).abs() < f64::EPSILON);
    }

    // Tests an empty accumulator reports zero means
    // Verified by dividing by zero samples
    #[test]
    fn test_empty_statistics() {
        let statistics = SequenceStatistics::default();
        assert_eq!(statistics.samples(), 0);
        assert!(statistics.mean_sizes().is_empty());
        assert!(statistics.mean_middle_size().abs() < f64::EPSILON);
        assert!(statistics.mean_middle_length().abs() < f64::EPSILON);
    }

    // Tests sequences of different orders cannot be mixed
    // Verified by resizing the totals on every call
    #[test]
    fn test_length_mismatch() {
        let mut statistics = SequenceStatistics::new();
        statistics.accumulate(&[p(&[]), p(&[1]), p(&[])]).unwrap();
        assert!(matches!(
            statistics.accumulate(&[p(&[]), p(&[]), p(&[]), p(&[]), p(&[])]),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(statistics.accumulate(&[p(&[]), p(&[])]).is_err());
        assert_eq!(statistics.samples(), 1);
    }
}
