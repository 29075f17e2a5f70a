//! Tests for progress tracking across sampling batches

#[cfg(test)]
mod tests {
    use aztec_growth::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use aztec_growth::io::progress::ProgressManager;

    // Tests ProgressManager construction and an empty run
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        assert_eq!(pm.batch_count(), 0);
        pm.finish();

        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.start_batch(0, "q = 0", 10);
        pm.update_batch(0, 5);
        pm.complete_batch(0);
        pm.finish();
    }

    // Tests individual progress bars
    // Verified by creating one less progress bar
    #[test]
    fn test_batches_under_limit() {
        let mut pm = ProgressManager::new();
        let batch_count = MAX_INDIVIDUAL_PROGRESS_BARS - 1;
        pm.initialize(batch_count);
        assert_eq!(pm.batch_count(), batch_count);

        for i in 0..batch_count {
            pm.start_batch(i, &format!("q = 0.{i}"), 100);
            for completed in [25, 50, 75, 100] {
                pm.update_batch(i, completed);
            }
            pm.complete_batch(i);
        }
        pm.finish();
    }

    // Tests the overall bar for many q values
    // Verified by changing the overall mode threshold
    #[test]
    fn test_batches_over_limit() {
        let mut pm = ProgressManager::new();
        let batch_count = MAX_INDIVIDUAL_PROGRESS_BARS + 5;
        pm.initialize(batch_count);

        for i in 0..batch_count {
            pm.start_batch(i, &format!("batch {i}"), 10);
            pm.update_batch(i, 5);
            pm.complete_batch(i);
        }
        pm.finish();
    }

    // Tests out-of-bounds and out-of-order indices
    // Verified by using unchecked indexing
    #[test]
    fn test_out_of_bounds_batch_index() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        pm.update_batch(10, 50);
        pm.complete_batch(10);
        pm.start_batch(5, "late", 20);
        pm.update_batch(5, 20);
        pm.finish();
    }
}
