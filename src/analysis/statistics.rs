//! Running averages over sampled boundary sequences

use crate::io::error::{Result, invalid_parameter};
use crate::math::partition::Partition;

/// Accumulates size profiles and middle-partition shape over many samples
#[derive(Clone, Debug, Default)]
pub struct SequenceStatistics {
    samples: usize,
    size_totals: Vec<u64>,
    middle_first_total: u64,
    middle_length_total: u64,
}

impl SequenceStatistics {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one boundary sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence length differs from the sequences
    /// already accumulated or is even
    pub fn accumulate(&mut self, sequence: &[Partition]) -> Result<()> {
        if sequence.len() % 2 == 0 {
            return Err(invalid_parameter(
                "sequence",
                &sequence.len(),
                &"length must be 2n + 1",
            ));
        }
        if self.samples == 0 {
            self.size_totals = vec![0; sequence.len()];
        } else if self.size_totals.len() != sequence.len() {
            return Err(invalid_parameter(
                "sequence",
                &sequence.len(),
                &format!("expected length {}", self.size_totals.len()),
            ));
        }

        for (total, partition) in self.size_totals.iter_mut().zip(sequence) {
            *total += partition.size();
        }
        if let Some(middle) = sequence.get(sequence.len() / 2) {
            self.middle_first_total += u64::from(middle.first());
            self.middle_length_total += middle.len() as u64;
        }
        self.samples += 1;
        Ok(())
    }

    /// Number of accumulated sequences
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Mean size of the partition at each position of the sequence
    pub fn mean_sizes(&self) -> Vec<f64> {
        self.size_totals
            .iter()
            .map(|&total| self.mean(total))
            .collect()
    }

    /// Mean size of the middle partition
    pub fn mean_middle_size(&self) -> f64 {
        self.size_totals
            .get(self.size_totals.len() / 2)
            .map_or(0.0, |&total| self.mean(total))
    }

    /// Mean largest part of the middle partition
    pub const fn mean_middle_first_part(&self) -> f64 {
        self.mean(self.middle_first_total)
    }

    /// Mean number of parts of the middle partition
    pub const fn mean_middle_length(&self) -> f64 {
        self.mean(self.middle_length_total)
    }

    const fn mean(&self, total: u64) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            total as f64 / self.samples as f64
        }
    }
}
