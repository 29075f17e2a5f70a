//! Progress tracking for sampling batches with automatic batching for many q values

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for sampling batches
///
/// Shows one bar per batch for a handful of q values and adds a single
/// overall bar when there are more batches than visible bars
pub struct ProgressManager {
    multi_progress: MultiProgress,
    overall_bar: Option<ProgressBar>,
    batch_bars: Vec<ProgressBar>,
    batch_count: usize,
    /// Stores (`label`, `completed`, `samples`) for rolling window display
    batch_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static OVERALL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Batches: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            overall_bar: None,
            batch_bars: Vec::new(),
            batch_count: 0,
            batch_states: Vec::new(),
        }
    }

    /// Initialize progress bars for the given number of batches
    pub fn initialize(&mut self, batch_count: usize) {
        self.batch_count = batch_count;

        if batch_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let overall_bar = ProgressBar::new(batch_count as u64);
            overall_bar.set_style(OVERALL_STYLE.clone());
            self.overall_bar = Some(self.multi_progress.add(overall_bar));
        }

        let bars_to_create = batch_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.batch_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of batches the manager was initialized for
    pub const fn batch_count(&self) -> usize {
        self.batch_count
    }

    /// Configure the bar of a new batch
    pub fn start_batch(&mut self, index: usize, label: &str, samples: usize) {
        if index >= self.batch_states.len() {
            self.batch_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.batch_states.get_mut(index) {
            *state = (label.to_string(), 0, samples);
        }
        self.update_bars();
    }

    /// Report the number of samples drawn so far in a batch
    pub fn update_batch(&mut self, index: usize, completed: usize) {
        if let Some(state) = self.batch_states.get_mut(index) {
            state.1 = completed;
        }
        self.update_bars();
    }

    /// Mark a batch as completed
    pub fn complete_batch(&mut self, index: usize) {
        if let Some(ref overall_bar) = self.overall_bar {
            overall_bar.inc(1);
        }

        if let Some(state) = self.batch_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref overall_bar) = self.overall_bar {
            overall_bar.finish_with_message("All batches sampled");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update the bars to show the most recent batches
    fn update_bars(&self) {
        let active: Vec<_> = self
            .batch_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, completed, samples)) in visible.iter().enumerate() {
            if let Some(bar) = self.batch_bars.get(bar_idx) {
                bar.set_length(*samples as u64);
                bar.set_position(*completed as u64);
                let width = samples.to_string().len();
                bar.set_message(format!("{completed:>width$}/{samples}"));
                bar.set_prefix(label.clone());
            }
        }

        for bar_idx in visible.len()..self.batch_bars.len() {
            if let Some(bar) = self.batch_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
