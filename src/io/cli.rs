//! Command-line interface for batch sampling of Aztec diamond tilings

use crate::algorithm::inputs::EdgeWeights;
use crate::algorithm::sampler::{FillOrder, GrowthSampler, Sample, SamplerConfig};
use crate::analysis::invariants::{check_diagram, check_sequence};
use crate::analysis::statistics::SequenceStatistics;
use crate::io::configuration::{DEFAULT_Q, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, DEFAULT_WORKERS};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::export::{SampleRecord, output_path, write_json};
use crate::io::progress::ProgressManager;
use bitvec::vec::BitVec;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aztec-growth")]
#[command(
    author,
    version,
    about = "Sample random domino tilings of the Aztec diamond with growth diagrams"
)]
/// Command-line arguments for the sampler
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Order of the Aztec diamond
    #[arg(value_name = "N")]
    pub n: usize,

    /// Deformation parameter in [0, 1); repeat to sample several values
    #[arg(short = 'q', long = "q", value_name = "Q", default_values_t = [DEFAULT_Q])]
    pub q: Vec<f64>,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of samples per q value
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    /// Input bits in staircase order, as a string of 0 and 1
    #[arg(short, long)]
    pub bits: Option<String>,

    /// Edge weights of the weighted process as `x1,..,xn;y1,..,yn`
    #[arg(short, long)]
    pub weights: Option<String>,

    /// Write samples as JSON to this file instead of printing them
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include the occupancy grid in JSON output
    #[arg(long)]
    pub grid: bool,

    /// Include the height function in JSON output
    #[arg(long)]
    pub heights: bool,

    /// Verify interlacing, conservation and the tiling of every sample
    #[arg(long)]
    pub check: bool,

    /// Fill the growth diagram by anti-diagonals on worker threads
    #[arg(long)]
    pub diagonal: bool,

    /// Worker threads for the anti-diagonal fill
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Fill order selected by the flags
    pub const fn fill_order(&self) -> FillOrder {
        if self.diagonal {
            FillOrder::AntiDiagonal
        } else {
            FillOrder::RowMajor
        }
    }
}

/// Parse a bit string such as `"101"` or `"1,0,1"`
///
/// Commas, underscores and whitespace are ignored.
///
/// # Errors
///
/// Returns an error if the string contains any other character
pub fn parse_bits(text: &str) -> Result<BitVec> {
    text.chars()
        .filter(|c| !(c.is_whitespace() || *c == ',' || *c == '_'))
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(invalid_parameter(
                "bits",
                &text,
                &format!("unexpected character '{other}', expected 0 or 1"),
            )),
        })
        .collect()
}

/// Parse edge weights such as `"1,2;0.5,1"`
///
/// Row weights come before the semicolon and column weights after it.
/// Whitespace around values is ignored.
///
/// # Errors
///
/// Returns an error if the semicolon is missing, a value is not a number, or
/// the weights fail [`EdgeWeights::new`] validation
pub fn parse_weights(text: &str) -> Result<EdgeWeights> {
    let Some((rows, columns)) = text.split_once(';') else {
        return Err(invalid_parameter(
            "weights",
            &text,
            &"expected row and column weights separated by ';'",
        ));
    };

    let parse_side = |side: &str| -> Result<Vec<f64>> {
        side.split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value.parse::<f64>().map_err(|error| {
                    invalid_parameter("weights", &value, &format!("not a number: {error}"))
                })
            })
            .collect()
    };

    EdgeWeights::new(parse_side(rows)?, parse_side(columns)?)
}

/// One batch of samples drawn with a single q value
pub struct Batch {
    /// Deformation parameter of the batch
    pub q: f64,
    /// Samples in seed order
    pub samples: Vec<Sample>,
    /// Aggregates over the batch
    pub statistics: SequenceStatistics,
}

/// Orchestrates sampling for every requested q value with progress tracking
pub struct SampleRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SampleRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Sample, then write JSON or print the sequences
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid, a check fails or the
    /// output cannot be written
    // Allow print for the sampled sequences and summaries
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let batches = self.sample_all()?;

        if let Some(path) = &self.cli.output {
            let records = batches
                .iter()
                .flat_map(|batch| &batch.samples)
                .map(|sample| SampleRecord::from_sample(sample, self.cli.grid, self.cli.heights))
                .collect::<Result<Vec<_>>>()?;
            write_json(&output_path(path), &records)?;
        } else {
            for sample in batches.iter().flat_map(|batch| &batch.samples) {
                print!("{}", format_sample(sample));
            }
        }

        if self.cli.count > 1 {
            for batch in &batches {
                print!("{}", format_summary(batch));
            }
        }
        Ok(())
    }

    /// Draw every batch
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid or a requested check fails
    pub fn sample_all(&mut self) -> Result<Vec<Batch>> {
        let bits = self.cli.bits.as_deref().map(parse_bits).transpose()?;
        let weights = self
            .cli
            .weights
            .as_deref()
            .map(parse_weights)
            .transpose()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.q.len());
        }

        let mut batches = Vec::with_capacity(self.cli.q.len());
        for (index, &q) in self.cli.q.iter().enumerate() {
            let config = SamplerConfig {
                q,
                bits: bits.clone(),
                seed: self.cli.seed,
                weights: weights.clone(),
                order: self.cli.fill_order(),
                workers: self.cli.workers,
                ..SamplerConfig::new(self.cli.n)
            };
            let sampler = GrowthSampler::new(config)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_batch(index, &format!("q = {q}"), self.cli.count);
            }

            let progress = &mut self.progress_manager;
            let samples = sampler.sample_batch(self.cli.count, |k, _| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_batch(index, k + 1);
                }
            })?;

            let mut statistics = SequenceStatistics::new();
            for sample in &samples {
                if self.cli.check {
                    verify_sample(&sampler, sample)?;
                }
                statistics.accumulate(&sample.partitions)?;
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_batch(index);
            }
            batches.push(Batch {
                q,
                samples,
                statistics,
            });
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(batches)
    }
}

/// Run every invariant check on one sample
fn verify_sample(sampler: &GrowthSampler, sample: &Sample) -> Result<()> {
    let diagram = sampler.diagram_with_seed(sample.seed)?;
    check_diagram(&diagram, &sampler.bits_for_seed(sample.seed))?;
    check_sequence(&sample.partitions).with_operation("sequence check")?;
    sample.tiling().with_operation("tiling check")?;
    Ok(())
}

/// Text form of one sample, one partition per line
pub fn format_sample(sample: &Sample) -> String {
    let header = format!(
        "# n = {}, q = {}, seed = {}",
        sample.n, sample.q, sample.seed
    );
    std::iter::once(header)
        .chain(sample.partitions.iter().map(ToString::to_string))
        .map(|line| line + "\n")
        .collect()
}

/// Text summary of the mean sizes of a batch
pub fn format_summary(batch: &Batch) -> String {
    let statistics = &batch.statistics;
    let sizes = statistics
        .mean_sizes()
        .iter()
        .map(|size| format!("{size:.3}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "# q = {} over {} samples\nmean sizes: {sizes}\n\
         middle partition: size {:.3}, first part {:.3}, length {:.3}\n",
        batch.q,
        statistics.samples(),
        statistics.mean_middle_size(),
        statistics.mean_middle_first_part(),
        statistics.mean_middle_length()
    )
}
