//! Top-level sampling procedure
//!
//! A [`GrowthSampler`] validates its configuration once, then draws any number
//! of samples. Each sample builds a fresh growth diagram, fills it with the
//! Schur rule (q = 0) or the q-Whittaker rule (q > 0) and reads the partition
//! sequence off the staircase boundary.

use crate::algorithm::boundary::extract;
use crate::algorithm::inputs::{EdgeWeights, random_bits};
use crate::algorithm::schur::SchurTransition;
use crate::algorithm::transition::Transition;
use crate::algorithm::whittaker::QWhittakerTransition;
use crate::io::configuration::{DEFAULT_Q, DEFAULT_SEED, DEFAULT_WORKERS, MAX_DIAMOND_ORDER};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::math::partition::Partition;
use crate::spatial::diagram::{GrowthDiagram, staircase_len};
use crate::spatial::tiling::Tiling;
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use serde::Serialize;

/// Order in which staircase cells are computed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillOrder {
    /// Row by row on the calling thread
    #[default]
    RowMajor,
    /// One anti-diagonal at a time, spread over worker threads
    AntiDiagonal,
}

/// Parameters of a sampling run
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Order of the Aztec diamond
    pub n: usize,
    /// Deformation parameter in `[0, 1)`
    pub q: f64,
    /// Explicit input bits in staircase order, drawn from the seed if absent
    pub bits: Option<BitVec>,
    /// Seed for bits and q-deformed uniforms
    pub seed: u64,
    /// Edge weights biasing the random bits
    pub weights: Option<EdgeWeights>,
    /// Cell fill order
    pub order: FillOrder,
    /// Worker threads for the anti-diagonal fill
    pub workers: usize,
}

impl SamplerConfig {
    /// Default configuration for a diamond of order `n`
    pub const fn new(n: usize) -> Self {
        Self {
            n,
            q: DEFAULT_Q,
            bits: None,
            seed: DEFAULT_SEED,
            weights: None,
            order: FillOrder::RowMajor,
            workers: DEFAULT_WORKERS,
        }
    }
}

/// One sampled boundary sequence
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    /// Order of the diamond
    pub n: usize,
    /// Deformation parameter the sample was drawn with
    pub q: f64,
    /// Seed the sample was drawn with
    pub seed: u64,
    /// The `2n + 1` boundary partitions
    pub partitions: Vec<Partition>,
}

impl Sample {
    /// Middle partition of the sequence, at the turn of the boundary path
    pub fn middle(&self) -> Option<&Partition> {
        self.partitions.get(self.n)
    }

    /// Domino tiling encoded by the sample
    ///
    /// # Errors
    ///
    /// Returns an error if the partitions do not describe a tiling
    pub fn tiling(&self) -> Result<Tiling> {
        Tiling::from_sequence(&self.partitions)
    }
}

/// Validated sampler for one configuration
#[derive(Clone, Debug)]
pub struct GrowthSampler {
    config: SamplerConfig,
}

impl GrowthSampler {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `q` is not a finite value in `[0, 1)`
    /// - `n` exceeds [`MAX_DIAMOND_ORDER`]
    /// - explicit bits do not number `n(n+1)/2`
    /// - edge weights do not cover `n` rows
    /// - no worker threads are requested
    pub fn new(config: SamplerConfig) -> Result<Self> {
        if !(config.q.is_finite() && (0.0..1.0).contains(&config.q)) {
            return Err(invalid_parameter(
                "q",
                &config.q,
                &"must be a finite value in [0, 1)",
            ));
        }
        if config.n > MAX_DIAMOND_ORDER {
            return Err(invalid_parameter(
                "n",
                &config.n,
                &format!("must be at most {MAX_DIAMOND_ORDER}"),
            ));
        }

        let required = staircase_len(config.n);
        if let Some(bits) = &config.bits
            && bits.len() != required
        {
            return Err(invalid_parameter(
                "bits",
                &bits.len(),
                &format!("expected {required} bits for n = {}", config.n),
            ));
        }
        if let Some(weights) = &config.weights
            && weights.len() != config.n
        {
            return Err(invalid_parameter(
                "weights",
                &weights.len(),
                &format!("expected {} weights per side", config.n),
            ));
        }
        if config.workers == 0 {
            return Err(invalid_parameter(
                "workers",
                &config.workers,
                &"at least one worker is required",
            ));
        }

        Ok(Self { config })
    }

    /// Validated configuration
    pub const fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draw a sample with the configured seed
    ///
    /// # Errors
    ///
    /// Returns an error if the diagram fill or boundary extraction fails
    pub fn sample(&self) -> Result<Sample> {
        self.sample_with_seed(self.config.seed)
    }

    /// Draw a sample with an explicit seed
    ///
    /// # Errors
    ///
    /// Returns an error if the diagram fill or boundary extraction fails
    pub fn sample_with_seed(&self, seed: u64) -> Result<Sample> {
        let diagram = self.diagram_with_seed(seed)?;
        let partitions = extract(&diagram).with_operation("boundary extraction")?;
        Ok(Sample {
            n: self.config.n,
            q: self.config.q,
            seed,
            partitions,
        })
    }

    /// Draw `count` samples, seeding sample `k` with `seed + k`
    ///
    /// `on_sample` observes each sample as soon as it is drawn.
    ///
    /// # Errors
    ///
    /// Returns the first sampling error
    pub fn sample_batch<F>(&self, count: usize, mut on_sample: F) -> Result<Vec<Sample>>
    where
        F: FnMut(usize, &Sample),
    {
        let mut samples = Vec::with_capacity(count);
        for k in 0..count {
            let sample = self.sample_with_seed(self.config.seed.wrapping_add(k as u64))?;
            on_sample(k, &sample);
            samples.push(sample);
        }
        Ok(samples)
    }

    /// Input bits used for a seed, in staircase order
    pub fn bits_for_seed(&self, seed: u64) -> BitVec {
        self.config.bits.clone().unwrap_or_else(|| {
            random_bits(self.config.n, seed, self.config.weights.as_ref())
        })
    }

    /// Fill a complete growth diagram for a seed
    ///
    /// # Errors
    ///
    /// Returns an error if the fill fails
    pub fn diagram_with_seed(&self, seed: u64) -> Result<GrowthDiagram> {
        let bits = self.bits_for_seed(seed);
        let mut diagram = GrowthDiagram::new(self.config.n);

        if self.config.q > 0.0 {
            let transition = QWhittakerTransition::new(self.config.q, seed);
            self.fill(&mut diagram, &transition, &bits)?;
        } else {
            self.fill(&mut diagram, &SchurTransition, &bits)?;
        }
        Ok(diagram)
    }

    fn fill<T>(&self, diagram: &mut GrowthDiagram, transition: &T, bits: &BitSlice) -> Result<()>
    where
        T: Transition,
    {
        match self.config.order {
            FillOrder::RowMajor => diagram.fill(transition, bits.iter().by_vals()),
            FillOrder::AntiDiagonal => {
                diagram.fill_by_diagonals(transition, bits, self.config.workers)
            }
        }
        .with_operation("growth diagram fill")
    }
}

/// Sample one boundary sequence
///
/// Draws the bits from `seed` (or [`DEFAULT_SEED`]) unless `bits` are given.
///
/// # Errors
///
/// Returns an error if the parameters are invalid
pub fn sample_sequence(
    n: usize,
    q: f64,
    bits: Option<&[bool]>,
    seed: Option<u64>,
) -> Result<Vec<Partition>> {
    let config = SamplerConfig {
        q,
        bits: bits.map(|bits| bits.iter().copied().collect()),
        seed: seed.unwrap_or(DEFAULT_SEED),
        ..SamplerConfig::new(n)
    };
    Ok(GrowthSampler::new(config)?.sample()?.partitions)
}
