//! Growth diagram sampler for random domino tilings of the Aztec diamond
//!
//! A staircase growth diagram is filled with local VH steps, either the
//! deterministic Schur bijection driven by random bits (uniform tilings) or its
//! q-deformation sampling the q-Whittaker measure. The partitions read along
//! the staircase boundary encode a domino tiling, which can be converted into
//! dominoes, an occupancy grid or a height function for external renderers.

#![forbid(unsafe_code)]

/// Local transitions, per-cell inputs, boundary extraction and the sampler
pub mod algorithm;
/// Invariant checks and sample statistics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Integer partitions and q-probabilities
pub mod math;
/// Growth diagram storage, Maya encoding and domino tilings
pub mod spatial;

pub use algorithm::sampler::{GrowthSampler, Sample, SamplerConfig, sample_sequence};
pub use io::error::{AlgorithmError, Result};
pub use math::partition::Partition;
