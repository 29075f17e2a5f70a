//! Sampler constants and runtime configuration defaults

/// Largest diamond order accepted by the sampler
///
/// The diagram holds (n+1)^2 partitions of up to n parts each, so memory
/// grows cubically with the order.
pub const MAX_DIAMOND_ORDER: usize = 1_000;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default number of samples drawn per q value
pub const DEFAULT_SAMPLE_COUNT: usize = 1;

/// Default q parameter (uniform Schur case)
pub const DEFAULT_Q: f64 = 0.0;

/// Default number of worker threads for anti-diagonal filling
pub const DEFAULT_WORKERS: usize = 4;

/// Anti-diagonals shorter than this are filled on the calling thread
pub const MIN_CELLS_PER_WORKER: usize = 16;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Output settings
/// Extension appended when an output path has none
pub const OUTPUT_EXTENSION: &str = "json";
