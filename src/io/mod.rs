/// Command-line interface and batch sampling driver
pub mod cli;
/// Sampler constants and defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// JSON export of sample records
pub mod export;
/// Progress bars for sampling batches
pub mod progress;
