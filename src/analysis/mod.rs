//! Analysis of sampled diagrams and sequences

/// Interlacing and conservation checks
pub mod invariants;
/// Aggregate statistics over many sampled sequences
pub mod statistics;
