/// Staircase boundary path and partition sequence extraction
pub mod boundary;
/// Per-cell random inputs and edge weights
pub mod inputs;
/// Validated sampling procedure and batch sampling
pub mod sampler;
/// Deterministic VH bijection for the uniform measure
pub mod schur;
/// Local growth rule trait
pub mod transition;
/// q-deformed VH step with island sampling
pub mod whittaker;
