//! Mathematical building blocks for the growth diagram

/// Integer partitions in canonical form
pub mod partition;
/// Powers of q and the stop probabilities of the q-deformed branching
pub mod probability;
