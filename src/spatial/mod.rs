//! Spatial data structures of the sampler
//!
//! This module contains spatial-related functionality including:
//! - The staircase growth diagram and its fill orders
//! - Maya (particle) encoding of partitions on diamond slices
//! - Domino tilings, occupancy grids and height functions

/// Growth diagram storage and dependency-ordered filling
pub mod diagram;
/// Particle positions of partitions on the slices of the diamond
pub mod maya;
/// Domino tilings built from boundary partition sequences
pub mod tiling;

pub use diagram::GrowthDiagram;
pub use tiling::Tiling;
