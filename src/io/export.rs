//! JSON export of sampled sequences for external renderers

use crate::algorithm::sampler::Sample;
use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{AlgorithmError, Result};
use crate::math::partition::Partition;
use ndarray::Array2;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One exported sample with optional tiling views
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleRecord {
    /// Order of the diamond
    pub n: usize,
    /// Deformation parameter
    pub q: f64,
    /// Seed the sample was drawn with
    pub seed: u64,
    /// The `2n + 1` boundary partitions
    pub partitions: Vec<Partition>,
    /// Rows of the `2n x 2n` occupancy grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<Vec<Vec<u8>>>,
    /// Rows of the vertex height function, bottom row first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heights: Option<Vec<Vec<Option<i32>>>>,
}

impl SampleRecord {
    /// Build a record, computing the requested tiling views
    ///
    /// # Errors
    ///
    /// Returns an error if a view is requested and the sample does not
    /// describe a valid tiling
    pub fn from_sample(sample: &Sample, occupancy: bool, heights: bool) -> Result<Self> {
        let tiling = if occupancy || heights {
            Some(sample.tiling()?)
        } else {
            None
        };

        let occupancy = match &tiling {
            Some(tiling) if occupancy => Some(rows(&tiling.occupancy_grid())),
            _ => None,
        };
        let heights = match &tiling {
            Some(tiling) if heights => Some(rows(&tiling.height_function()?)),
            _ => None,
        };

        Ok(Self {
            n: sample.n,
            q: sample.q,
            seed: sample.seed,
            partitions: sample.partitions.clone(),
            occupancy,
            heights,
        })
    }
}

/// Convert a 2D array into nested row vectors
pub fn rows<T: Clone>(array: &Array2<T>) -> Vec<Vec<T>> {
    array.outer_iter().map(|row| row.to_vec()).collect()
}

/// Output path with the JSON extension appended when none is present
pub fn output_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(OUTPUT_EXTENSION)
    }
}

/// Write records as a pretty-printed JSON array followed by a newline
///
/// # Errors
///
/// Returns an error if the records cannot be serialized or the file cannot be
/// written
pub fn write_json(path: &Path, records: &[SampleRecord]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(records).map_err(|source| {
        AlgorithmError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    json.push('\n');

    fs::write(path, json).map_err(|source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
