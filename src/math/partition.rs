//! Integer partitions in canonical form
//!
//! A partition is stored as its non-zero parts in weakly decreasing order.
//! Indexing past the last part yields zero, which lets the transitions treat
//! every partition as an infinite sequence padded with zeros.

use crate::io::error::{Result, invalid_parameter};
use serde::Serialize;
use std::fmt;

/// Immutable integer partition with trailing zeros trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Partition {
    parts: Vec<u32>,
}

impl Partition {
    /// The empty partition
    pub const fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Create a partition from parts, validating the weakly decreasing order
    ///
    /// Trailing zeros are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if any part is larger than the part before it
    pub fn new(parts: Vec<u32>) -> Result<Self> {
        if let Some(window) = parts.windows(2).find(|w| matches!(w, [a, b] if a < b)) {
            return Err(invalid_parameter(
                "partition",
                &format!("{parts:?}"),
                &format!("parts must be weakly decreasing, found {window:?}"),
            ));
        }
        Ok(Self::trim(parts))
    }

    /// Build a partition from raw parts by dropping trailing zeros
    ///
    /// The caller guarantees the parts are weakly decreasing.
    pub fn trim(mut parts: Vec<u32>) -> Self {
        while parts.last() == Some(&0) {
            parts.pop();
        }
        debug_assert!(
            parts.windows(2).all(|w| matches!(w, [a, b] if a >= b)),
            "parts must be weakly decreasing: {parts:?}"
        );
        Self { parts }
    }

    /// Get the i-th part (0-indexed), or 0 beyond the last part
    pub fn get(&self, i: usize) -> u32 {
        self.parts.get(i).copied().unwrap_or(0)
    }

    /// Number of non-zero parts
    pub const fn len(&self) -> usize {
        self.parts.len()
    }

    /// Test whether this is the empty partition
    pub const fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total number of boxes
    pub fn size(&self) -> u64 {
        self.parts.iter().map(|&p| u64::from(p)).sum()
    }

    /// Largest part, or 0 for the empty partition
    pub fn first(&self) -> u32 {
        self.get(0)
    }

    /// Non-zero parts in weakly decreasing order
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, ")")
    }
}

impl From<Partition> for Vec<u32> {
    fn from(partition: Partition) -> Self {
        partition.parts
    }
}
