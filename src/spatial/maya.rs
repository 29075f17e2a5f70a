//! Maya diagram encoding of partitions on diamond slices
//!
//! A partition fitting in a `count x (slots - count)` box is encoded as
//! `count` occupied positions (particles) among `slots` sites. The i-th
//! particle sits at `x_i = partition_{count+1-i} + i`, so an empty partition
//! packs every particle to the left.

use crate::io::error::{Result, invalid_parameter};
use crate::math::partition::Partition;

/// Particle positions (1-based, increasing) of a partition
///
/// # Errors
///
/// Returns an error if the partition has more than `count` parts or a part
/// larger than `slots - count`
pub fn particles(partition: &Partition, slots: usize, count: usize) -> Result<Vec<usize>> {
    let width = slots.saturating_sub(count);
    if count > slots || partition.len() > count || partition.first() as usize > width {
        return Err(invalid_parameter(
            "partition",
            partition,
            &format!("does not fit a {count} x {width} box"),
        ));
    }

    Ok((1..=count)
        .map(|i| partition.get(count - i) as usize + i)
        .collect())
}

/// Sites among `1..=slots` not occupied by the given particles
pub fn holes(particles: &[usize], slots: usize) -> Vec<usize> {
    let mut occupied = vec![false; slots + 1];
    for &position in particles {
        if let Some(site) = occupied.get_mut(position) {
            *site = true;
        }
    }
    (1..=slots)
        .filter(|&site| occupied.get(site) == Some(&false))
        .collect()
}

/// Recover the partition encoded by increasing particle positions
///
/// # Errors
///
/// Returns an error if the positions are not strictly increasing from 1
pub fn from_particles(particles: &[usize]) -> Result<Partition> {
    let mut parts = Vec::with_capacity(particles.len());
    for (offset, &position) in particles.iter().enumerate().rev() {
        let part = position
            .checked_sub(offset + 1)
            .and_then(|part| u32::try_from(part).ok())
            .ok_or_else(|| {
                invalid_parameter("particles", &format!("{particles:?}"), &"positions must be at least their rank")
            })?;
        parts.push(part);
    }
    Partition::new(parts)
}
