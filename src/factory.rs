//! Random input arrays
//!
//! Values are drawn uniformly from [`MIN_VALUE`]..=[`MAX_VALUE`]. Ids come from a
//! process-wide counter, so they stay unique across factories and across calls.
//! The randomness is for display only and must not be relied on for anything else.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{Result, VisualizerError};
use crate::model::{Element, ElementId};

pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 200;
pub const DEFAULT_SIZE: usize = 20;

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 100;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Produces fresh arrays of random elements
#[derive(Debug)]
pub struct ArrayFactory {
    rng: StdRng,
}

impl ArrayFactory {
    /// Factory seeded from the operating system
    pub fn new() -> Self {
        ArrayFactory {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Factory with a reproducible value sequence
    pub fn with_seed(seed: u64) -> Self {
        ArrayFactory {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create `size` elements with random values and never-before-seen ids
    pub fn create(&mut self, size: usize) -> Result<Vec<Element>> {
        validate_size(size)?;

        let first = NEXT_ID.fetch_add(size as u64, Ordering::Relaxed);
        let array = (0..size as u64)
            .map(|offset| {
                let value = self.rng.random_range(MIN_VALUE..=MAX_VALUE);
                Element::new(value, ElementId(first + offset))
            })
            .collect();

        tracing::debug!(size, first_id = first, "array created");
        Ok(array)
    }
}

impl Default for ArrayFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject sizes the factory will not produce. Never clamps.
pub fn validate_size(size: usize) -> Result<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(VisualizerError::InvalidSize {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_create_respects_size_and_range() {
        let mut factory = ArrayFactory::with_seed(7);
        let array = factory.create(50).unwrap();

        assert_eq!(array.len(), 50);
        assert!(array
            .iter()
            .all(|el| (MIN_VALUE..=MAX_VALUE).contains(&el.value())));
    }

    #[test]
    fn test_ids_unique_across_calls() {
        let mut factory = ArrayFactory::with_seed(1);
        let mut other = ArrayFactory::with_seed(1);
        let mut seen = FxHashSet::default();

        for array in [
            factory.create(30).unwrap(),
            factory.create(30).unwrap(),
            other.create(30).unwrap(),
        ] {
            for el in array {
                assert!(seen.insert(el.id()), "duplicate id {}", el.id());
            }
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = ArrayFactory::with_seed(42).create(20).unwrap();
        let b = ArrayFactory::with_seed(42).create(20).unwrap();

        let values_a: Vec<u32> = a.iter().map(Element::value).collect();
        let values_b: Vec<u32> = b.iter().map(Element::value).collect();
        assert_eq!(values_a, values_b);
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let mut factory = ArrayFactory::with_seed(0);
        assert_eq!(
            factory.create(0),
            Err(VisualizerError::InvalidSize {
                size: 0,
                min: MIN_SIZE,
                max: MAX_SIZE
            })
        );
        assert!(factory.create(MAX_SIZE + 1).is_err());
        assert!(factory.create(MAX_SIZE).is_ok());
    }
}
