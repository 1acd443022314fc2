use crate::buckets::Buckets;
use crate::error::Result;
use crate::hash::{compute_m_num, HashKernels, Positions, DEFAULT_CAPACITY};
use crate::{BloomFilter, RemovableBloomFilter};
use std::fmt::Display;
use tracing::{debug, trace};

/// Counting filter that accepts any delete.
///
/// Nothing records which values were inserted, so deleting a value that was
/// never inserted still decrements (clamped at zero) its positions and can
/// cause false negatives for other values sharing them.
#[derive(Debug, Clone)]
pub struct Filter {
    buckets: Buckets,          // filter data
    hash_kernels: HashKernels, // hash kernels
}

impl Filter {
    pub fn new(m: usize) -> Result<Self> {
        let hash_kernels = HashKernels::new(m)?;
        debug!(m, "created naive delete filter");
        Ok(Self {
            buckets: Buckets::new(m),
            hash_kernels,
        })
    }

    /// Create a new counting filter sized for items_count items at fp_rate.
    pub fn with_fp_rate(items_count: usize, fp_rate: f64) -> Result<Self> {
        Self::new(compute_m_num(items_count, fp_rate)?)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no position is set. Unrelated to `len()`, which is always m.
    pub fn is_clear(&self) -> bool {
        self.buckets.count_nonzero() == 0
    }

    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            buckets: Buckets::new(DEFAULT_CAPACITY),
            hash_kernels: HashKernels::default(),
        }
    }
}

impl BloomFilter for Filter {
    fn insert<T: Display + ?Sized>(&mut self, item: &T) {
        let positions = self.hash_kernels.hash_positions(item);
        trace!(?positions, "insert");
        positions.iter().for_each(|&i| self.buckets.increment(i, 1))
    }

    fn lookup<T: Display + ?Sized>(&self, item: &T) -> bool {
        self.matches(&self.hash_kernels.hash_positions(item))
    }

    fn matches(&self, positions: &Positions) -> bool {
        positions.iter().all(|&i| i < self.buckets.len() && self.buckets.get(i) >= 1)
    }

    fn reset(&mut self) {
        self.buckets.reset()
    }
}

impl RemovableBloomFilter for Filter {
    /// Never fails.
    fn delete<T: Display + ?Sized>(&mut self, item: &T) -> Result<()> {
        let positions = self.hash_kernels.hash_positions(item);
        trace!(?positions, "delete");
        positions.iter().for_each(|&i| self.buckets.increment(i, -1));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{collection::vec, prelude::any, proptest};
    use rand::distributions::Standard;
    use rand::{thread_rng, Rng};

    #[test]
    fn contains() {
        let mut filter = Filter::with_fp_rate(100, 0.03).unwrap();
        let items: Vec<usize> = thread_rng().sample_iter(&Standard).take(16).collect();
        items.iter().for_each(|i| filter.insert(i));
        assert!(items.iter().all(|i| filter.contains(i)));
    }

    #[test]
    fn remove() {
        let mut filter = Filter::with_fp_rate(100, 0.03).unwrap();
        let item: usize = thread_rng().gen();
        filter.insert(&item);
        filter.delete(&item).unwrap();
        assert!(!filter.contains(&item));
        assert!(filter.is_clear());
    }

    #[test]
    fn counts_accumulate() {
        let mut filter = Filter::new(10).unwrap();
        // "2" hashes to [6, 7, 7]
        filter.insert(&2);
        filter.insert(&2);
        assert_eq!(2, filter.buckets().get(6));
        assert_eq!(4, filter.buckets().get(7));

        filter.delete(&2).unwrap();
        assert!(filter.lookup(&2));
        filter.delete(&2).unwrap();
        assert!(!filter.lookup(&2));
    }

    #[test]
    fn absent_delete_clamps_and_corrupts() {
        let mut filter = Filter::new(10).unwrap();
        filter.insert(&4); // [0, 5, 8]
        assert!(filter.lookup(&4));

        // "bar" hashes to [8, 5, 8] and was never inserted
        assert!(filter.delete("bar").is_ok());
        assert_eq!(0, filter.buckets().get(8));
        assert_eq!(0, filter.buckets().get(5));
        assert_eq!(1, filter.buckets().get(0));
        assert!(!filter.lookup(&4));
    }

    #[test]
    fn default_capacity() {
        let mut filter = Filter::default();
        assert_eq!(DEFAULT_CAPACITY, filter.len());
        filter.insert(&2); // [6, 7, 7]
        assert!(filter.matches(&[6, 7, 7]));
        assert!(!filter.matches(&[6, 7, 10]));
        filter.delete(&2).unwrap();
        assert!(filter.is_clear());
    }

    #[test]
    fn delete_on_empty() {
        let mut filter = Filter::new(10).unwrap();
        assert!(filter.delete("foo").is_ok());
        assert!(filter.is_clear());
    }

    proptest! {
        #[test]
        fn delete_never_fails(ref inserted in vec(any::<u32>(), 0..16), ref deleted in vec(any::<u32>(), 0..16)) {
            let mut filter = Filter::new(32).unwrap();
            inserted.iter().for_each(|i| filter.insert(i));
            assert!(deleted.iter().all(|i| filter.delete(i).is_ok()));
        }
    }
}
