use crate::buckets::Buckets;
use crate::error::Result;
use crate::hash::{compute_m_num, HashKernels, Positions, DEFAULT_CAPACITY};
use crate::BloomFilter;
use std::fmt::Display;
use tracing::{debug, trace};

/// Plain bit-vector Bloom filter. Bits only ever turn on.
#[derive(Debug, Clone)]
pub struct Filter {
    buckets: Buckets,          // filter data, every bucket 0 or 1
    hash_kernels: HashKernels, // hash kernels
}

impl Filter {
    /// Create a new bloom filter with `m` positions.
    pub fn new(m: usize) -> Result<Self> {
        let hash_kernels = HashKernels::new(m)?;
        debug!(m, "created basic filter");
        Ok(Self {
            buckets: Buckets::new(m),
            hash_kernels,
        })
    }

    /// Create a new bloom filter structure.
    /// items_count is an estimation of the maximum number of items to store.
    /// fp_rate is the wanted rate of false positives, in ]0.0, 1.0[
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

/// A filter with [`DEFAULT_CAPACITY`] positions.
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
        positions.iter().for_each(|&i| self.buckets.set(i, 1))
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
