use crate::buckets::Buckets;
use crate::error::{Error, Result};
use crate::hash::{compute_m_num, normalize, HashKernels, Positions, DEFAULT_CAPACITY};
use crate::{BloomFilter, RemovableBloomFilter};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, trace};

/// Counting filter that only deletes values with an outstanding insert.
///
/// Insertion credits are kept per normalized value, so memory grows with the
/// number of distinct values inserted.
#[derive(Debug, Clone)]
pub struct Filter {
    buckets: Buckets,              // filter data
    hash_kernels: HashKernels,     // hash kernels
    credits: HashMap<String, u64>, // inserts not yet matched by a delete
}

impl Filter {
    pub fn new(m: usize) -> Result<Self> {
        let hash_kernels = HashKernels::new(m)?;
        debug!(m, "created counting delete filter");
        Ok(Self {
            buckets: Buckets::new(m),
            hash_kernels,
            credits: HashMap::new(),
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

    /// Outstanding inserts of `item`; zero for values never seen.
    pub fn credits<T: Display + ?Sized>(&self, item: &T) -> u64 {
        self.credits.get(&normalize(item)).copied().unwrap_or(0)
    }

    /// Number of distinct values holding credit.
    pub fn tracked_values(&self) -> usize {
        self.credits.len()
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            buckets: Buckets::new(DEFAULT_CAPACITY),
            hash_kernels: HashKernels::default(),
            credits: HashMap::new(),
        }
    }
}

impl BloomFilter for Filter {
    fn insert<T: Display + ?Sized>(&mut self, item: &T) {
        let key = normalize(item);
        let positions = self.hash_kernels.hash_normalized(&key);
        trace!(?positions, "insert");
        *self.credits.entry(key).or_insert(0) += 1;
        positions.iter().for_each(|&i| self.buckets.increment(i, 1))
    }

    fn lookup<T: Display + ?Sized>(&self, item: &T) -> bool {
        self.matches(&self.hash_kernels.hash_positions(item))
    }

    fn matches(&self, positions: &Positions) -> bool {
        positions.iter().all(|&i| i < self.buckets.len() && self.buckets.get(i) >= 1)
    }

    fn reset(&mut self) {
        self.buckets.reset();
        self.credits.clear()
    }
}

impl RemovableBloomFilter for Filter {
    /// Fails with [`Error::InvalidOperation`] when `item` has no credit left,
    /// leaving the filter untouched.
    fn delete<T: Display + ?Sized>(&mut self, item: &T) -> Result<()> {
        let key = normalize(item);
        let positions = self.hash_kernels.hash_normalized(&key);
        match self.credits.get(&key).copied().unwrap_or(0) {
            0 => return Err(Error::InvalidOperation { value: key }),
            1 => {
                self.credits.remove(&key);
            }
            count => {
                self.credits.insert(key, count - 1);
            }
        }
        trace!(?positions, "delete");
        positions.iter().for_each(|&i| {
            debug_assert!(self.buckets.get(i) > 0);
            self.buckets.increment(i, -1)
        });
        Ok(())
    }
}
