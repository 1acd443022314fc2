use std::fmt::Display;

mod buckets;
mod classic;
mod counting;
mod error;
mod hash;
mod naive;
mod variant;

pub use buckets::Buckets;
pub use classic::Filter as BasicFilter;
pub use counting::Filter as CountingDeleteFilter;
pub use error::{Error, Result};
pub use hash::{compute_m_num, fold_digest, hash, normalize, HashKernels, Positions, DEFAULT_CAPACITY, K};
pub use naive::Filter as NaiveDeleteFilter;
pub use variant::{Filter, FilterKind};

/// Insert and lookup by the value's display form. No false negatives.
pub trait BloomFilter {
    fn insert<T: Display + ?Sized>(&mut self, item: &T);
    fn lookup<T: Display + ?Sized>(&self, item: &T) -> bool;
    /// Whether every one of `positions` is set. Positions outside the filter never match.
    fn matches(&self, positions: &Positions) -> bool;
    fn reset(&mut self);

    fn contains<T: Display + ?Sized>(&self, item: &T) -> bool {
        self.lookup(item)
    }
}

pub trait RemovableBloomFilter: BloomFilter {
    fn delete<T: Display + ?Sized>(&mut self, item: &T) -> Result<()>;
}
