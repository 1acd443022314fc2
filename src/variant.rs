//! One filter type over the three variants, chosen at construction.

use crate::error::{Error, Result};
use crate::hash::Positions;
use crate::{BasicFilter, BloomFilter, CountingDeleteFilter, NaiveDeleteFilter, RemovableBloomFilter};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Bits only, no delete.
    #[default]
    Basic,
    /// Counters; any delete is accepted.
    NaiveDelete,
    /// Counters plus per-value insertion credit.
    CountingDelete,
}

#[derive(Debug, Clone)]
pub enum Filter {
    Basic(BasicFilter),
    NaiveDelete(NaiveDeleteFilter),
    CountingDelete(CountingDeleteFilter),
}

impl Filter {
    pub fn new(kind: FilterKind, m: usize) -> Result<Self> {
        Ok(match kind {
            FilterKind::Basic => Filter::Basic(BasicFilter::new(m)?),
            FilterKind::NaiveDelete => Filter::NaiveDelete(NaiveDeleteFilter::new(m)?),
            FilterKind::CountingDelete => Filter::CountingDelete(CountingDeleteFilter::new(m)?),
        })
    }

    /// A filter of `kind` with the default capacity.
    pub fn with_kind(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Basic => Filter::Basic(BasicFilter::default()),
            FilterKind::NaiveDelete => Filter::NaiveDelete(NaiveDeleteFilter::default()),
            FilterKind::CountingDelete => Filter::CountingDelete(CountingDeleteFilter::default()),
        }
    }

    pub fn with_fp_rate(kind: FilterKind, items_count: usize, fp_rate: f64) -> Result<Self> {
        Self::new(kind, crate::compute_m_num(items_count, fp_rate)?)
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Basic(_) => FilterKind::Basic,
            Filter::NaiveDelete(_) => FilterKind::NaiveDelete,
            Filter::CountingDelete(_) => FilterKind::CountingDelete,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Filter::Basic(f) => f.len(),
            Filter::NaiveDelete(f) => f.len(),
            Filter::CountingDelete(f) => f.len(),
        }
    }

    /// True when no position is set. Unrelated to `len()`, which is always m.
    pub fn is_clear(&self) -> bool {
        match self {
            Filter::Basic(f) => f.is_clear(),
            Filter::NaiveDelete(f) => f.is_clear(),
            Filter::CountingDelete(f) => f.is_clear(),
        }
    }

    /// Deletes `item`. The basic variant fails with [`Error::DeleteNotSupported`].
    pub fn delete<T: Display + ?Sized>(&mut self, item: &T) -> Result<()> {
        match self {
            Filter::Basic(_) => Err(Error::DeleteNotSupported),
            Filter::NaiveDelete(f) => f.delete(item),
            Filter::CountingDelete(f) => f.delete(item),
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::with_kind(FilterKind::default())
    }
}

impl BloomFilter for Filter {
    fn insert<T: Display + ?Sized>(&mut self, item: &T) {
        match self {
            Filter::Basic(f) => f.insert(item),
            Filter::NaiveDelete(f) => f.insert(item),
            Filter::CountingDelete(f) => f.insert(item),
        }
    }

    fn lookup<T: Display + ?Sized>(&self, item: &T) -> bool {
        match self {
            Filter::Basic(f) => f.lookup(item),
            Filter::NaiveDelete(f) => f.lookup(item),
            Filter::CountingDelete(f) => f.lookup(item),
        }
    }

    fn matches(&self, positions: &Positions) -> bool {
        match self {
            Filter::Basic(f) => f.matches(positions),
            Filter::NaiveDelete(f) => f.matches(positions),
            Filter::CountingDelete(f) => f.matches(positions),
        }
    }

    fn reset(&mut self) {
        match self {
            Filter::Basic(f) => f.reset(),
            Filter::NaiveDelete(f) => f.reset(),
            Filter::CountingDelete(f) => f.reset(),
        }
    }
}
