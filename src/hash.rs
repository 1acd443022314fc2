use crate::error::{Error, Result};
use md5::Md5;
use sha1::{Digest, Sha1};
use std::f64::consts::LN_2;
use std::fmt::Display;

/// Number of positions every value is hashed to.
pub const K: usize = 3;

/// Capacity of a filter built with `Default`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Hashed positions of one value, `[sha1, md5, crc32]`. Duplicates are allowed.
pub type Positions = [usize; K];

const LN_2_2: f64 = LN_2 * LN_2;

// Calculates the optimal Bloom filter size, m, based on the number of
// items and the desired rate of false positives.
pub fn compute_m_num(items_count: usize, fp_rate: f64) -> Result<usize> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(Error::InvalidFalsePositiveRate { fp_rate });
    }
    if items_count == 0 {
        return Err(Error::InvalidCapacity { capacity: 0 });
    }
    Ok(((items_count as f64) * fp_rate.ln().abs() / LN_2_2).ceil() as usize)
}

/// Canonical string form of a value. Equal values must display identically.
pub fn normalize<T: Display + ?Sized>(item: &T) -> String {
    item.to_string()
}

/// Folds a digest, read as big-endian 32-bit words, into `[0, m)` with a
/// running `(acc + word) % m` sum seeded by the first word.
pub fn fold_digest(digest: &[u8], m: usize) -> usize {
    let m = m as u128;
    let mut words = digest
        .chunks_exact(4)
        .map(|w| u128::from(u32::from_be_bytes([w[0], w[1], w[2], w[3]])));
    let first = words.next().unwrap_or(0);
    let acc = words.fold(first, |acc, word| (acc + word) % m);
    (acc % m) as usize
}

/// Maps values to their three positions in a filter of length `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashKernels {
    m: usize, // filter size
}

impl HashKernels {
    pub fn new(m: usize) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidCapacity { capacity: m });
        }
        Ok(Self { m })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.m
    }

    pub fn hash_positions<T: Display + ?Sized>(&self, item: &T) -> Positions {
        self.hash_normalized(&normalize(item))
    }

    pub(crate) fn hash_normalized(&self, normalized: &str) -> Positions {
        let bytes = normalized.as_bytes();
        [
            fold_digest(&Sha1::digest(bytes), self.m),
            fold_digest(&Md5::digest(bytes), self.m),
            crc32fast::hash(bytes) as usize % self.m,
        ]
    }
}

impl Default for HashKernels {
    fn default() -> Self {
        Self { m: DEFAULT_CAPACITY }
    }
}

/// Hashes `item` for a filter of length `m`.
pub fn hash<T: Display + ?Sized>(item: &T, m: usize) -> Result<Positions> {
    Ok(HashKernels::new(m)?.hash_positions(item))
}
