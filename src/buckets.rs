type Counter = u32;

/// Fixed number of counters, one per filter position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    data: Vec<Counter>,
}

impl Buckets {
    /// Creates `count` zeroed buckets. The length never changes afterwards.
    pub fn new(count: usize) -> Self {
        Self { data: vec![0; count] }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|x| *x = 0)
    }

    /// Adds `delta` to a bucket, clamping the result into `[0, Counter::MAX]`.
    pub fn increment(&mut self, bucket: usize, delta: i64) {
        let v = i64::from(self.data[bucket]).saturating_add(delta);
        self.data[bucket] = if v < 0 {
            0
        } else if v > i64::from(Counter::MAX) {
            Counter::MAX
        } else {
            v as Counter
        };
    }

    pub fn set(&mut self, bucket: usize, value: Counter) {
        self.data[bucket] = value;
    }

    pub fn get(&self, bucket: usize) -> Counter {
        self.data[bucket]
    }

    /// Number of positions currently set.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&x| x > 0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Counter> + '_ {
        self.data.iter().copied()
    }
}
