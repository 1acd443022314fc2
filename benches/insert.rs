use criterion::{criterion_group, criterion_main, Criterion};
use deletable_bloom::{BasicFilter, BloomFilter, CountingDeleteFilter, NaiveDeleteFilter};
use rand::distributions::Standard;
use rand::{thread_rng, Rng};

fn bench(c: &mut Criterion) {
    let items: Vec<usize> = thread_rng().sample_iter(&Standard).take(7).collect();

    c.bench_function("insert_basic", |b| {
        let mut filter = BasicFilter::with_fp_rate(100, 0.03).unwrap();
        b.iter(|| items.iter().for_each(|i| filter.insert(i)))
    });

    c.bench_function("insert_naive_delete", |b| {
        let mut filter = NaiveDeleteFilter::with_fp_rate(100, 0.03).unwrap();
        b.iter(|| items.iter().for_each(|i| filter.insert(i)))
    });

    c.bench_function("insert_counting_delete", |b| {
        let mut filter = CountingDeleteFilter::with_fp_rate(100, 0.03).unwrap();
        b.iter(|| items.iter().for_each(|i| filter.insert(i)))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
