use criterion::{criterion_group, criterion_main, Criterion};
use deletable_bloom::{BasicFilter, BloomFilter, NaiveDeleteFilter, RemovableBloomFilter};
use rand::distributions::Standard;
use rand::{thread_rng, Rng};

// This is an empty bench, only print false positives rate
fn bench(c: &mut Criterion) {
    let false_positives: usize = (0..1000)
        .map(|_| {
            let mut filter = BasicFilter::with_fp_rate(100, 0.03).unwrap();
            let items: Vec<usize> = thread_rng().sample_iter(&Standard).take(100).collect();
            items.iter().for_each(|i| filter.insert(i));
            let items: Vec<usize> = thread_rng().sample_iter(&Standard).take(100).collect();
            items.iter().filter(|i| filter.contains(*i)).count()
        })
        .sum();
    println!("BasicFilter false positives: {:?}", false_positives as f32 / 100000.0);

    // deleting half of the inserted items, then probing fresh ones
    let false_positives: usize = (0..1000)
        .map(|_| {
            let mut filter = NaiveDeleteFilter::with_fp_rate(100, 0.03).unwrap();
            let items: Vec<usize> = thread_rng().sample_iter(&Standard).take(200).collect();
            items.iter().for_each(|i| filter.insert(i));
            items[100..].iter().for_each(|i| filter.delete(i).unwrap());
            let items: Vec<usize> = thread_rng().sample_iter(&Standard).take(100).collect();
            items.iter().filter(|i| filter.contains(*i)).count()
        })
        .sum();
    println!("NaiveDeleteFilter false positives: {:?}", false_positives as f32 / 100000.0);

    c.bench_function("false_positives_rate", |b| b.iter(|| {}));
}

criterion_group!(benches, bench);
criterion_main!(benches);
