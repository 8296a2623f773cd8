use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rf_compactor::compress;
use rf_core::{Dataset, Record, Value};

const ATTRIBUTES: usize = 30;

fn generate_dataset(rows: usize, rng: &mut StdRng) -> Dataset {
    let records = (0..rows)
        .map(|_| {
            let mut r = Record::new();
            r.set("donor_is_old", Value::Bool(rng.gen_bool(0.5)));
            for a in 0..ATTRIBUTES {
                let value = match rng.gen_range(0..10) {
                    0 => Value::Missing,
                    n => Value::Number((n % 2) as f64),
                };
                r.set(format!("attr_{a}"), value);
            }
            r
        })
        .collect();
    Dataset::new(records, "donor_is_old")
}

fn generate_rules(count: usize, rng: &mut StdRng) -> Vec<String> {
    (0..count)
        .map(|i| {
            let predicates = rng.gen_range(1..=4);
            let lhs: Vec<String> = (0..predicates)
                .map(|_| {
                    let attr = format!("attr_{}", rng.gen_range(0..ATTRIBUTES));
                    if rng.gen_bool(0.3) {
                        format!("NOT {attr}")
                    } else {
                        attr
                    }
                })
                .collect();
            format!("{} => class_{}", lhs.join(" AND "), i % 3)
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let dataset_1k = generate_dataset(1_000, &mut rng);
    let rules_100 = generate_rules(100, &mut rng);
    let rules_500 = generate_rules(500, &mut rng);

    c.bench_function("compress_100_rules_1k_records", |b| {
        b.iter(|| black_box(compress(black_box(&dataset_1k), black_box(&rules_100)).unwrap()))
    });
    c.bench_function("compress_500_rules_1k_records", |b| {
        b.iter(|| black_box(compress(black_box(&dataset_1k), black_box(&rules_500)).unwrap()))
    });
}

fn bench_compress_large_dataset(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let dataset_10k = generate_dataset(10_000, &mut rng);
    let rules_100 = generate_rules(100, &mut rng);

    c.bench_function("compress_100_rules_10k_records", |b| {
        b.iter(|| black_box(compress(black_box(&dataset_10k), black_box(&rules_100)).unwrap()))
    });
}

criterion_group!(benches, bench_compress, bench_compress_large_dataset);
criterion_main!(benches);
