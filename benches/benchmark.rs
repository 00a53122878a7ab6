use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gonio::angle::AngleUnit;
use gonio::batch::convert_all;
use gonio::trig::{deg_to_rad, rad_to_deg};
use rand::Rng;

fn random_angles(count: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random_range(-720.0..720.0)).collect()
}

fn benchmark_scalar_conversions(c: &mut Criterion) {
    c.bench_function("deg_to_rad", |b| b.iter(|| deg_to_rad(black_box(123.456))));
    c.bench_function("rad_to_deg", |b| b.iter(|| rad_to_deg(black_box(2.154))));
}

fn benchmark_batch_conversion(c: &mut Criterion) {
    let values = random_angles(1_000_000);

    c.bench_function("convert_all_1m", |b| {
        b.iter(|| convert_all(black_box(&values), AngleUnit::Degrees))
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().sample_size(10)
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = benchmark_scalar_conversions, benchmark_batch_conversion
}

criterion_main!(benches);
