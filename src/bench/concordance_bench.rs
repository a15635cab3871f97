//! Criterion benchmarks for the concordance kernels.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use triplet_concordance::{Matrix, concordance_naive, concordance_parallel, concordance_sequential};

fn distances(n: usize, shift: f64) -> Matrix {
    Matrix::from_fn(n, n, |i, j| ((i as f64 - j as f64).abs() + shift * ((i * j) % 7) as f64).sqrt())
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("concordance");
    group.sample_size(10);

    for n in [64, 128, 256] {
        let r = distances(n, 0.0);
        let p = distances(n, 0.5);

        if n <= 128 {
            group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
                b.iter(|| concordance_naive(black_box(&r), black_box(&p)))
            });
        }
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| concordance_sequential(black_box(&r), black_box(&p)))
        });
        group.bench_with_input(BenchmarkId::new("parallel_4", n), &n, |b, _| {
            b.iter(|| concordance_parallel(black_box(&r), black_box(&p), 4))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
