use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tracc_linalg::{ops, Matrix};

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    for n in [3, 4, 5] {
        let a = Matrix::from_shape_fn(n, n, |i, j| {
            if i == j {
                4.0 + i as f64
            } else {
                1.0 / (1.0 + i as f64 + j as f64)
            }
        });

        group.bench_with_input(BenchmarkId::new("invert", n), &a, |b, a| {
            b.iter(|| black_box(ops::invert(a)))
        });

        group.bench_with_input(BenchmarkId::new("invert_faer", n), &a, |b, a| {
            let m = faer::Mat::<f64>::from_fn(n, n, |i, j| a[(i, j)]);
            b.iter(|| black_box(m.svd()))
        });
    }
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let a = Matrix::from_shape_fn(4, 4, |i, j| (i * 4 + j) as f64);
    let b = Matrix::identity(4);

    group.bench_function(BenchmarkId::new("multiply", "4x4"), |bench| {
        bench.iter(|| black_box(ops::multiply(&a, &b)))
    });
}

criterion_group!(benches, bench_invert, bench_multiply);
criterion_main!(benches);
