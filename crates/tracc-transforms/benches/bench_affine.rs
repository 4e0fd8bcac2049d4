use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tracc_transforms::{build_forward, build_inverse, extract_parameters, AffineParameters};

fn bench_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine");

    let params = AffineParameters {
        center: [10.0, -4.0, 2.0],
        translation: [1.0, 2.0, 3.0],
        scale: [1.1, 0.9, 1.2],
        shear: [0.0; 3],
        rotation: [0.1, 0.2, 0.3],
    };
    let m = build_forward(&params);

    group.bench_function("build_forward", |b| {
        b.iter(|| black_box(build_forward(black_box(&params))))
    });

    group.bench_function("build_inverse", |b| {
        b.iter(|| black_box(build_inverse(black_box(&params))))
    });

    group.bench_function("extract_parameters", |b| {
        b.iter(|| black_box(extract_parameters(black_box(&m), &params.center)))
    });

    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
