use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lattice_noise::*;

fn bench_perlin_2d_point(c: &mut Criterion) {
    let engine = NoiseEngine::default();
    c.bench_function("perlin_2d_point", |bencher| {
        bencher.iter(|| black_box(engine.get_perlin_2d(black_box(123.4), black_box(-56.7))))
    });
}

fn bench_perlin_3d_point(c: &mut Criterion) {
    let engine = NoiseEngine::default();
    c.bench_function("perlin_3d_point", |bencher| {
        bencher.iter(|| {
            black_box(engine.get_perlin_3d(
                black_box(123.4),
                black_box(-56.7),
                black_box(8.9),
            ))
        })
    });
}

fn bench_simplex_3d_point(c: &mut Criterion) {
    let engine = NoiseEngine::default();
    c.bench_function("simplex_3d_point", |bencher| {
        bencher.iter(|| {
            black_box(engine.get_simplex_3d(
                black_box(123.4),
                black_box(-56.7),
                black_box(8.9),
            ))
        })
    });
}

fn bench_perlin_fractal_2d_square(c: &mut Criterion) {
    let mut engine = NoiseEngine::default();
    c.bench_function("perlin_fractal_2d_square_256", |bencher| {
        bencher.iter(|| {
            black_box(
                engine
                    .get_perlin_fractal_2d_square(black_box(Vec2::ZERO), 256, 256)
                    .map(|values| values.len()),
            )
        })
    });
}

fn bench_perlin_3d_cube(c: &mut Criterion) {
    let mut engine = NoiseEngine::default();
    c.bench_function("perlin_3d_cube_32", |bencher| {
        bencher.iter(|| {
            black_box(
                engine
                    .get_perlin_3d_cube(black_box(Vec3::ZERO), 32, 32, 32)
                    .map(|values| values.len()),
            )
        })
    });
}

fn bench_ridged_simplex_3d_cube(c: &mut Criterion) {
    let config = NoiseConfig {
        fractal_type: FractalType::RidgedMulti,
        octaves: 5,
        ..Default::default()
    };
    let mut engine = NoiseEngine::new(config).expect("five octaves is a valid config");
    c.bench_function("ridged_simplex_3d_cube_32", |bencher| {
        bencher.iter(|| {
            black_box(
                engine
                    .cube_3d(NoiseSource::SIMPLEX_FRACTAL, black_box(Vec3::ZERO), 32, 32, 32)
                    .map(|values| values.len()),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_perlin_2d_point,
    bench_perlin_3d_point,
    bench_simplex_3d_point,
    bench_perlin_fractal_2d_square,
    bench_perlin_3d_cube,
    bench_ridged_simplex_3d_cube,
);
criterion_main!(benches);
