/**
 * Performance benchmarks for procedural-textures
 *
 * Run with:
 *   cargo bench
 *
 * View HTML reports in:
 *   target/criterion/report/index.html
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use procedural_textures::{
    BrickConfig, CheckerConfig, GrassConfig, MetallicConfig, PatternConfig, StripeConfig,
    TextureConfig, TextureGenerator,
};

fn patterns(size: usize) -> Vec<PatternConfig> {
    vec![
        PatternConfig::Checker(CheckerConfig {
            size,
            ..Default::default()
        }),
        PatternConfig::Stripe(StripeConfig {
            size,
            ..Default::default()
        }),
        PatternConfig::Metallic(MetallicConfig {
            size,
            ..Default::default()
        }),
        PatternConfig::Brick(BrickConfig {
            size,
            ..Default::default()
        }),
        PatternConfig::Grass(GrassConfig {
            size,
            ..Default::default()
        }),
    ]
}

/// Benchmark every pattern family at the catalog size
fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    for pattern in patterns(256) {
        group.bench_function(pattern.kind(), |b| {
            b.iter(|| {
                let config = TextureConfig::new(pattern.clone()).with_seed(42);
                let generator = TextureGenerator::new(config).unwrap();
                black_box(generator.generate().unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark how the noisiest pattern scales with texture size
fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("grass_sizes");

    for size in [64usize, 128, 256, 512].iter() {
        let pattern = PatternConfig::Grass(GrassConfig {
            size: *size,
            ..Default::default()
        });

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let config = TextureConfig::new(pattern.clone()).with_seed(42);
                let generator = TextureGenerator::new(config).unwrap();
                black_box(generator.generate().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_patterns, bench_sizes);
criterion_main!(benches);
