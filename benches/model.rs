//! Simulation and density estimation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rician_stats::kde::gaussian_kde;
use rician_stats::pdf::{envelope_pdf, phase_pdf};
use rician_stats::{FadingSample, ModelParameters, RicianModel, GRID_POINTS};

fn benchmark_fading_generation(c: &mut Criterion) {
    let params = ModelParameters::from_raw("10", "1", "0").unwrap();
    let (p, q) = params.component_means();
    let sigma = params.scattered_std_dev();

    c.bench_function("fading_generate_100k", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| black_box(FadingSample::generate(p, q, sigma, 100_000, &mut rng)))
    });
}

fn benchmark_envelope_kde(c: &mut Criterion) {
    let params = ModelParameters::from_raw("10", "1", "0").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let model = RicianModel::with_sample_count(params, 50_000, &mut rng);
    let envelope = model.fading().envelope();

    c.bench_function("envelope_kde_50k_samples", |b| {
        b.iter(|| black_box(gaussian_kde(&envelope, GRID_POINTS)))
    });
}

fn benchmark_theoretical_pdfs(c: &mut Criterion) {
    let params = ModelParameters::from_raw("10", "1", "0.5").unwrap();

    c.bench_function("envelope_pdf_6000_points", |b| {
        b.iter(|| black_box(envelope_pdf(&params)))
    });

    c.bench_function("phase_pdf_6000_points", |b| {
        b.iter(|| black_box(phase_pdf(&params)))
    });
}

criterion_group!(
    benches,
    benchmark_fading_generation,
    benchmark_envelope_kde,
    benchmark_theoretical_pdfs
);
criterion_main!(benches);
