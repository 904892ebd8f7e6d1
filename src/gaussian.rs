//! Gaussian sample source for the fading components
//!
//! Uses the Box-Muller transform. Unlike plain AWGN, the Rician specular
//! path gives the in-phase and quadrature components nonzero means, so the
//! mean is a constructor parameter alongside the standard deviation.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// N(mean, σ²) generator with its own derived RNG stream
pub struct GaussianSource {
    mean: f64,
    std_dev: f64,

    /// Internal RNG
    rng: ChaCha8Rng,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl GaussianSource {
    pub fn new(mean: f64, std_dev: f64, seed_rng: &mut ChaCha8Rng) -> Self {
        // Create a new RNG with a derived seed so the in-phase and
        // quadrature streams stay independent
        let seed: u64 = seed_rng.gen();
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            mean,
            std_dev,
            rng,
            cached: None,
        }
    }

    /// Generate the next Gaussian sample using the Box-Muller transform
    pub fn next_sample(&mut self) -> f64 {
        // Return cached value if available
        if let Some(z) = self.cached.take() {
            return self.mean + z * self.std_dev;
        }

        // Box-Muller transform generates two independent standard normals
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-10);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        let z0 = r * theta.cos();
        let z1 = r * theta.sin();

        // Cache second sample
        self.cached = Some(z1);

        self.mean + z0 * self.std_dev
    }

    /// Draw `n` samples into a fresh vector
    pub fn sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_sample()).collect()
    }
}
