//! Complex multipath fading realization
//!
//! Rician fading splits the received signal into a dominant specular
//! component and a diffuse scattered component. Per sample, the in-phase and
//! quadrature parts are independent Gaussian draws:
//!
//!   X ~ N(p, σ²),  Y ~ N(q, σ²),  h = X + jY
//!
//! where (p, q) carry the specular power and σ the scattered power. The
//! realization is drawn once, immutable afterwards, and consumed through its
//! `envelope()` and `phase()` views.

use rand_chacha::ChaCha8Rng;

use crate::gaussian::GaussianSource;
use crate::math::{magnitude, phase};

/// One length-N realization of the complex fading process
pub struct FadingSample {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl FadingSample {
    /// Draw a fresh realization: `num_samples` independent complex Gaussians
    /// with component means `(p, q)` and shared standard deviation `sigma`.
    pub fn generate(
        p: f64,
        q: f64,
        sigma: f64,
        num_samples: usize,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let mut in_phase = GaussianSource::new(p, sigma, rng);
        let mut quadrature = GaussianSource::new(q, sigma, rng);

        Self {
            re: in_phase.sample_n(num_samples),
            im: quadrature.sample_n(num_samples),
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Envelope magnitude R = sqrt(Re² + Im²) per sample
    pub fn envelope(&self) -> Vec<f64> {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&i, &q)| magnitude(i, q))
            .collect()
    }

    /// Phase angle θ = atan2(Im, Re) per sample, principal value in (-π, π]
    pub fn phase(&self) -> Vec<f64> {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&i, &q)| phase(i, q))
            .collect()
    }
}
