//! Rician fading model
//!
//! Owns a validated parameter triple and one Monte Carlo realization of the
//! complex fading process, and produces the four curves a presentation layer
//! renders: theoretical and simulated densities for envelope and phase.
//!
//! Each model instance is independent; nothing is shared across
//! constructions except the immutable grids and counts.

use log::debug;
use rand_chacha::ChaCha8Rng;

use crate::fading::FadingSample;
use crate::kde::{gaussian_kde, DensityEstimate, GRID_POINTS};
use crate::params::ModelParameters;
use crate::pdf::{envelope_pdf, phase_pdf, TheoreticalCurve};

/// Number of Monte Carlo samples per model construction
pub const NUM_SAMPLES: usize = 2_000_000;

/// The four curve pairs exposed to presentation layers, read-only
#[derive(Debug, Clone)]
pub struct ModelResult {
    pub envelope_theoretical: TheoreticalCurve,
    pub envelope_simulated: DensityEstimate,
    pub phase_theoretical: TheoreticalCurve,
    pub phase_simulated: DensityEstimate,
}

/// Rician fading model: validated parameters plus one fading realization
pub struct RicianModel {
    params: ModelParameters,
    fading: FadingSample,
}

impl RicianModel {
    /// Build a model with the standard sample count.
    pub fn new(params: ModelParameters, rng: &mut ChaCha8Rng) -> Self {
        Self::with_sample_count(params, NUM_SAMPLES, rng)
    }

    /// Build a model with an explicit sample count (tests use small counts).
    pub fn with_sample_count(
        params: ModelParameters,
        num_samples: usize,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let (p, q) = params.component_means();
        let sigma = params.scattered_std_dev();

        debug!(
            "simulating {} fading samples: p={:.4}, q={:.4}, sigma={:.4}",
            num_samples, p, q, sigma
        );

        let fading = FadingSample::generate(p, q, sigma, num_samples, rng);

        Self { params, fading }
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    pub fn fading(&self) -> &FadingSample {
        &self.fading
    }

    /// KDE of the simulated envelope magnitudes
    pub fn envelope_density(&self) -> DensityEstimate {
        gaussian_kde(&self.fading.envelope(), GRID_POINTS)
    }

    /// KDE of the simulated phase angles
    pub fn phase_density(&self) -> DensityEstimate {
        gaussian_kde(&self.fading.phase(), GRID_POINTS)
    }

    /// Closed-form envelope PDF for this model's parameters
    pub fn envelope_pdf(&self) -> TheoreticalCurve {
        envelope_pdf(&self.params)
    }

    /// Closed-form phase PDF for this model's parameters
    pub fn phase_pdf(&self) -> TheoreticalCurve {
        phase_pdf(&self.params)
    }

    /// Compute all four curves and consume the model.
    pub fn into_result(self) -> ModelResult {
        ModelResult {
            envelope_theoretical: self.envelope_pdf(),
            envelope_simulated: self.envelope_density(),
            phase_theoretical: self.phase_pdf(),
            phase_simulated: self.phase_density(),
        }
    }
}
