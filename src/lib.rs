//! Rician fading statistics
//!
//! Models the statistical behavior of the signal envelope and phase under
//! Rician multipath fading. Given a Rice factor K, a normalized mean power
//! r̂², and a phase offset φ, the crate produces:
//!
//! - closed-form theoretical PDFs for envelope (Rice distribution on a fixed
//!   6000-point grid over [0, 6]) and phase (fixed grid over [−π, π]), and
//! - empirical densities estimated by Gaussian KDE from a 2,000,000-sample
//!   Monte Carlo simulation of the underlying complex Gaussian process.
//!
//! The crate only exposes plain numeric arrays. Plotting, windows, and
//! timing displays are external consumers (see `demos/rician_demo.rs` for a
//! CLI one). Randomness is injectable: every constructor takes a
//! `ChaCha8Rng` so callers can seed for reproducibility, while
//! [`build_model`] seeds from OS entropy for run-to-run variation.

pub mod error;
pub mod fading;
pub mod gaussian;
pub mod kde;
pub mod model;
pub mod params;
pub mod pdf;
mod math;

// Re-export core types for convenience
pub use error::InputError;
pub use fading::FadingSample;
pub use kde::{DensityEstimate, GRID_POINTS};
pub use model::{ModelResult, RicianModel, NUM_SAMPLES};
pub use params::{ModelParameters, K_BOUNDS, MEAN_POWER_BOUNDS, PHASE_BOUNDS};
pub use pdf::{TheoreticalCurve, ENVELOPE_MAX, THEORY_POINTS};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Validate the three raw inputs and run the full model.
///
/// This is the single external entry point: raw strings in, four curve
/// pairs out. Validation failures abort before any sampling happens.
pub fn build_model(
    k_raw: &str,
    r_hat_sq_raw: &str,
    phi_raw: &str,
) -> Result<ModelResult, InputError> {
    let mut rng = ChaCha8Rng::from_entropy();
    build_model_with_rng(k_raw, r_hat_sq_raw, phi_raw, &mut rng)
}

/// Same as [`build_model`] but with an injected random source, so tests and
/// reproducible runs can seed it.
pub fn build_model_with_rng(
    k_raw: &str,
    r_hat_sq_raw: &str,
    phi_raw: &str,
    rng: &mut ChaCha8Rng,
) -> Result<ModelResult, InputError> {
    let params = ModelParameters::from_raw(k_raw, r_hat_sq_raw, phi_raw)?;
    Ok(RicianModel::new(params, rng).into_result())
}
