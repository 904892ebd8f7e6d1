//! Validated model parameters
//!
//! The three user-supplied scalars arrive as raw text and must be coerced
//! into numeric values inside physically valid ranges before any sampling
//! happens. The first failure aborts construction; no partial parameter set
//! is ever produced.

use std::f64::consts::PI;

use crate::error::InputError;

/// Rice factor bounds (ratio of specular to scattered power)
pub const K_BOUNDS: (f64, f64) = (0.0, 50.0);

/// Mean power r̂² bounds
pub const MEAN_POWER_BOUNDS: (f64, f64) = (0.5, 2.5);

/// Phase offset φ bounds (radians)
pub const PHASE_BOUNDS: (f64, f64) = (-PI, PI);

/// Check one raw input against its closed bounds.
///
/// Returns the parsed value, or the typed error whose `Display` output the
/// caller shows verbatim.
pub fn validate(raw: &str, name: &str, lower: f64, upper: f64) -> Result<f64, InputError> {
    if raw.is_empty() {
        return Err(InputError::MissingValue { name: name.into() });
    }

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotNumeric { name: name.into() })?;

    // "nan" parses but satisfies neither bound comparison
    if value.is_nan() {
        return Err(InputError::NotNumeric { name: name.into() });
    }

    if value < lower || value > upper {
        return Err(InputError::OutOfRange {
            name: name.into(),
            lower,
            upper,
        });
    }

    Ok(value)
}

/// The validated parameter triple, immutable after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    k: f64,
    r_hat_sq: f64,
    phi: f64,
}

impl ModelParameters {
    /// Validate the three raw strings in order: K, r̂², φ.
    pub fn from_raw(k: &str, r_hat_sq: &str, phi: &str) -> Result<Self, InputError> {
        let k = validate(k, "K", K_BOUNDS.0, K_BOUNDS.1)?;
        let r_hat_sq = validate(r_hat_sq, "r̂²", MEAN_POWER_BOUNDS.0, MEAN_POWER_BOUNDS.1)?;
        let phi = validate(phi, "φ", PHASE_BOUNDS.0, PHASE_BOUNDS.1)?;

        Ok(Self { k, r_hat_sq, phi })
    }

    /// Range-check already-numeric values (for callers that skip text entry).
    pub fn new(k: f64, r_hat_sq: f64, phi: f64) -> Result<Self, InputError> {
        Self::from_raw(&k.to_string(), &r_hat_sq.to_string(), &phi.to_string())
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn r_hat_sq(&self) -> f64 {
        self.r_hat_sq
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Means (p, q) of the in-phase and quadrature Gaussian components:
    /// p = sqrt(K·r̂²/(1+K))·cos(φ), q = sqrt(K·r̂²/(1+K))·sin(φ)
    pub fn component_means(&self) -> (f64, f64) {
        let amp = (self.k * self.r_hat_sq / (1.0 + self.k)).sqrt();
        (amp * self.phi.cos(), amp * self.phi.sin())
    }

    /// Standard deviation of the scattered component:
    /// σ = sqrt(r̂² / (2·(1+K)))
    pub fn scattered_std_dev(&self) -> f64 {
        (self.r_hat_sq / (2.0 * (1.0 + self.k))).sqrt()
    }
}
