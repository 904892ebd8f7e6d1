//! Closed-form Rician envelope and phase PDFs
//!
//! Envelope (Rice distribution):
//!
//!   f_R(r) = 2(1+K)r/r̂² · exp(−K − (1+K)r²/r̂²) · I₀(2r·√(K(1+K)/r̂²))
//!
//! Phase:
//!
//!   f_Θ(θ) = (1/2π)·e^(−K)·[1 + √(4πK)·e^(K·cos²(θ−φ))·cos(θ−φ)
//!            ·(1 − Q(√(2K)·cos(θ−φ)))]
//!
//! Both are evaluated over fixed process-wide grids. The envelope form
//! multiplies a vanishing exponential by a diverging Bessel term in the far
//! tail, so it is computed with the scaled I₀e and one combined exponent,
//! which is algebraically identical but finite across the whole bounded
//! parameter domain.

use lazy_static::lazy_static;
use std::f64::consts::PI;

use crate::math::{bessel_i0_scaled, linspace, q_func};
use crate::params::ModelParameters;

/// Number of points in each theoretical grid
pub const THEORY_POINTS: usize = 6000;

/// Upper edge of the envelope grid
pub const ENVELOPE_MAX: f64 = 6.0;

lazy_static! {
    /// Fixed envelope evaluation grid on [0, 6]
    pub static ref ENVELOPE_GRID: Vec<f64> = linspace(0.0, ENVELOPE_MAX, THEORY_POINTS);

    /// Fixed phase evaluation grid on [−π, π]
    pub static ref PHASE_GRID: Vec<f64> = linspace(-PI, PI, THEORY_POINTS);
}

/// An analytically computed density curve over a fixed grid
#[derive(Debug, Clone)]
pub struct TheoreticalCurve {
    pub grid: Vec<f64>,
    pub values: Vec<f64>,
}

/// Theoretical envelope PDF over the fixed [0, 6] grid.
pub fn envelope_pdf(params: &ModelParameters) -> TheoreticalCurve {
    let k = params.k();
    let r_hat_sq = params.r_hat_sq();
    let bessel_scale = 2.0 * (k * (1.0 + k) / r_hat_sq).sqrt();

    let values = ENVELOPE_GRID
        .iter()
        .map(|&r| {
            let z = bessel_scale * r;
            let exponent = -k - (1.0 + k) * r * r / r_hat_sq + z;
            2.0 * (1.0 + k) * r / r_hat_sq * exponent.exp() * bessel_i0_scaled(z)
        })
        .collect();

    TheoreticalCurve {
        grid: ENVELOPE_GRID.clone(),
        values,
    }
}

/// Theoretical phase PDF over the fixed [−π, π] grid.
pub fn phase_pdf(params: &ModelParameters) -> TheoreticalCurve {
    let k = params.k();
    let phi = params.phi();
    let specular = (4.0 * PI * k).sqrt();

    let values = PHASE_GRID
        .iter()
        .map(|&theta| {
            let c = (theta - phi).cos();
            // e^(−K) folded into the specular exponent: e^(K·c²−K)
            let tail = 1.0 - q_func((2.0 * k).sqrt() * c);
            ((-k).exp() + specular * (k * (c * c - 1.0)).exp() * c * tail) / (2.0 * PI)
        })
        .collect();

    TheoreticalCurve {
        grid: PHASE_GRID.clone(),
        values,
    }
}
