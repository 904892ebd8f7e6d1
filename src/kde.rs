//! Gaussian kernel density estimation
//!
//! f̂(x) = (1/nh) Σᵢ K((x − xᵢ)/h),  K(u) = (1/√(2π)) exp(−u²/2)
//!
//! Bandwidth uses the Scott factor h = σ̂·n^(−1/5), with σ̂ the sample
//! standard deviation (n − 1 denominator). The estimate is evaluated on a
//! fixed-size grid spanning exactly [min, max] of the observed data.

use log::debug;

use crate::math::linspace;

/// Evaluation grid size for simulated densities
pub const GRID_POINTS: usize = 100;

/// A kernel density estimate: evaluation grid and density values
#[derive(Debug, Clone)]
pub struct DensityEstimate {
    /// Evaluation points spanning [min, max] of the data
    pub x: Vec<f64>,
    /// Estimated density at each evaluation point
    pub density: Vec<f64>,
    /// Bandwidth used
    pub bandwidth: f64,
}

/// Fit a Gaussian KDE to `data` and evaluate it at `grid_points` points
/// between the sample minimum and maximum.
pub fn gaussian_kde(data: &[f64], grid_points: usize) -> DensityEstimate {
    debug_assert!(data.len() >= 2, "KDE needs at least two samples");

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let bandwidth = variance.sqrt() * n.powf(-0.2);

    let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let x = linspace(lo, hi, grid_points);

    debug!(
        "kde: n={}, h={:.6}, grid=[{:.4}, {:.4}]",
        data.len(),
        bandwidth,
        lo,
        hi
    );

    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let density = x
        .iter()
        .map(|&xi| {
            let sum: f64 = data
                .iter()
                .map(|&xj| {
                    let u = (xi - xj) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum();
            sum * norm
        })
        .collect();

    DensityEstimate {
        x,
        density,
        bandwidth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::GaussianSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
        x.windows(2)
            .zip(y.windows(2))
            .map(|(xw, yw)| 0.5 * (yw[0] + yw[1]) * (xw[1] - xw[0]))
            .sum()
    }

    #[test]
    fn test_grid_spans_data_and_is_monotonic() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let data = GaussianSource::new(2.0, 0.5, &mut rng).sample_n(10_000);
        let est = gaussian_kde(&data, GRID_POINTS);

        assert_eq!(est.x.len(), GRID_POINTS);
        assert_eq!(est.density.len(), GRID_POINTS);

        let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(est.x[0], lo);
        assert_eq!(*est.x.last().unwrap(), hi);
        for w in est.x.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_density_peaks_near_mean() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let data = GaussianSource::new(3.0, 0.4, &mut rng).sample_n(50_000);
        let est = gaussian_kde(&data, GRID_POINTS);

        let peak_idx = est
            .density
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert!(
            (est.x[peak_idx] - 3.0).abs() < 0.1,
            "Peak at {} should be near 3.0",
            est.x[peak_idx]
        );
    }

    #[test]
    fn test_density_integrates_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let data = GaussianSource::new(0.0, 1.0, &mut rng).sample_n(50_000);
        let est = gaussian_kde(&data, GRID_POINTS);

        // Grid truncates at observed extremes, so a little mass sits outside
        let total = trapezoid(&est.x, &est.density);
        assert!(
            (total - 1.0).abs() < 0.02,
            "Density should integrate to ~1, got {}",
            total
        );
    }

    #[test]
    fn test_density_nonnegative_and_finite() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let data = GaussianSource::new(-1.0, 0.2, &mut rng).sample_n(10_000);
        let est = gaussian_kde(&data, GRID_POINTS);
        for &d in &est.density {
            assert!(d >= 0.0 && d.is_finite());
        }
    }

    #[test]
    fn test_bandwidth_scott_factor() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let data = GaussianSource::new(0.0, 1.0, &mut rng).sample_n(10_000);
        let est = gaussian_kde(&data, GRID_POINTS);

        // h = σ̂·n^(-1/5) with σ̂ ≈ 1 and n = 10⁴
        let expected = (10_000f64).powf(-0.2);
        assert!(
            (est.bandwidth - expected).abs() / expected < 0.05,
            "Bandwidth {} should be ~{}",
            est.bandwidth,
            expected
        );
    }
}
