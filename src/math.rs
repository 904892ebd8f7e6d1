//! Small numerical helpers

/// `n` evenly spaced points over `[start, stop]`, both endpoints exact.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    grid[n - 1] = stop;
    grid
}

/// Magnitude of a complex number
#[inline]
pub(crate) fn magnitude(i: f64, q: f64) -> f64 {
    (i * i + q * q).sqrt()
}

/// Phase of a complex number, principal value in (-π, π]
#[inline]
pub(crate) fn phase(i: f64, q: f64) -> f64 {
    q.atan2(i)
}

/// Exponentially scaled modified Bessel function of the first kind, order
/// zero: I₀e(x) = e^(-|x|) · I₀(x).
///
/// Abramowitz & Stegun 9.8.1/9.8.2 polynomial approximations (|ε| < 2e-7).
/// The scaled form stays finite for large arguments, where I₀ itself
/// overflows; callers fold the `e^x` back into their own exponent.
pub(crate) fn bessel_i0_scaled(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 3.75 {
        let t = (ax / 3.75) * (ax / 3.75);
        let i0 = 1.0
            + t * (3.5156229
                + t * (3.0899424
                    + t * (1.2067492
                        + t * (0.2659732 + t * (0.0360768 + t * 0.0045813)))));
        i0 * (-ax).exp()
    } else {
        let t = 3.75 / ax;
        (0.39894228
            + t * (0.01328592
                + t * (0.00225319
                    + t * (-0.00157565
                        + t * (0.00916281
                            + t * (-0.02057706
                                + t * (0.02635537
                                    + t * (-0.01647633 + t * 0.00392377))))))))
            / ax.sqrt()
    }
}

/// Error function, Abramowitz & Stegun 7.1.26 (|ε| < 1.5e-7).
pub(crate) fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let ax = x.abs();
    let t = 1.0 / (1.0 + 0.3275911 * ax);
    let poly = t
        * (0.254829592
            + t * (-0.284496736
                + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    sign * (1.0 - poly * (-ax * ax).exp())
}

/// Gaussian tail probability Q(x) = P(Z > x) for Z ~ N(0, 1).
#[inline]
pub(crate) fn q_func(x: f64) -> f64 {
    0.5 - 0.5 * erf(x / std::f64::consts::SQRT_2)
}
