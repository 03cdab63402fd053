//! Log-space binomial coefficients and binomial probability masses.
//!
//! Lattice models weight each of the N+1 terminal nodes by
//! C(N,k)·pᵏ·(1-p)ᴺ⁻ᵏ. For large N the coefficient overflows `f64` while
//! pᵏ underflows, so both factors are combined in log space:
//!
//! ```text
//! ln C(N,k) = ln C(N,k-1) + ln(N-k+1) - ln(k)
//! mass(k)   = exp(ln C(N,k) + k·ln p + (N-k)·ln(1-p))
//! ```

/// Returns ln C(n, k) for k = 0..=n.
///
/// Built by the multiplicative recurrence, so the cost is O(n) and no
/// factorial is ever formed.
///
/// # Examples
/// ```
/// use pricer_core::math::ln_binomial_coefficients;
///
/// let coeffs = ln_binomial_coefficients(4);
/// let values: Vec<f64> = coeffs.iter().map(|c| c.exp().round()).collect();
/// assert_eq!(values, vec![1.0, 4.0, 6.0, 4.0, 1.0]);
/// ```
pub fn ln_binomial_coefficients(n: usize) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(n + 1);
    let mut current = 0.0_f64;
    coeffs.push(current);
    for k in 1..=n {
        current += ((n - k + 1) as f64).ln() - (k as f64).ln();
        coeffs.push(current);
    }
    // Symmetry removes the drift accumulated over the second half.
    for k in (n / 2 + 1)..=n {
        coeffs[k] = coeffs[n - k];
    }
    coeffs
}

/// Returns the binomial probability masses P(X = k), X ~ Bin(n, p), for k = 0..=n.
///
/// `p` must lie in the open interval (0, 1); callers validate this.
///
/// # Examples
/// ```
/// use pricer_core::math::binomial_masses;
///
/// let masses = binomial_masses(10, 0.3);
/// let total: f64 = masses.iter().sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// ```
pub fn binomial_masses(n: usize, p: f64) -> Vec<f64> {
    debug_assert!(p > 0.0 && p < 1.0);
    let ln_p = p.ln();
    let ln_q = (-p).ln_1p();
    ln_binomial_coefficients(n)
        .into_iter()
        .enumerate()
        .map(|(k, ln_c)| (ln_c + k as f64 * ln_p + (n - k) as f64 * ln_q).exp())
        .collect()
}
