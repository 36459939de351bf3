//! Radial intensity of Laguerre-Gaussian modes.
//!
//! With $X(r) = 2r^2 / w_0^2$ the intensity of the $\mathrm{LG}_{p0}$ mode is
//!
//! $$
//! I(r) = \frac{2}{\pi} \frac{1}{w_0^2} \left[L_p\bigl(X(r)\bigr)\right]^2 e^{-X(r)}
//! $$
//!
//! Since $L_p(0) = 1$ the on-axis value is $2 / (\pi w_0^2)$ for every $p$,
//! and because $|L_p(x)| \le e^{x/2}$ for $x \ge 0$ no sample exceeds it.

use std::f64::consts::PI;

use ndarray::Array1;

use crate::error::ModeError;
use crate::laguerre::laguerre;
use crate::types::validate_length;

/// Laguerre argument $X = 2r^2 / w_0^2$.
pub fn laguerre_argument(r: f64, w0: f64) -> f64 {
    2.0 * r * r / (w0 * w0)
}

/// Radius at which the Laguerre argument equals `x`, i.e. $w_0 \sqrt{x/2}$.
pub fn radius_for_argument(x: f64, w0: f64) -> f64 {
    w0 * (x / 2.0).sqrt()
}

/// On-axis intensity $2 / (\pi w_0^2)$.
pub fn peak_intensity(w0: f64) -> f64 {
    2.0 / (PI * w0 * w0)
}

fn intensity_unchecked(p: u32, r: f64, w0: f64) -> f64 {
    let x = laguerre_argument(r, w0);
    // Amplitude first: |L_p(x)| e^{-x/2} <= 1, so it stays finite where
    // L_p² alone would overflow.
    let amplitude = laguerre(p, x) * (-0.5 * x).exp();
    if !amplitude.is_finite() {
        // L_p itself overflowed; the true amplitude is far below f64 range.
        return 0.0;
    }
    peak_intensity(w0) * amplitude * amplitude
}

/// Intensity at a single radius.
///
/// # Errors
/// [`ModeError::InvalidParameter`] if `w0` is not positive and finite.
pub fn intensity_at(p: u32, r: f64, w0: f64) -> Result<f64, ModeError> {
    validate_length("w0", w0)?;
    Ok(intensity_unchecked(p, r, w0))
}

/// Evaluate the intensity elementwise over `r`.
///
/// Radii are expected to be non-negative; they are not clamped.
///
/// # Errors
/// [`ModeError::InvalidParameter`] if `w0` is not positive and finite.
pub fn evaluate_intensity(p: u32, r: &Array1<f64>, w0: f64) -> Result<Array1<f64>, ModeError> {
    validate_length("w0", w0)?;
    Ok(r.mapv(|ri| intensity_unchecked(p, ri, w0)))
}
