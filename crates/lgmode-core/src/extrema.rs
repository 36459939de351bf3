//! Locating intensity maxima and minima.
//!
//! Minima are exact: the intensity vanishes where $L_p(X) = 0$, so the
//! minima radii follow directly from the Laguerre roots $x_k$ as
//! $r_k = w_0 \sqrt{x_k / 2}$. Maxima are located two ways:
//!
//! - [`find_local_maxima`] scans a sampled profile for strict discrete peaks.
//! - [`find_analytic_maxima`] maps the critical points of
//!   $L_p(x)\,e^{-x/2}$ to radii, independent of any sampling grid.

use log::debug;

use crate::error::ModeError;
use crate::intensity::radius_for_argument;
use crate::laguerre::{critical_points, laguerre_roots};
use crate::types::{validate_length, RadialSamples};

/// Indices `i` with `values[i] > values[i-1]` and `values[i] > values[i+1]`.
///
/// The first and last samples are never reported. A monotone profile
/// (the p = 0 Gaussian) gives an empty result.
pub fn find_local_maxima(values: &[f64]) -> Vec<usize> {
    values
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| i + 1)
        .collect()
}

/// Map sample indices to radii (m). Out-of-range indices are skipped.
pub fn indices_to_radii(indices: &[usize], samples: &RadialSamples) -> Vec<f64> {
    indices.iter().filter_map(|&i| samples.at(i)).collect()
}

/// Radii (m) of the `p` intensity zeros, ascending. Empty for `p = 0`.
///
/// # Errors
/// [`ModeError::InvalidParameter`] for a non-positive waist, or
/// [`ModeError::EigenFailure`] from the root solve.
pub fn find_local_minima(p: u32, w0: f64) -> Result<Vec<f64>, ModeError> {
    validate_length("w0", w0)?;
    let radii: Vec<f64> = laguerre_roots(p)?
        .into_iter()
        .map(|x| radius_for_argument(x, w0))
        .collect();
    debug!("p = {}: {} minima", p, radii.len());
    Ok(radii)
}

/// Radii (m) of the `p` off-axis intensity maxima, ascending. Empty for `p = 0`.
///
/// The outermost maximum can lie beyond any particular sampling range.
///
/// # Errors
/// Same as [`find_local_minima`].
pub fn find_analytic_maxima(p: u32, w0: f64) -> Result<Vec<f64>, ModeError> {
    validate_length("w0", w0)?;
    let radii: Vec<f64> = critical_points(p)?
        .into_iter()
        .map(|x| radius_for_argument(x, w0))
        .collect();
    Ok(radii)
}
