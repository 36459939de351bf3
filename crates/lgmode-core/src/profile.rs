//! End-to-end profile computation.
//!
//! Ties the pieces together for one parameter set:
//! radial grid → intensity → normalised dataset → extrema.
//! Nothing is cached; each call recomputes from scratch.

use log::{debug, warn};

use crate::error::ModeError;
use crate::extrema::{find_analytic_maxima, find_local_maxima, find_local_minima, indices_to_radii};
use crate::intensity::evaluate_intensity;
use crate::types::{
    metres_to_micrometres, ExtremaResult, IntensityProfile, ModeParameters, ModeProfile,
    ProfilePoint,
};

/// Divide every sample by the first one.
///
/// # Errors
/// [`ModeError::DegenerateProfile`] if the input is empty or the first
/// sample is not a positive finite number.
pub fn normalise(values: &[f64]) -> Result<Vec<f64>, ModeError> {
    let reference = match values.first() {
        Some(&v) => v,
        None => return Err(ModeError::DegenerateProfile("empty profile".into())),
    };
    if !(reference.is_finite() && reference > 0.0) {
        return Err(ModeError::DegenerateProfile(format!(
            "normalisation reference is {}",
            reference
        )));
    }
    Ok(values.iter().map(|v| v / reference).collect())
}

/// Compute the intensity profile and extrema for one mode.
pub fn compute_profile(params: &ModeParameters) -> Result<ModeProfile, ModeError> {
    let p = params.p();
    let w0 = params.w0();

    let radii = params.radial_samples();
    debug!(
        "p = {}: {} samples on [0, {:.3e}] m, w0 = {:.3e} m",
        p,
        radii.len(),
        params.r_max(),
        w0
    );

    let intensity = IntensityProfile::new(evaluate_intensity(p, radii.as_array(), w0)?);
    if let Some(bad) = intensity.as_slice().iter().position(|v| !v.is_finite()) {
        return Err(ModeError::DegenerateProfile(format!(
            "non-finite intensity at sample {}",
            bad
        )));
    }

    let normalised = normalise(intensity.as_slice())?;
    let dataset: Vec<ProfilePoint> = radii
        .as_array()
        .iter()
        .zip(normalised.iter())
        .map(|(&r, &y)| ProfilePoint {
            x: metres_to_micrometres(r),
            y,
        })
        .collect();

    let maxima_indices = find_local_maxima(intensity.as_slice());
    let maxima = indices_to_radii(&maxima_indices, &radii);
    let minima = find_local_minima(p, w0)?;
    let analytic_maxima = find_analytic_maxima(p, w0)?;

    let in_range = analytic_maxima
        .iter()
        .filter(|&&r| r <= params.r_max())
        .count();
    if in_range != maxima.len() {
        warn!(
            "p = {}: discrete search found {} maxima, {} expected within r_max",
            p,
            maxima.len(),
            in_range
        );
    }

    Ok(ModeProfile {
        params: *params,
        radii,
        intensity,
        dataset,
        extrema: ExtremaResult { maxima, minima },
        maxima_indices,
        analytic_maxima,
    })
}
