//! Core types shared across the pipeline.
//!
//! All lengths inside the core are in metres. Conversion from the
//! micrometre values used at the boundary happens once, through
//! [`micrometres_to_metres`], before a [`ModeParameters`] is built.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::ModeError;

/// Highest radial mode index accepted at the input boundary.
pub const MAX_MODE_INDEX: u32 = 100;

/// Base number of radial samples for p = 0.
pub const BASE_SAMPLES: usize = 1000;

/// Additional radial samples per unit of p.
pub const SAMPLES_PER_ORDER: usize = 100;

const METRES_PER_MICROMETRE: f64 = 1e-6;
const MICROMETRES_PER_METRE: f64 = 1e6;

/// Convert a length in micrometres to metres.
pub fn micrometres_to_metres(value_um: f64) -> f64 {
    value_um * METRES_PER_MICROMETRE
}

/// Convert a length in metres to micrometres.
pub fn metres_to_micrometres(value_m: f64) -> f64 {
    value_m * MICROMETRES_PER_METRE
}

/// Validated inputs for a single mode computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeParameters {
    /// Radial mode index.
    p: u32,
    /// Maximum sampled radius (m).
    r_max: f64,
    /// Beam waist (m).
    w0: f64,
}

impl ModeParameters {
    /// Build a parameter set, rejecting anything outside the valid domain.
    ///
    /// # Errors
    /// [`ModeError::InvalidParameter`] if `p > MAX_MODE_INDEX`, or if
    /// `r_max` or `w0` is not a positive finite number.
    pub fn new(p: u32, r_max: f64, w0: f64) -> Result<Self, ModeError> {
        if p > MAX_MODE_INDEX {
            return Err(ModeError::invalid("p", p as f64, "mode index must be at most 100"));
        }
        validate_length("r_max", r_max)?;
        validate_length("w0", w0)?;
        Ok(Self { p, r_max, w0 })
    }

    /// Radial mode index.
    pub fn p(&self) -> u32 {
        self.p
    }

    /// Maximum sampled radius (m).
    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    /// Beam waist (m).
    pub fn w0(&self) -> f64 {
        self.w0
    }

    /// Number of radial samples used for this mode index: `1000 + 100·p`.
    pub fn sample_count(&self) -> usize {
        BASE_SAMPLES + SAMPLES_PER_ORDER * self.p as usize
    }

    /// Uniform radial grid from 0 to `r_max` inclusive.
    pub fn radial_samples(&self) -> RadialSamples {
        RadialSamples::linspace(self.r_max, self.sample_count())
    }
}

pub(crate) fn validate_length(name: &'static str, value: f64) -> Result<(), ModeError> {
    if !value.is_finite() {
        return Err(ModeError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ModeError::invalid(name, value, "must be positive"));
    }
    Ok(())
}

/// Uniformly spaced radii (m), starting at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialSamples {
    radii: Array1<f64>,
}

impl RadialSamples {
    /// `n` evenly spaced points on `[0, r_max]`, endpoints included.
    pub fn linspace(r_max: f64, n: usize) -> Self {
        Self {
            radii: Array1::linspace(0.0, r_max, n),
        }
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.radii
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Distance between neighbouring samples (m). Zero for fewer than two points.
    pub fn spacing(&self) -> f64 {
        if self.radii.len() < 2 {
            return 0.0;
        }
        self.radii[1] - self.radii[0]
    }

    /// Radius of the sample at `index`.
    pub fn at(&self, index: usize) -> Option<f64> {
        self.radii.get(index).copied()
    }
}

/// Intensity (m⁻², per unit beam power) at each radial sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityProfile {
    values: Vec<f64>,
}

impl IntensityProfile {
    pub fn new(values: Array1<f64>) -> Self {
        Self { values: values.to_vec() }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// On-axis value, used as the normalisation reference.
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }
}

/// Radii (m) of local intensity maxima and minima, both ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtremaResult {
    pub maxima: Vec<f64>,
    pub minima: Vec<f64>,
}

impl ExtremaResult {
    /// True when neither maxima nor minima were found (always the case for p = 0).
    pub fn is_empty(&self) -> bool {
        self.maxima.is_empty() && self.minima.is_empty()
    }
}

/// One row of the plottable dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Radius (µm).
    pub x: f64,
    /// Intensity normalised to the on-axis value.
    pub y: f64,
}

/// Complete result of one profile computation.
#[derive(Debug, Clone, Serialize)]
pub struct ModeProfile {
    pub params: ModeParameters,
    pub radii: RadialSamples,
    pub intensity: IntensityProfile,
    /// Normalised curve in boundary units, one point per radial sample.
    pub dataset: Vec<ProfilePoint>,
    /// Maxima from the discrete search, minima from the Laguerre roots.
    pub extrema: ExtremaResult,
    /// Sample indices of the discrete maxima, parallel to `extrema.maxima`.
    pub maxima_indices: Vec<usize>,
    /// Exact maxima radii (m) from the critical points of the Laguerre function.
    pub analytic_maxima: Vec<f64>,
}
